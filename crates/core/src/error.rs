use crate::types::DbId;

/// Domain error taxonomy.
///
/// Everything a handler can fail with at the domain level; the api crate
/// maps these onto HTTP statuses.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A collection-level operation found zero rows to work with.
    #[error("No {entity} found")]
    Empty { entity: &'static str },

    #[error("Validation failed: {0}")]
    Validation(String),
}
