//! Quote model and DTOs.

use quotekeeper_core::types::DbId;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `quotes` table.
///
/// `tags` lives in a nullable TEXT column holding a JSON array. `None`
/// means the quote was created without tags and serializes to `null` on
/// the wire, distinct from an empty list.
#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    pub id: DbId,
    pub text: String,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a new quote. The id is assigned by storage at insert
/// time.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuote {
    pub text: String,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Query parameters for `GET /quotes`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListQuotesParams {
    /// Exact-match author filter, applied in SQL.
    pub author: Option<String>,
    /// Tag containment filter, applied in memory over the returned page.
    pub tag: Option<String>,
    /// Maximum results. Defaults to 100.
    pub limit: Option<i64>,
    /// Offset for pagination.
    pub offset: Option<i64>,
}
