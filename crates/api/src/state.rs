use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`). The pool is injected here rather than held in module-level
/// state, so tests can run each against their own database.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: quotekeeper_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
