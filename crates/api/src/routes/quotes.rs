//! Route definitions for the quote store.

use axum::routing::get;
use axum::Router;

use crate::handlers::quotes;
use crate::state::AppState;

/// Quote routes mounted at `/quotes`.
///
/// ```text
/// GET    /         -> list_quotes
/// POST   /         -> create_quote
/// GET    /random   -> random_quote
/// GET    /{id}     -> get_quote
/// DELETE /{id}     -> delete_quote
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(quotes::list_quotes).post(quotes::create_quote))
        .route("/random", get(quotes::random_quote))
        .route("/{id}", get(quotes::get_quote).delete(quotes::delete_quote))
}
