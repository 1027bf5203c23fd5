//! Route tree assembly.

pub mod health;
pub mod quotes;

use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// GET  /               health probe
/// GET  /health         health probe
/// GET  /quotes         list
/// POST /quotes         create
/// GET  /quotes/random  random sample
/// GET  /quotes/{id}    fetch
/// DEL  /quotes/{id}    delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/quotes", quotes::router())
}

/// Attach the static asset fallback when `static_dir` exists.
///
/// Route precedence is explicit: API routes always win for identical paths
/// and methods, and the fallback only sees requests no route matched.
pub fn with_static_fallback<S>(router: Router<S>, static_dir: &Path) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    if static_dir.is_dir() {
        tracing::info!(dir = %static_dir.display(), "Serving static assets for unmatched routes");
        router.fallback_service(ServeDir::new(static_dir))
    } else {
        router
    }
}
