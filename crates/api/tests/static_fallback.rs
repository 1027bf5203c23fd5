//! Static asset fallback behaviour.
//!
//! API routes take explicit precedence; only requests no route matched
//! fall through to the asset directory.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, get, post_json};
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations")]
async fn serves_assets_for_unmatched_paths(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log('hi');").unwrap();

    let app = common::build_test_app_with_static(pool, dir.path());
    let response = get(app, "/app.js").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"console.log('hi');");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn api_routes_win_over_assets(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    // A file shadowing an API path must never be served for it.
    std::fs::write(dir.path().join("quotes"), "not json").unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Quote Keeper</h1>").unwrap();

    let app = common::build_test_app_with_static(pool.clone(), dir.path());
    let response = get(app, "/quotes").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await.is_array());

    // The root stays an API route (liveness probe), even with index.html
    // present.
    let app = common::build_test_app_with_static(pool.clone(), dir.path());
    let response = get(app, "/").await;
    assert_eq!(body_json(response).await["status"], "ok");

    // Non-GET API methods keep working with the fallback mounted.
    let app = common::build_test_app_with_static(pool, dir.path());
    let response = post_json(app, "/quotes", serde_json::json!({"text": "X"})).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_static_dir_leaves_plain_404(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");

    let app = common::build_test_app_with_static(pool, &missing);
    let response = get(app, "/app.js").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
