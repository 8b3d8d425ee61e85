pub mod health;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the model-backed route tree.
///
/// Route hierarchy:
///
/// ```text
/// /analyze              POST multipart, static analysis of one file
/// /migrate              POST JSON, convert code to a target language
/// /generate-tests       POST JSON, unit tests for migrated code
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/analyze", post(handlers::analyze::analyze_code))
        .route("/migrate", post(handlers::migrate::migrate_code))
        .route("/generate-tests", post(handlers::test_gen::generate_tests))
}
