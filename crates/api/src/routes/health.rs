use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Root status payload.
#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub ai_engine: &'static str,
}

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether a provider credential was present at startup.
    pub credential_configured: bool,
}

/// GET / -- static liveness banner.
async fn root_status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "Server is running",
        ai_engine: "Groq Llama 3",
    })
}

/// GET /health -- service health. Without a credential every model-backed
/// endpoint serves its fallback payload, reported here as `degraded`.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let credential_configured = state.config.groq.has_credential();

    let status = if credential_configured { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        credential_configured,
    })
}

/// Mount status and health check routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root_status))
        .route("/health", get(health_check))
}
