#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use lift_api::config::ServerConfig;
use lift_api::router::build_app_router;
use lift_api::state::AppState;
use lift_core::completion::{CompletionOutcome, CompletionRequest};
use lift_groq::config::GroqConfig;
use lift_groq::gateway::CompletionGateway;

/// Multipart boundary used by [`post_file`] and [`post_form_field`].
pub const BOUNDARY: &str = "----lift-test-boundary";

/// Gateway that replies with a fixed outcome and records every request.
pub struct ScriptedGateway {
    reply: CompletionOutcome,
    seen: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedGateway {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: CompletionOutcome::Text(text.to_string()),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: CompletionOutcome::Failed,
            seen: Mutex::new(Vec::new()),
        })
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionGateway for ScriptedGateway {
    async fn complete(&self, request: &CompletionRequest) -> CompletionOutcome {
        self.seen.lock().unwrap().push(request.clone());
        self.reply.clone()
    }
}

/// Build a test `ServerConfig` with safe defaults (permissive CORS, no
/// provider credential).
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: None,
        request_timeout_secs: 30,
        max_upload_bytes: 10 * 1024 * 1024,
        groq: GroqConfig::default(),
    }
}

/// Build the full application router around the given gateway.
///
/// Uses the same `build_app_router` as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_test_app(gateway: Arc<ScriptedGateway>) -> Router {
    build_app_with_config(gateway, test_config())
}

pub fn build_app_with_config(gateway: Arc<ScriptedGateway>, config: ServerConfig) -> Router {
    let state = AppState {
        config: Arc::new(config.clone()),
        gateway,
    };
    build_app_router(state, &config).unwrap()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw_json(app, uri, body.to_string()).await
}

pub async fn post_raw_json(app: Router, uri: &str, body: String) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a single-part multipart form with the given field name, filename
/// and raw bytes.
pub async fn post_file(
    app: Router,
    uri: &str,
    field: &str,
    filename: &str,
    content: &[u8],
) -> Response {
    let disposition = format!("form-data; name=\"{field}\"; filename=\"{filename}\"");
    post_multipart_part(app, uri, &disposition, content).await
}

/// POST a single-part multipart form whose part carries no filename.
pub async fn post_form_field(app: Router, uri: &str, field: &str, value: &str) -> Response {
    let disposition = format!("form-data; name=\"{field}\"");
    post_multipart_part(app, uri, &disposition, value.as_bytes()).await
}

async fn post_multipart_part(
    app: Router,
    uri: &str,
    disposition: &str,
    content: &[u8],
) -> Response {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(format!("Content-Disposition: {disposition}\r\n").as_bytes());
    body.extend_from_slice(b"Content-Type: text/plain\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
