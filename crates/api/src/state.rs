use std::sync::Arc;

use lift_groq::gateway::CompletionGateway;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Completion provider used by every model-backed endpoint.
    pub gateway: Arc<dyn CompletionGateway>,
}
