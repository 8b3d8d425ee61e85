//! The completion gateway boundary.
//!
//! [`CompletionGateway`] is the single seam between request handling and
//! the LLM provider. Implementations never return errors: any failure is
//! logged here and reported as [`CompletionOutcome::Failed`].

use async_trait::async_trait;
use lift_core::completion::{CompletionOutcome, CompletionRequest};

use crate::api::{ChatCompletionRequest, ChatMessage, GroqApi, GroqApiError, ResponseFormat};
use crate::config::GroqConfig;

/// System instruction sent with every completion call.
pub const SYSTEM_PROMPT: &str = "You are an expert Senior Software Architect specializing in legacy code migration. You always output valid JSON when requested.";

/// Sampling temperature for every completion call.
pub const TEMPERATURE: f32 = 0.2;

/// A provider capable of answering one completion call.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> CompletionOutcome;
}

/// [`CompletionGateway`] backed by the Groq API.
pub struct GroqGateway {
    api: GroqApi,
    model: String,
}

impl GroqGateway {
    pub fn new(config: &GroqConfig) -> Result<Self, GroqApiError> {
        Ok(Self {
            api: GroqApi::new(config)?,
            model: config.model.clone(),
        })
    }

    /// Build the provider request for a completion call.
    pub fn build_request(&self, request: &CompletionRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(request.prompt.clone()),
            ],
            temperature: TEMPERATURE,
            response_format: request
                .structured_output
                .then(ResponseFormat::json_object),
        }
    }
}

#[async_trait]
impl CompletionGateway for GroqGateway {
    async fn complete(&self, request: &CompletionRequest) -> CompletionOutcome {
        let body = self.build_request(request);

        let response = match self.api.chat_completion(&body).await {
            Ok(response) => response,
            Err(GroqApiError::MissingApiKey) => {
                tracing::warn!("Groq API key missing, skipping completion call");
                return CompletionOutcome::Failed;
            }
            Err(e) => {
                tracing::error!(error = %e, model = %self.model, "Groq API error");
                return CompletionOutcome::Failed;
            }
        };

        if let Some(usage) = response.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "Groq completion finished"
            );
        }

        match response.first_content() {
            Some(content) if !content.is_empty() => CompletionOutcome::Text(content.to_string()),
            _ => {
                tracing::error!(model = %self.model, "Groq reply carried no message content");
                CompletionOutcome::Failed
            }
        }
    }
}
