//! Groq completion gateway.
//!
//! Provides the REST client for Groq's OpenAI-compatible chat-completions
//! endpoint and the [`gateway::CompletionGateway`] boundary that folds every
//! provider failure into [`lift_core::completion::CompletionOutcome::Failed`].

pub mod api;
pub mod config;
pub mod gateway;
