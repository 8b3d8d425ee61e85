//! Domain layer for the code migration assistant.
//!
//! Holds everything that does not touch the network: prompt templates,
//! the output schemas the model must satisfy, their fallback payloads, and
//! the reconciler that turns a completion outcome into a typed result.

pub mod completion;
pub mod error;
pub mod prompts;
pub mod reconcile;
pub mod schema;
