//! Value types exchanged with the completion gateway.

use crate::prompts::Prompt;

/// A single completion call: the user prompt plus whether the provider
/// should be forced into JSON-object output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub structured_output: bool,
}

impl From<Prompt> for CompletionRequest {
    fn from(prompt: Prompt) -> Self {
        Self {
            prompt: prompt.text,
            structured_output: prompt.structured_output,
        }
    }
}

/// Result of one completion call.
///
/// Provider and transport failures are folded into [`CompletionOutcome::Failed`]
/// at the gateway boundary; callers never see the underlying error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// Raw reply text from the model, unparsed.
    Text(String),
    /// The call did not produce a reply.
    Failed,
}

impl CompletionOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, CompletionOutcome::Failed)
    }
}
