//! Turn a [`CompletionOutcome`] into a typed result.
//!
//! A failed completion yields the caller's fallback payload without any
//! parsing. A reply that is not valid JSON for the expected schema is a
//! [`CoreError::MalformedModelOutput`], never a silent fallback.

use serde::de::DeserializeOwned;

use crate::completion::CompletionOutcome;
use crate::error::CoreError;

/// A typed result together with the path that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciled<T> {
    /// Parsed from the model reply. `raw` is the reply with any Markdown
    /// fence removed.
    Model { value: T, raw: String },
    /// The completion failed and the fallback payload was substituted.
    Fallback(T),
}

impl<T> Reconciled<T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Reconciled::Fallback(_))
    }

    pub fn into_value(self) -> T {
        match self {
            Reconciled::Model { value, .. } | Reconciled::Fallback(value) => value,
        }
    }
}

/// Reconcile a completion outcome against the schema `T`.
pub fn reconcile<T: DeserializeOwned>(
    outcome: CompletionOutcome,
    fallback: T,
) -> Result<Reconciled<T>, CoreError> {
    match outcome {
        CompletionOutcome::Failed => Ok(Reconciled::Fallback(fallback)),
        CompletionOutcome::Text(text) => {
            let raw = strip_code_fence(&text);
            let value = serde_json::from_str::<T>(raw)
                .map_err(|e| CoreError::MalformedModelOutput(e.to_string()))?;
            Ok(Reconciled::Model {
                value,
                raw: raw.to_string(),
            })
        }
    }
}

/// Remove a surrounding ```` ```json ```` / ```` ``` ```` fence, if present.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json", "JSON", ...) on the opening line.
    let body = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphabetic()),
    };
    body.trim_end().trim_end_matches("```").trim()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::schema::{MigrationResult, TestGenResult};

    #[test]
    fn failed_outcome_returns_fallback_untouched() {
        let result = reconcile(CompletionOutcome::Failed, TestGenResult::fallback()).unwrap();
        assert_eq!(result, Reconciled::Fallback(TestGenResult::fallback()));
        assert!(result.is_fallback());
    }

    #[test]
    fn valid_reply_is_parsed() {
        let reply = r#"{"migrated_code":"print(1)","migration_steps":["a","b"]}"#;
        let result = reconcile(
            CompletionOutcome::Text(reply.to_string()),
            MigrationResult::fallback(),
        )
        .unwrap();

        assert_matches!(&result, Reconciled::Model { raw, .. } if raw == reply);
        assert_eq!(
            result.into_value(),
            MigrationResult {
                migrated_code: "print(1)".to_string(),
                migration_steps: vec!["a".to_string(), "b".to_string()],
            }
        );
    }

    #[test]
    fn invalid_json_is_malformed_not_fallback() {
        let result = reconcile(
            CompletionOutcome::Text("{not json".to_string()),
            TestGenResult::fallback(),
        );
        assert_matches!(result, Err(CoreError::MalformedModelOutput(_)));
    }

    #[test]
    fn schema_mismatch_is_malformed() {
        let result = reconcile(
            CompletionOutcome::Text(r#"{"tests":"..."}"#.to_string()),
            TestGenResult::fallback(),
        );
        assert_matches!(result, Err(CoreError::MalformedModelOutput(_)));
    }

    #[test]
    fn fenced_reply_is_parsed() {
        let reply = "```json\n{\"test_code\":\"#[test] fn t() {}\"}\n```";
        let result = reconcile(
            CompletionOutcome::Text(reply.to_string()),
            TestGenResult::fallback(),
        )
        .unwrap();
        assert_matches!(&result, Reconciled::Model { raw, .. } if raw == "{\"test_code\":\"#[test] fn t() {}\"}");
    }

    // -- strip_code_fence --

    #[test]
    fn unfenced_text_is_only_trimmed() {
        assert_eq!(strip_code_fence("  {\"a\":1}\n"), "{\"a\":1}");
    }

    #[test]
    fn bare_fence_is_removed() {
        assert_eq!(strip_code_fence("```\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn single_line_fence_is_removed() {
        assert_eq!(strip_code_fence("```json{\"a\":1}```"), "{\"a\":1}");
    }
}
