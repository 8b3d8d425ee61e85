//! Prompt templates for the three model-backed operations.
//!
//! Each builder embeds caller-supplied text into a fixed instruction and
//! declares the exact JSON shape expected back. All builders request
//! structured (JSON-object) output.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of characters of source code sent to the model for analysis.
pub const MAX_ANALYSIS_CHARS: usize = 4_000;

/// A rendered prompt, ready to hand to the completion gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub text: String,
    pub structured_output: bool,
}

impl Prompt {
    fn json(text: String) -> Self {
        Self {
            text,
            structured_output: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Build the analysis prompt.
///
/// Only the first [`MAX_ANALYSIS_CHARS`] characters of `code` are embedded.
pub fn analyze_prompt(code: &str) -> Prompt {
    let excerpt = truncate_chars(code, MAX_ANALYSIS_CHARS);
    Prompt::json(format!(
        r#"
    Analyze the following code. Return a JSON object with these EXACT keys:
    {{
        "language": "string",
        "complexity": "string",
        "summary": "string",
        "risks": ["string", "string"],
        "modernization_suggestions": ["string", "string"]
    }}

    CODE TO ANALYZE:
    {excerpt}
    "#
    ))
}

/// Build the migration prompt for converting `code` into `target_lang`.
pub fn migrate_prompt(code: &str, target_lang: &str) -> Prompt {
    Prompt::json(format!(
        r#"
    Convert the following code to {target_lang}.
    Return a JSON object with these EXACT keys:
    {{
        "migrated_code": "string (the full new code)",
        "migration_steps": ["string (step 1)", "string (step 2)"]
    }}

    IMPORTANT: Ensure the 'migrated_code' is a valid string with proper escaping.

    CODE TO MIGRATE:
    {code}
    "#
    ))
}

/// Build the unit-test generation prompt.
pub fn test_gen_prompt(code: &str) -> Prompt {
    Prompt::json(format!(
        r#"
    Write a Unit Test suite for this code.
    Return a JSON object with one key:
    {{
        "test_code": "string (the full test code)"
    }}

    CODE:
    {code}
    "#
    ))
}

/// Return the prefix of `text` holding at most `max_chars` characters.
///
/// Cuts on a char boundary, so multi-byte input is never split.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
