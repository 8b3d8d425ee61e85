//! Request bodies, model output schemas, and their fallback payloads.
//!
//! Every schema has a `fallback()` constructor returning the fixed payload
//! served when the completion call fails. The fallback serializes to the
//! same key set as a parsed model reply, so callers cannot tell the two
//! paths apart by shape.

use std::io;

use serde::{Deserialize, Serialize};
use serde_json::ser::Formatter;
use validator::Validate;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Origin tags
// ---------------------------------------------------------------------------

/// Which path produced an analysis result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisSource {
    #[serde(rename = "Groq AI")]
    Model,
    #[serde(rename = "MOCK_FALLBACK")]
    MockFallback,
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Body of `POST /migrate`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MigrationRequest {
    pub code: String,
    #[validate(length(min = 1, message = "target_lang must not be empty"))]
    pub target_lang: String,
}

/// Body of `POST /generate-tests`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TestGenRequest {
    pub migrated_code: String,
}

// ---------------------------------------------------------------------------
// Model output schemas
// ---------------------------------------------------------------------------

/// Static analysis of a source file, as produced by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub language: String,
    pub complexity: String,
    pub summary: String,
    pub risks: Vec<String>,
    pub modernization_suggestions: Vec<String>,
}

impl AnalysisReport {
    pub fn fallback() -> Self {
        Self {
            language: "Legacy Code (Detected)".to_string(),
            complexity: "High".to_string(),
            summary: "Analysis failed (API Error). Showing cached result.".to_string(),
            risks: vec!["Manual review recommended".to_string()],
            modernization_suggestions: vec!["Refactor immediately".to_string()],
        }
    }

    /// Encode the report as JSON text with a space after every `:` and `,`,
    /// the layout clients already receive for the fallback analysis.
    pub fn to_json_text(&self) -> Result<String, CoreError> {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
        self.serialize(&mut ser).map_err(|e| CoreError::Internal(e.to_string()))?;
        String::from_utf8(buf).map_err(|e| CoreError::Internal(e.to_string()))
    }
}

/// Single-line JSON with `": "` and `", "` separators.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Migrated code plus the ordered steps the model took.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationResult {
    pub migrated_code: String,
    pub migration_steps: Vec<String>,
}

impl MigrationResult {
    pub fn fallback() -> Self {
        Self {
            migrated_code: "// Error: AI API Failed. Please try again.".to_string(),
            migration_steps: vec!["Check API Key quota".to_string()],
        }
    }
}

/// Generated unit-test suite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestGenResult {
    pub test_code: String,
}

impl TestGenResult {
    pub fn fallback() -> Self {
        Self {
            test_code: "// Error generating tests".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Response envelopes
// ---------------------------------------------------------------------------

/// Response body of `POST /analyze`.
///
/// `analysis` is a JSON-encoded string rather than a nested object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub filename: String,
    pub analysis: String,
    pub source_code: String,
    pub source: AnalysisSource,
}
