//! Handler for `POST /analyze`.
//!
//! Accepts one uploaded source file, asks the model for a static analysis,
//! and echoes the full decoded source back alongside the result.

use axum::extract::multipart::{Field, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::Json;
use lift_core::completion::CompletionRequest;
use lift_core::error::CoreError;
use lift_core::prompts::analyze_prompt;
use lift_core::reconcile::{reconcile, Reconciled};
use lift_core::schema::{AnalysisReport, AnalysisResult, AnalysisSource};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Multipart field name carrying the upload.
pub const FILE_FIELD: &str = "file";

/// Filename reported when the upload part does not carry one.
const UNKNOWN_FILENAME: &str = "unknown";

/// One uploaded file, already read into memory.
struct Upload {
    filename: String,
    bytes: Vec<u8>,
}

/// POST /analyze
///
/// On a successful completion `analysis` holds the model's JSON text as
/// returned (after checking it against [`AnalysisReport`]); on a failed
/// completion it holds the encoded fallback report and `source` is
/// `MOCK_FALLBACK`.
pub async fn analyze_code(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<AnalysisResult>> {
    let upload = read_upload(multipart?).await?;

    let source_code =
        String::from_utf8(upload.bytes).map_err(|e| CoreError::Decode(e.to_string()))?;

    let prompt = analyze_prompt(&source_code);
    let outcome = state.gateway.complete(&CompletionRequest::from(prompt)).await;

    let (analysis, source) = match reconcile(outcome, AnalysisReport::fallback())? {
        Reconciled::Model { raw, .. } => (raw, AnalysisSource::Model),
        Reconciled::Fallback(report) => {
            tracing::warn!(filename = %upload.filename, "Serving fallback analysis");
            (report.to_json_text()?, AnalysisSource::MockFallback)
        }
    };

    Ok(Json(AnalysisResult {
        filename: upload.filename,
        analysis,
        source_code,
        source,
    }))
}

/// Pull the upload out of the form.
///
/// Takes the `file` field, or failing that the first part that carries a
/// filename. Other parts are ignored.
async fn read_upload(mut multipart: Multipart) -> AppResult<Upload> {
    while let Some(field) = multipart.next_field().await? {
        if is_upload_field(&field) {
            let filename = field.file_name().unwrap_or(UNKNOWN_FILENAME).to_string();
            let bytes = field.bytes().await?;
            return Ok(Upload {
                filename,
                bytes: bytes.to_vec(),
            });
        }
    }

    Err(AppError::BadRequest(format!(
        "Missing '{FILE_FIELD}' upload in multipart form"
    )))
}

fn is_upload_field(field: &Field<'_>) -> bool {
    field.name() == Some(FILE_FIELD) || field.file_name().is_some()
}
