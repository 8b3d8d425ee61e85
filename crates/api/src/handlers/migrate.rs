use axum::extract::State;
use axum::Json;
use lift_core::completion::CompletionRequest;
use lift_core::prompts::migrate_prompt;
use lift_core::reconcile::reconcile;
use lift_core::schema::{MigrationRequest, MigrationResult};

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// POST /migrate
///
/// Returns the model's `{ migrated_code, migration_steps }` object as the
/// whole body, or the fixed fallback object when the completion fails.
pub async fn migrate_code(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<MigrationRequest>,
) -> AppResult<Json<MigrationResult>> {
    let prompt = migrate_prompt(&input.code, &input.target_lang);
    let outcome = state.gateway.complete(&CompletionRequest::from(prompt)).await;

    let reconciled = reconcile(outcome, MigrationResult::fallback())?;
    if reconciled.is_fallback() {
        tracing::warn!(target_lang = %input.target_lang, "Serving fallback migration");
    }

    Ok(Json(reconciled.into_value()))
}
