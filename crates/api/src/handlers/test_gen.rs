use axum::extract::State;
use axum::Json;
use lift_core::completion::CompletionRequest;
use lift_core::prompts::test_gen_prompt;
use lift_core::reconcile::reconcile;
use lift_core::schema::{TestGenRequest, TestGenResult};

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// POST /generate-tests
pub async fn generate_tests(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<TestGenRequest>,
) -> AppResult<Json<TestGenResult>> {
    let prompt = test_gen_prompt(&input.migrated_code);
    let outcome = state.gateway.complete(&CompletionRequest::from(prompt)).await;

    let reconciled = reconcile(outcome, TestGenResult::fallback())?;
    if reconciled.is_fallback() {
        tracing::warn!("Serving fallback test suite");
    }

    Ok(Json(reconciled.into_value()))
}
