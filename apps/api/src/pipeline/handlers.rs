//! Axum route handler for the full outreach pipeline.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::pipeline::{run_pipeline, PipelineReport, PipelineRequest};
use crate::state::AppState;

/// POST /api/v1/pipeline
///
/// Extract → summary → score → suggestions → email, per posting.
/// Per-posting stage failures are reported in the body, not as an HTTP error.
pub async fn handle_run_pipeline(
    State(state): State<AppState>,
    Json(request): Json<PipelineRequest>,
) -> Result<Json<PipelineReport>, AppError> {
    if request.scraped_text.trim().is_empty() {
        return Err(AppError::Validation("scraped_text cannot be empty".to_string()));
    }

    let report = run_pipeline(state.llm.as_ref(), state.scorer.as_ref(), &request).await?;
    Ok(Json(report))
}
