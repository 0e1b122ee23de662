//! Axum route handlers for the Scoring API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::scoring::ScoreResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    #[serde(flatten)]
    pub result: ScoreResult,
    pub scorer_backend: String,
}

/// POST /api/v1/resumes/score
///
/// Blank inputs are not an error: they score 0 with no keywords.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Json<ScoreResponse> {
    let result = state
        .scorer
        .score(&request.resume_text, &request.job_description);

    Json(ScoreResponse {
        result,
        scorer_backend: state.scorer.backend().to_string(),
    })
}
