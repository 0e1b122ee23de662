pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::extraction::handlers as extraction;
use crate::pipeline::handlers as pipeline;
use crate::scoring::handlers as scoring;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Extraction API
        .route("/api/v1/jobs/extract", post(extraction::handle_extract_jobs))
        .route(
            "/api/v1/resumes/suggestions",
            post(extraction::handle_suggestions),
        )
        .route(
            "/api/v1/resumes/match-summary",
            post(extraction::handle_match_summary),
        )
        .route("/api/v1/emails", post(extraction::handle_compose_email))
        // Scoring API
        .route("/api/v1/resumes/score", post(scoring::handle_score))
        // Full pipeline
        .route("/api/v1/pipeline", post(pipeline::handle_run_pipeline))
        .with_state(state)
}
