//! Axum route handlers for the Extraction API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extraction::{compose_email, extract_jobs, match_summary, suggest, JobPosting, Suggestion};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExtractJobsRequest {
    #[serde(default)]
    pub scraped_text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractJobsResponse {
    pub jobs: Vec<JobPosting>,
}

#[derive(Debug, Deserialize)]
pub struct ResumeJobRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Serialize)]
pub struct MatchSummaryResponse {
    pub matched_summary: String,
}

#[derive(Debug, Deserialize)]
pub struct EmailRequest {
    pub job: JobPosting,
    #[serde(default)]
    pub links: Vec<String>,
    #[serde(default)]
    pub matched_summary: String,
}

#[derive(Debug, Serialize)]
pub struct EmailResponse {
    pub email: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/jobs/extract
///
/// Extracts job postings from scraped careers-page text.
/// Unparseable generator output is a 422 with an actionable message.
pub async fn handle_extract_jobs(
    State(state): State<AppState>,
    Json(request): Json<ExtractJobsRequest>,
) -> Result<Json<ExtractJobsResponse>, AppError> {
    if request.scraped_text.trim().is_empty() {
        return Err(AppError::Validation("scraped_text cannot be empty".to_string()));
    }

    let jobs = extract_jobs(state.llm.as_ref(), &request.scraped_text).await?;
    Ok(Json(ExtractJobsResponse { jobs }))
}

/// POST /api/v1/resumes/suggestions
pub async fn handle_suggestions(
    State(state): State<AppState>,
    Json(request): Json<ResumeJobRequest>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    let suggestions = suggest(
        state.llm.as_ref(),
        &request.resume_text,
        &request.job_description,
    )
    .await?;
    Ok(Json(SuggestionsResponse { suggestions }))
}

/// POST /api/v1/resumes/match-summary
pub async fn handle_match_summary(
    State(state): State<AppState>,
    Json(request): Json<ResumeJobRequest>,
) -> Result<Json<MatchSummaryResponse>, AppError> {
    if request.resume_text.trim().is_empty() || request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text and job_description are required".to_string(),
        ));
    }

    let matched_summary = match_summary(
        state.llm.as_ref(),
        &request.job_description,
        &request.resume_text,
    )
    .await?;
    Ok(Json(MatchSummaryResponse { matched_summary }))
}

/// POST /api/v1/emails
pub async fn handle_compose_email(
    State(state): State<AppState>,
    Json(request): Json<EmailRequest>,
) -> Result<Json<EmailResponse>, AppError> {
    let email = compose_email(
        state.llm.as_ref(),
        &request.job,
        &request.links,
        &request.matched_summary,
    )
    .await?;
    Ok(Json(EmailResponse { email }))
}
