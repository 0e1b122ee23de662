//! Outreach Pipeline — orchestrates extraction, scoring, suggestions and email for one page and one resume.
//!
//! Flow: extract_jobs → for each posting: match_summary → score → suggest → compose_email.
//!
//! Extraction failure aborts the run. Later stages are independent given the two raw texts,
//! so a failed summary or email is recorded on the posting and the run continues.
//! Stages run one at a time; nothing is retried.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::extraction::{
    compose_email, extract_jobs, match_summary, suggest, ExtractionError, JobPosting, Suggestion,
};
use crate::llm_client::TextGenerator;
use crate::scoring::{ResumeScorer, ScoreResult};

pub mod handlers;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct PipelineRequest {
    // Missing texts read as blank so the handler's validation answers with a 400.
    #[serde(default)]
    pub scraped_text: String,
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub links: Vec<String>,
    #[serde(default = "default_true")]
    pub include_suggestions: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    MatchSummary,
    Suggestions,
    Email,
}

/// A stage that failed for one posting. The rest of the posting's report is still valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageError {
    pub stage: Stage,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostingReport {
    pub job: JobPosting,
    pub score: ScoreResult,
    pub matched_summary: Option<String>,
    pub suggestions: Vec<Suggestion>,
    pub email: Option<String>,
    pub stage_errors: Vec<StageError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineReport {
    pub postings: Vec<PostingReport>,
    pub scorer_backend: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the full pipeline. Only job extraction can fail the whole run.
pub async fn run_pipeline(
    llm: &dyn TextGenerator,
    scorer: &dyn ResumeScorer,
    request: &PipelineRequest,
) -> Result<PipelineReport, ExtractionError> {
    let jobs = extract_jobs(llm, &request.scraped_text).await?;

    let mut postings = Vec::with_capacity(jobs.len());
    for job in jobs {
        postings.push(process_posting(llm, scorer, request, job).await);
    }

    let failed_stages: usize = postings.iter().map(|p| p.stage_errors.len()).sum();
    info!(
        "Pipeline finished: {} postings, {} failed stages",
        postings.len(),
        failed_stages
    );

    Ok(PipelineReport {
        postings,
        scorer_backend: scorer.backend().to_string(),
    })
}

async fn process_posting(
    llm: &dyn TextGenerator,
    scorer: &dyn ResumeScorer,
    request: &PipelineRequest,
    job: JobPosting,
) -> PostingReport {
    let mut stage_errors = Vec::new();

    let matched_summary = match match_summary(llm, &job.description, &request.resume_text).await {
        Ok(summary) => Some(summary),
        Err(e) => {
            warn!("Match summary failed for '{}': {e}", job.role);
            stage_errors.push(StageError {
                stage: Stage::MatchSummary,
                message: e.to_string(),
            });
            None
        }
    };

    let score = scorer.score(&request.resume_text, &job.description);
    info!("Scored '{}': {}/100", job.role, score.score);

    let suggestions = if request.include_suggestions {
        match suggest(llm, &request.resume_text, &job.description).await {
            Ok(suggestions) => suggestions,
            Err(e) => {
                warn!("Suggestions failed for '{}': {e}", job.role);
                stage_errors.push(StageError {
                    stage: Stage::Suggestions,
                    message: e.to_string(),
                });
                Vec::new()
            }
        }
    } else {
        Vec::new()
    };

    let summary_for_email = matched_summary.as_deref().unwrap_or_default();
    let email = match compose_email(llm, &job, &request.links, summary_for_email).await {
        Ok(email) => Some(email),
        Err(e) => {
            warn!("Email generation failed for '{}': {e}", job.role);
            stage_errors.push(StageError {
                stage: Stage::Email,
                message: e.to_string(),
            });
            None
        }
    };

    PostingReport {
        job,
        score,
        matched_summary,
        suggestions,
        email,
        stage_errors,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::stub::StubGenerator;
    use crate::llm_client::LlmError;
    use crate::scoring::{self, TfIdfScorer};

    const SCRAPED: &str = "Careers at Streamly. Senior Rust Engineer: build streaming services \
        in Rust with Kafka, 5+ years. Data Analyst: own sales dashboards in SQL and Tableau.";

    const TWO_JOBS: &str = r#"[
        {
            "role": "Senior Rust Engineer",
            "experience": "5+ years",
            "skills": ["Rust", "Kafka"],
            "description": "Build streaming services in Rust with Kafka."
        },
        {
            "role": "Data Analyst",
            "experience": "2 years",
            "skills": ["SQL", "Tableau"],
            "description": "Own sales dashboards in SQL and Tableau."
        }
    ]"#;

    const RESUME: &str = "Software engineer. Five years writing Rust streaming services \
        on Kafka and Tokio.";

    fn request(include_suggestions: bool) -> PipelineRequest {
        PipelineRequest {
            scraped_text: SCRAPED.to_string(),
            resume_text: RESUME.to_string(),
            links: vec!["https://github.com/me".to_string()],
            include_suggestions,
        }
    }

    fn ok(text: &str) -> Result<String, LlmError> {
        Ok(text.to_string())
    }

    fn upstream_down() -> Result<String, LlmError> {
        Err(LlmError::Api {
            status: 503,
            message: "down".to_string(),
        })
    }

    #[tokio::test]
    async fn test_extracted_postings_score_against_resume() {
        let llm = StubGenerator::always(TWO_JOBS);
        let jobs = extract_jobs(&llm, SCRAPED).await.unwrap();

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].role, "Senior Rust Engineer");
        assert_eq!(jobs[1].skills, vec!["SQL", "Tableau"]);

        let result = scoring::score(RESUME, &jobs[0].description);
        assert!((0.0..=100.0).contains(&result.score));
        assert!(result.score > 0.0);
        assert!(result.keywords.contains("kafka"));
    }

    #[tokio::test]
    async fn test_full_run_threads_summary_into_email() {
        let llm = StubGenerator::sequence(vec![
            ok(TWO_JOBS),
            // posting 1: summary, email
            ok("- Rust streaming at Acme"),
            ok("Email for the Rust role"),
            // posting 2: summary, email
            ok("- Little SQL experience"),
            ok("Email for the analyst role"),
        ]);

        let report = run_pipeline(&llm, &TfIdfScorer, &request(false)).await.unwrap();

        assert_eq!(report.postings.len(), 2);
        assert_eq!(report.scorer_backend, "tfidf");
        let first = &report.postings[0];
        assert_eq!(first.matched_summary.as_deref(), Some("- Rust streaming at Acme"));
        assert_eq!(first.email.as_deref(), Some("Email for the Rust role"));
        assert!(first.stage_errors.is_empty());
        assert!(first.suggestions.is_empty());
        assert!(first.score.score > report.postings[1].score.score);

        let prompts = llm.prompts();
        assert_eq!(prompts.len(), 5);
        assert!(prompts[2].contains("- Rust streaming at Acme"));
        assert!(prompts[2].contains("https://github.com/me"));
    }

    #[tokio::test]
    async fn test_summary_failure_does_not_stop_scoring_or_email() {
        let single = r#"{"role": "Senior Rust Engineer", "experience": "5+ years",
            "skills": ["Rust"], "description": "Build streaming services in Rust with Kafka."}"#;
        let llm = StubGenerator::sequence(vec![ok(single), upstream_down(), ok("Email anyway")]);

        let report = run_pipeline(&llm, &TfIdfScorer, &request(false)).await.unwrap();
        let posting = &report.postings[0];

        assert!(posting.matched_summary.is_none());
        assert_eq!(posting.email.as_deref(), Some("Email anyway"));
        assert!(posting.score.score > 0.0);
        assert_eq!(posting.stage_errors.len(), 1);
        assert_eq!(posting.stage_errors[0].stage, Stage::MatchSummary);
    }

    #[tokio::test]
    async fn test_suggestions_are_collected_when_requested() {
        let single = r#"{"role": "Senior Rust Engineer", "experience": "5+ years",
            "skills": ["Rust"], "description": "Build streaming services in Rust with Kafka."}"#;
        let suggestions = r#"[{"original_text": "Software engineer",
            "suggested_improvement": "Rust streaming engineer", "reason": "Matches title"}]"#;
        let llm = StubGenerator::sequence(vec![
            ok(single),
            ok("- summary"),
            ok(suggestions),
            ok("Email"),
        ]);

        let report = run_pipeline(&llm, &TfIdfScorer, &request(true)).await.unwrap();
        let posting = &report.postings[0];
        assert_eq!(posting.suggestions.len(), 1);
        assert_eq!(posting.suggestions[0].reason, "Matches title");
        assert_eq!(posting.email.as_deref(), Some("Email"));
    }

    #[tokio::test]
    async fn test_suggestion_failure_is_recorded_and_email_still_composed() {
        let single = r#"{"role": "Senior Rust Engineer", "experience": "5+ years",
            "skills": ["Rust"], "description": "Build streaming services in Rust with Kafka."}"#;
        let llm = StubGenerator::sequence(vec![
            ok(single),
            ok("- summary"),
            upstream_down(),
            ok("Email"),
        ]);

        let report = run_pipeline(&llm, &TfIdfScorer, &request(true)).await.unwrap();
        let posting = &report.postings[0];
        assert!(posting.suggestions.is_empty());
        assert_eq!(posting.matched_summary.as_deref(), Some("- summary"));
        assert_eq!(posting.email.as_deref(), Some("Email"));
        assert_eq!(posting.stage_errors.len(), 1);
        assert_eq!(posting.stage_errors[0].stage, Stage::Suggestions);
        assert!(posting.stage_errors[0].message.contains("503"));
        assert_eq!(llm.call_count(), 4);
    }

    #[tokio::test]
    async fn test_email_failure_is_recorded() {
        let single = r#"{"role": "r", "experience": "", "skills": [], "description": "Rust"}"#;
        let llm = StubGenerator::sequence(vec![ok(single), ok("- summary"), upstream_down()]);

        let report = run_pipeline(&llm, &TfIdfScorer, &request(false)).await.unwrap();
        let posting = &report.postings[0];
        assert!(posting.email.is_none());
        assert_eq!(posting.stage_errors[0].stage, Stage::Email);
    }

    #[tokio::test]
    async fn test_extraction_failure_aborts_run() {
        let llm = StubGenerator::always("I could not find any jobs on this page.");
        let err = run_pipeline(&llm, &TfIdfScorer, &request(true)).await.unwrap_err();
        assert!(matches!(err, ExtractionError::MalformedGeneration { .. }));
        assert_eq!(llm.call_count(), 1);
    }

    #[test]
    fn test_pipeline_request_defaults() {
        let json = serde_json::json!({
            "scraped_text": "page",
            "resume_text": "resume"
        });
        let request: PipelineRequest = serde_json::from_value(json).unwrap();
        assert!(request.links.is_empty());
        assert!(request.include_suggestions);
    }

    #[test]
    fn test_pipeline_request_missing_texts_read_as_blank() {
        let request: PipelineRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(request.scraped_text.is_empty());
        assert!(request.resume_text.is_empty());
    }
}
