//! Job extraction — turns scraped careers-page text into `JobPosting`s.
//!
//! Failure is loud here: everything downstream depends on the postings.

use serde_json::Value;
use tracing::{info, warn};

use crate::extraction::models::JobPosting;
use crate::extraction::prompts::EXTRACT_JOBS_TEMPLATE;
use crate::extraction::ExtractionError;
use crate::llm_client::prompts::{render, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{parse_json_output, LlmError, TextGenerator};

/// Extracts job postings from `scraped_text` with a single generator call.
///
/// A single JSON object is accepted as a one-posting page, and `{"jobs": [...]}` is unwrapped.
/// An empty or unparseable response, an empty array, or items missing `role`/`description`
/// fail with `MalformedGeneration`.
pub async fn extract_jobs(
    llm: &dyn TextGenerator,
    scraped_text: &str,
) -> Result<Vec<JobPosting>, ExtractionError> {
    let prompt = render(
        EXTRACT_JOBS_TEMPLATE,
        &[("page_data", scraped_text), ("json_only", JSON_ONLY_INSTRUCTION)],
    );

    let raw = match llm.generate(&prompt).await {
        Ok(raw) => raw,
        Err(LlmError::EmptyContent) => String::new(),
        Err(e) => return Err(e.into()),
    };
    let jobs = parse_jobs(&raw).map_err(|reason| {
        warn!(
            "Job extraction output unusable ({} chars of input): {reason}",
            scraped_text.len()
        );
        ExtractionError::MalformedGeneration { reason }
    })?;

    info!("Extracted {} job postings", jobs.len());
    Ok(jobs)
}

fn parse_jobs(raw: &str) -> Result<Vec<JobPosting>, String> {
    let value = parse_json_output(raw).map_err(|e| format!("invalid JSON: {e}"))?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("jobs") {
            Some(Value::Array(items)) => items,
            Some(other) => return Err(format!("`jobs` is not an array: {other}")),
            None => vec![Value::Object(map)],
        },
        other => return Err(format!("expected an array or object, got {other}")),
    };

    if items.is_empty() {
        return Err("no job postings in response".to_string());
    }

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value::<JobPosting>(item)
                .map_err(|e| format!("posting {i} has the wrong shape: {e}"))
        })
        .collect()
}
