//! Resume suggestions — advisory, best-effort.
//!
//! Output that cannot be read as suggestions becomes an empty list rather than an error,
//! so live editors never surface a failure for one bad generation. Items with the wrong
//! shape are dropped one at a time. Transport failures from the generator still propagate.

use serde_json::Value;
use tracing::{debug, warn};

use crate::extraction::models::Suggestion;
use crate::extraction::prompts::SUGGESTIONS_TEMPLATE;
use crate::llm_client::prompts::{render, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{parse_json_output, LlmError, TextGenerator};

/// Proposes resume edits that better match `job_description`.
/// Blank input returns an empty list without calling the generator.
pub async fn suggest(
    llm: &dyn TextGenerator,
    resume_content: &str,
    job_description: &str,
) -> Result<Vec<Suggestion>, LlmError> {
    if resume_content.trim().is_empty() || job_description.trim().is_empty() {
        debug!("Skipping suggestions: blank resume or job description");
        return Ok(Vec::new());
    }

    let prompt = render(
        SUGGESTIONS_TEMPLATE,
        &[
            ("resume_content", resume_content),
            ("job_description", job_description),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    );

    let raw = match llm.generate(&prompt).await {
        Ok(raw) => raw,
        Err(LlmError::EmptyContent) => String::new(),
        Err(e) => return Err(e),
    };
    match parse_suggestions(&raw) {
        Ok(suggestions) => Ok(suggestions),
        Err(reason) => {
            warn!("Discarding unparseable suggestions: {reason}");
            Ok(Vec::new())
        }
    }
}

fn parse_suggestions(raw: &str) -> Result<Vec<Suggestion>, String> {
    let value = parse_json_output(raw).map_err(|e| format!("invalid JSON: {e}"))?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("suggestions") {
            Some(Value::Array(items)) => items,
            Some(other) => return Err(format!("`suggestions` is not an array: {other}")),
            None => vec![Value::Object(map)],
        },
        other => return Err(format!("expected an array or object, got {other}")),
    };

    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| match serde_json::from_value::<Suggestion>(item) {
            Ok(suggestion) => Some(suggestion),
            Err(e) => {
                warn!("Dropping suggestion {i} with the wrong shape: {e}");
                None
            }
        })
        .collect())
}
