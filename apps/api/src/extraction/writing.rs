//! Free-text generation: matched summary and cold email. Responses are returned verbatim.

use tracing::debug;

use crate::extraction::models::JobPosting;
use crate::extraction::prompts::{EMAIL_TEMPLATE, MATCH_SUMMARY_TEMPLATE};
use crate::llm_client::prompts::render;
use crate::llm_client::{LlmError, TextGenerator};

/// Bullet-point comparison of the resume against the job description.
pub async fn match_summary(
    llm: &dyn TextGenerator,
    job_description: &str,
    resume_content: &str,
) -> Result<String, LlmError> {
    let prompt = render(
        MATCH_SUMMARY_TEMPLATE,
        &[
            ("job_description", job_description),
            ("resume_content", resume_content),
        ],
    );
    let summary = llm.generate(&prompt).await?;
    debug!("Matched summary generated ({} chars)", summary.len());
    Ok(summary)
}

/// Cold outreach email for `job`, citing `matched_summary` and any portfolio `links`.
pub async fn compose_email(
    llm: &dyn TextGenerator,
    job: &JobPosting,
    links: &[String],
    matched_summary: &str,
) -> Result<String, LlmError> {
    let job_description = serde_json::to_string_pretty(job)?;
    let link_list = render_links(links);

    let prompt = render(
        EMAIL_TEMPLATE,
        &[
            ("job_description", job_description.as_str()),
            ("matched_resume", matched_summary),
            ("link_list", link_list.as_str()),
        ],
    );
    let email = llm.generate(&prompt).await?;
    debug!("Email generated for role '{}'", job.role);
    Ok(email)
}

fn render_links(links: &[String]) -> String {
    if links.is_empty() {
        return "(no links provided)".to_string();
    }
    links
        .iter()
        .map(|link| format!("- {link}"))
        .collect::<Vec<_>>()
        .join("\n")
}
