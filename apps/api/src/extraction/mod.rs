// Structured extraction: job postings, resume suggestions, matched summary and cold email.
// All generator calls go through the `TextGenerator` trait — one round-trip per operation, no retries.

use thiserror::Error;

use crate::llm_client::LlmError;

pub mod handlers;
pub mod jobs;
pub mod models;
pub mod prompts;
pub mod suggestions;
pub mod writing;

pub use jobs::extract_jobs;
pub use models::{JobPosting, Suggestion};
pub use suggestions::suggest;
pub use writing::{compose_email, match_summary};

#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The generator answered, but not with job postings we can recover.
    /// Usually the page was too large for the model's context window.
    #[error("Context too big. Unable to parse jobs.")]
    MalformedGeneration { reason: String },

    #[error(transparent)]
    Generation(#[from] LlmError),
}
