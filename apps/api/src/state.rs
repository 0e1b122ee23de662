use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::scoring::ResumeScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The text generator. `LlmClient` in production, a stub in tests.
    pub llm: Arc<dyn TextGenerator>,
    /// Pluggable resume scorer. Default: TfIdfScorer.
    pub scorer: Arc<dyn ResumeScorer>,
}
