//! Deterministic stand-in for the text generator, used by unit and router tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{LlmError, TextGenerator};

/// Replays queued replies in order, then falls back to a fixed reply (if any).
/// Records every prompt it receives so tests can assert on call counts.
#[derive(Default)]
pub struct StubGenerator {
    queued: Mutex<VecDeque<Result<String, LlmError>>>,
    fallback: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    /// Answers every call with the same text.
    pub fn always(reply: &str) -> Self {
        Self {
            fallback: Some(reply.to_string()),
            ..Self::default()
        }
    }

    /// Answers calls with `replies` in order; further calls fail with `EmptyContent`.
    pub fn sequence(replies: Vec<Result<String, LlmError>>) -> Self {
        Self {
            queued: Mutex::new(replies.into()),
            ..Self::default()
        }
    }

    /// Fails every call with an upstream API error.
    pub fn failing(status: u16) -> Self {
        Self::sequence(
            (0..16)
                .map(|_| {
                    Err(LlmError::Api {
                        status,
                        message: "upstream unavailable".to_string(),
                    })
                })
                .collect(),
        )
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if let Some(reply) = self.queued.lock().unwrap().pop_front() {
            return reply;
        }
        self.fallback.clone().ok_or(LlmError::EmptyContent)
    }
}
