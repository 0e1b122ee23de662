//! Similarity Scoring — pluggable, trait-based scorer that measures a resume against a job description.
//!
//! Default: `TfIdfScorer` (pure-Rust, deterministic, no generator call). Cheap enough to run
//! on every keystroke of an interactive editor.
//!
//! `AppState` holds an `Arc<dyn ResumeScorer>`, chosen at startup.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub mod handlers;
pub mod stop_words;
pub mod tfidf;

use tfidf::{cosine_similarity, TfIdfModel};

/// Relevance of a resume to a job description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// 0.0 – 100.0, rounded to 2 decimals.
    pub score: f64,
    /// Every distinct term that survived the joint fit.
    pub keywords: BTreeSet<String>,
}

impl ScoreResult {
    pub fn zero() -> Self {
        Self::default()
    }
}

/// The scorer trait. Implement this to swap backends without touching handlers or the pipeline.
pub trait ResumeScorer: Send + Sync {
    fn score(&self, resume_text: &str, job_description: &str) -> ScoreResult;

    /// Backend label reported to API callers.
    fn backend(&self) -> &'static str;
}

/// TF-IDF cosine scorer. Fits a fresh model per call over the two-document corpus
/// `[resume, job description]`, so the result is symmetric under swapping the inputs.
pub struct TfIdfScorer;

impl ResumeScorer for TfIdfScorer {
    fn score(&self, resume_text: &str, job_description: &str) -> ScoreResult {
        score(resume_text, job_description)
    }

    fn backend(&self) -> &'static str {
        "tfidf"
    }
}

/// Scores `resume_text` against `job_description`.
///
/// Blank input and an empty fitted vocabulary both resolve to `ScoreResult::zero()`.
pub fn score(resume_text: &str, job_description: &str) -> ScoreResult {
    if resume_text.trim().is_empty() || job_description.trim().is_empty() {
        return ScoreResult::zero();
    }

    let Some(model) = TfIdfModel::fit(&[resume_text, job_description]) else {
        return ScoreResult::zero();
    };

    let resume_vector = model.transform(resume_text);
    let job_vector = model.transform(job_description);
    let similarity = cosine_similarity(&resume_vector, &job_vector);

    ScoreResult {
        score: round_to_hundredths(similarity * 100.0).clamp(0.0, 100.0),
        keywords: model.feature_names().map(str::to_owned).collect(),
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
