//! TF-IDF model fit over a small in-memory corpus.
//!
//! Tokens are lowercased runs of two or more word characters. Stop words are dropped.
//! Weights are raw term counts times smoothed idf `ln((1 + n) / (1 + df)) + 1`,
//! and every document vector is L2-normalized.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::scoring::stop_words::is_stop_word;

static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is a valid regex"));

/// Splits `text` into lowercased, stop-word-free terms, preserving order and repeats.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|t| !is_stop_word(t))
        .map(str::to_owned)
        .collect()
}

/// A fitted vocabulary with per-term idf weights. Terms are kept in sorted order,
/// so the column index of a term is its rank in the vocabulary.
#[derive(Debug, Clone)]
pub struct TfIdfModel {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfIdfModel {
    /// Fits the model over `documents`. Returns `None` when no term survives
    /// tokenization, which callers treat as a degenerate (zero) result.
    pub fn fit(documents: &[&str]) -> Option<Self> {
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for doc in documents {
            let mut seen: Vec<String> = tokenize(doc);
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return None;
        }

        let n = documents.len() as f64;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (index, (term, df)) in document_frequency.into_iter().enumerate() {
            idf.push(((1.0 + n) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(term, index);
        }

        Some(Self { vocabulary, idf })
    }

    /// Projects `text` onto the fitted vocabulary as an L2-normalized dense vector.
    /// Terms outside the vocabulary are ignored; a text with none yields the zero vector.
    pub fn transform(&self, text: &str) -> Vec<f64> {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in tokenize(text) {
            if let Some(&column) = self.vocabulary.get(&term) {
                *counts.entry(column).or_insert(0.0) += 1.0;
            }
        }

        let mut vector = vec![0.0; self.idf.len()];
        for (column, count) in counts {
            vector[column] = count * self.idf[column];
        }

        let norm = magnitude(&vector);
        if norm > 0.0 {
            vector.iter_mut().for_each(|w| *w /= norm);
        }
        vector
    }

    /// Every term the fit kept, in sorted order.
    pub fn feature_names(&self) -> impl Iterator<Item = &str> {
        self.vocabulary.keys().map(String::as_str)
    }
}

/// Dot product over magnitudes. Zero when either vector has no weight.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let denominator = magnitude(a) * magnitude(b);
    if denominator == 0.0 {
        return 0.0;
    }
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    (dot / denominator).clamp(0.0, 1.0)
}

fn magnitude(v: &[f64]) -> f64 {
    v.iter().map(|w| w * w).sum::<f64>().sqrt()
}
