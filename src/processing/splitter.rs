//! Sentence splitting on terminal punctuation.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::{SynthesisError, SynthesisResult};

/// One or more of `.`, `!`, `?` form a single boundary.
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("invalid sentence boundary pattern"));

/// A trimmed, non-empty sentence and its position in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub index: usize,
    pub text: String,
}

/// Split raw text into trimmed, non-empty sentences.
///
/// Blank input is `EmptyInput`; text made only of punctuation is `NoSentences`.
pub fn split_sentences(text: &str) -> SynthesisResult<Vec<Sentence>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SynthesisError::EmptyInput);
    }

    let sentences: Vec<Sentence> = SENTENCE_BOUNDARY
        .split(trimmed)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(index, s)| Sentence {
            index,
            text: s.to_string(),
        })
        .collect();

    if sentences.is_empty() {
        return Err(SynthesisError::NoSentences);
    }

    tracing::debug!(sentence_count = sentences.len(), "Text split into sentences");
    Ok(sentences)
}
