//! Lexical analysis — tokenization and normalized term frequencies.

use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::LazyLock;

use super::lexicon::is_stop_word;

/// Alphabetic runs of the Spanish alphabet, applied to lowercased text.
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-záéíóúüñ]+\b").expect("invalid word pattern"));

/// Lowercase alphabetic tokens of `text`, in order.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD.find_iter(&lower).map(|m| m.as_str().to_string()).collect()
}

/// Whether a lowercase token counts as a content word.
pub fn is_content_word(word: &str, min_len: usize) -> bool {
    word.chars().count() >= min_len && !is_stop_word(word)
}

/// Content-word tokens of `text`, in order, duplicates kept.
pub fn content_words(text: &str, min_len: usize) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|w| is_content_word(w, min_len))
        .collect()
}

/// Distinct content words of `text`.
pub fn content_word_set(text: &str, min_len: usize) -> FxHashSet<String> {
    content_words(text, min_len).into_iter().collect()
}

/// Content word → frequency normalized by the most frequent content word.
#[derive(Debug, Clone, Default)]
pub struct TermFrequencyMap {
    weights: FxHashMap<String, f64>,
}

impl TermFrequencyMap {
    /// Count content words across `text` and normalize into [0,1].
    pub fn build(text: &str, min_len: usize) -> Self {
        let mut counts: FxHashMap<String, u32> = FxHashMap::default();
        for word in content_words(text, min_len) {
            *counts.entry(word).or_insert(0) += 1;
        }

        let Some(max) = counts.values().copied().max() else {
            tracing::debug!("No content words, term frequencies empty");
            return Self::default();
        };

        let weights = counts
            .into_iter()
            .map(|(word, count)| (word, f64::from(count) / f64::from(max)))
            .collect::<FxHashMap<_, _>>();

        tracing::debug!(vocabulary = weights.len(), max_count = max, "Term frequencies computed");
        Self { weights }
    }

    /// Weight of `word`, 0.0 when absent.
    pub fn weight(&self, word: &str) -> f64 {
        self.weights.get(word).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(w, f)| (w.as_str(), *f))
    }
}
