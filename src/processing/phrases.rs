//! Salience phrase detection — discourse markers present anywhere in the text.

use rustc_hash::FxHashSet;

use super::lexicon::MARKER_PATTERNS;

/// Lowercased discourse markers found in a text. Presence only, no positions.
#[derive(Debug, Clone, Default)]
pub struct SaliencePhraseSet {
    phrases: FxHashSet<String>,
}

impl SaliencePhraseSet {
    /// Scan `text` with every marker pattern.
    pub fn detect(text: &str) -> Self {
        let mut phrases = FxHashSet::default();
        for (class, pattern) in MARKER_PATTERNS.iter() {
            for m in pattern.find_iter(text) {
                let phrase = m.as_str().to_lowercase();
                tracing::trace!(?class, phrase = %phrase, "Discourse marker matched");
                phrases.insert(phrase);
            }
        }
        tracing::debug!(phrase_count = phrases.len(), "Salience phrases detected");
        Self { phrases }
    }

    /// Number of distinct phrases that occur as substrings of `lowered`.
    pub fn count_in(&self, lowered: &str) -> usize {
        self.phrases.iter().filter(|p| lowered.contains(p.as_str())).count()
    }

    #[cfg(test)]
    pub fn contains(&self, phrase: &str) -> bool {
        self.phrases.contains(phrase)
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Phrases in sorted order, for stable display.
    pub fn sorted(&self) -> Vec<&str> {
        let mut v: Vec<&str> = self.phrases.iter().map(String::as_str).collect();
        v.sort_unstable();
        v
    }
}
