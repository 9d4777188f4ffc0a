//! Composition — stitch selected sentences into one paragraph with connectors.

use super::lexicon::{CONNECTORS, FINAL_CONNECTOR, NATURAL_CONNECTIVES};
use crate::constants::SENTENCE_JOINER;

/// Join sentences (already in document order) into a single paragraph.
///
/// The first sentence is kept as is. Each later sentence that neither starts
/// with an uppercase letter nor with a natural connective gets a connector
/// chosen by its position, and its first letter lowercased. The result always
/// ends with a sentence terminator.
pub fn compose<S: AsRef<str>>(sentences: &[S]) -> String {
    let Some((first, rest)) = sentences.split_first() else {
        return String::new();
    };

    let mut parts: Vec<String> = Vec::with_capacity(sentences.len());
    parts.push(first.as_ref().to_string());

    for (k, sentence) in rest.iter().enumerate() {
        let sentence = sentence.as_ref();
        let is_last = k + 1 == rest.len();

        if starts_uppercase(sentence) || starts_with_connective(sentence) {
            parts.push(sentence.to_string());
            continue;
        }

        let connector = if is_last {
            FINAL_CONNECTOR
        } else {
            connector_for(k)
        };
        parts.push(format!("{}{}", connector, lowercase_first(sentence)));
    }

    let mut composed = parts.join(SENTENCE_JOINER);
    if !composed.ends_with(['.', '!', '?']) {
        composed.push('.');
    }
    composed
}

/// Connector for the k-th sentence after the first; clamps to the last entry.
pub fn connector_for(k: usize) -> &'static str {
    CONNECTORS[k.min(CONNECTORS.len() - 1)]
}

fn starts_uppercase(sentence: &str) -> bool {
    sentence.chars().next().is_some_and(char::is_uppercase)
}

fn starts_with_connective(sentence: &str) -> bool {
    let lowered = sentence.to_lowercase();
    NATURAL_CONNECTIVES.iter().any(|c| lowered.starts_with(c))
}

fn lowercase_first(sentence: &str) -> String {
    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
