//! Sentence scoring — composite salience from frequency, position, length,
//! discourse markers, indicators, numbers and redundancy.

use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::frequency::{content_words, TermFrequencyMap};
use super::lexicon::IMPORTANCE_INDICATORS;
use super::phrases::SaliencePhraseSet;
use super::similarity::jaccard;
use super::splitter::Sentence;
use crate::config::ScoringConfig;

/// Any Unicode decimal digit.
static DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").expect("valid digit pattern"));

/// Individual score terms; signed, so penalties are negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub term_frequency: f64,
    pub position: f64,
    pub length: f64,
    pub phrases: f64,
    pub indicators: f64,
    pub numeric: f64,
    pub redundancy: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.term_frequency
            + self.position
            + self.length
            + self.phrases
            + self.indicators
            + self.numeric
            + self.redundancy
    }
}

/// Score of the sentence at `index`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredSentence {
    pub index: usize,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Scores every sentence of a request against shared lexical context.
pub struct SentenceScorer<'a> {
    config: &'a ScoringConfig,
    min_word_length: usize,
    frequencies: &'a TermFrequencyMap,
    phrases: &'a SaliencePhraseSet,
}

impl<'a> SentenceScorer<'a> {
    pub fn new(
        config: &'a ScoringConfig,
        min_word_length: usize,
        frequencies: &'a TermFrequencyMap,
        phrases: &'a SaliencePhraseSet,
    ) -> Self {
        Self {
            config,
            min_word_length,
            frequencies,
            phrases,
        }
    }

    /// One `ScoredSentence` per input sentence, in input order.
    pub fn score_all(&self, sentences: &[Sentence]) -> Vec<ScoredSentence> {
        let total = sentences.len();
        let mut previous: Option<FxHashSet<String>> = None;

        sentences
            .iter()
            .enumerate()
            .map(|(i, sentence)| {
                let words = content_words(&sentence.text, self.min_word_length);
                let word_set: FxHashSet<String> = words.iter().cloned().collect();

                let mut breakdown = self.base_terms(i, total, &sentence.text, &words);
                if let Some(prev) = &previous {
                    breakdown.redundancy = self.redundancy(&word_set, prev);
                }
                previous = Some(word_set);

                let score = breakdown.total();
                tracing::trace!(index = i, score, "Sentence scored");
                ScoredSentence {
                    index: i,
                    score,
                    breakdown,
                }
            })
            .collect()
    }

    /// Every term except redundancy, which needs the previous sentence.
    fn base_terms(&self, i: usize, total: usize, text: &str, words: &[String]) -> ScoreBreakdown {
        let cfg = self.config;
        let lowered = text.to_lowercase();

        let tf_sum: f64 = words.iter().map(|w| self.frequencies.weight(w)).sum();

        // First wins over last, so a lone sentence gets only the first bonus.
        let position = if i == 0 {
            cfg.first_sentence_bonus
        } else if i + 1 == total {
            cfg.last_sentence_bonus
        } else {
            0.0
        };

        let length = if (cfg.optimal_length_min..=cfg.optimal_length_max).contains(&words.len()) {
            cfg.optimal_length_bonus
        } else if words.len() < cfg.short_sentence_words {
            -cfg.short_sentence_penalty
        } else {
            0.0
        };

        let indicator_hits = IMPORTANCE_INDICATORS
            .iter()
            .filter(|ind| lowered.contains(**ind))
            .count();

        let numeric = if DIGIT.is_match(text) {
            cfg.numeric_bonus
        } else {
            0.0
        };

        ScoreBreakdown {
            term_frequency: tf_sum * cfg.term_frequency_weight,
            position,
            length,
            phrases: self.phrases.count_in(&lowered) as f64 * cfg.phrase_bonus,
            indicators: indicator_hits as f64 * cfg.indicator_bonus,
            numeric,
            redundancy: 0.0,
        }
    }

    fn redundancy(&self, current: &FxHashSet<String>, previous: &FxHashSet<String>) -> f64 {
        let similarity = jaccard(current, previous);
        if similarity > self.config.redundancy_threshold {
            tracing::debug!(similarity, "Redundant with previous sentence");
            -self.config.redundancy_penalty
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::splitter::split_sentences;
    use crate::test_helpers::*;

    const EPS: f64 = 1e-9;

    fn score_text(text: &str) -> Vec<ScoredSentence> {
        let cfg = ScoringConfig::default();
        let sentences = split_sentences(text).unwrap();
        let tf = TermFrequencyMap::build(text, 4);
        let phrases = SaliencePhraseSet::detect(text);
        SentenceScorer::new(&cfg, 4, &tf, &phrases).score_all(&sentences)
    }

    #[test]
    fn test_one_score_per_sentence_with_valid_indices() {
        let scores = score_text(LONG_TEXT);
        let n = split_sentences(LONG_TEXT).unwrap().len();
        assert_eq!(scores.len(), n);
        for (i, s) in scores.iter().enumerate() {
            assert_eq!(s.index, i);
            assert!((s.score - s.breakdown.total()).abs() < EPS);
        }
    }

    #[test]
    fn test_water_example_breakdown() {
        let scores = score_text(WATER_TEXT);
        // agua=1.0, every other content word 1/3

        // "El agua es esencial para la vida": agua, esencial, vida
        let s0 = scores[0].breakdown;
        assert!((s0.term_frequency - 0.5).abs() < EPS);
        assert!((s0.position - 0.4).abs() < EPS);
        assert!((s0.length + 0.1).abs() < EPS);
        assert!((s0.phrases - 0.15).abs() < EPS); // "esencial"
        assert!((s0.indicators - 0.1).abs() < EPS); // "esencial"
        assert!((scores[0].score - 1.05).abs() < EPS);

        // "Por tanto, cuidar el agua es importante"
        let s2 = scores[2].breakdown;
        assert_eq!(s2.position, 0.0);
        assert!((s2.phrases - 0.3).abs() < EPS); // "por tanto", "es importante"
        assert!((s2.indicators - 0.2).abs() < EPS); // "importante", "por tanto"
        assert!((scores[2].score - 0.9).abs() < EPS);

        // "Finalmente, todos debemos actuar"
        assert!((scores[3].breakdown.position - 0.3).abs() < EPS);
    }

    #[test]
    fn test_single_sentence_gets_first_bonus_only() {
        let scores = score_text("Una sola oración aislada");
        assert_eq!(scores.len(), 1);
        assert!((scores[0].breakdown.position - 0.4).abs() < EPS);
    }

    #[test]
    fn test_length_bonus_window() {
        // 8 content words once the stop word "bajo" is dropped
        let long = "Científicos europeos descubrieron nuevas especies marinas bajo glaciares antárticos";
        let text = format!("Inicio breve aquí. {}. Cierre breve aquí.", long);
        let scores = score_text(&text);
        assert!((scores[1].breakdown.length - 0.2).abs() < EPS);
        assert!((scores[0].breakdown.length + 0.1).abs() < EPS);
    }

    #[test]
    fn test_numeric_bonus() {
        let scores = score_text("Primero vino. Llegaron 300 personas. Luego todo terminó.");
        assert!((scores[1].breakdown.numeric - 0.1).abs() < EPS);
        assert_eq!(scores[0].breakdown.numeric, 0.0);
    }

    #[test]
    fn test_numeric_bonus_accepts_non_ascii_digits() {
        // Arabic-Indic three, fullwidth seven
        let scores = score_text("Primero vino. Llegaron \u{663} grupos. Luego \u{FF17} más.");
        assert!((scores[1].breakdown.numeric - 0.1).abs() < EPS);
        assert!((scores[2].breakdown.numeric - 0.1).abs() < EPS);
        assert_eq!(scores[0].breakdown.numeric, 0.0);
    }

    fn neutral_terms(word_count: usize) -> ScoreBreakdown {
        let cfg = ScoringConfig::default();
        let tf = TermFrequencyMap::default();
        let phrases = SaliencePhraseSet::default();
        let words: Vec<String> = (0..word_count).map(|i| format!("palabra{}", i)).collect();
        SentenceScorer::new(&cfg, 4, &tf, &phrases).base_terms(1, 3, "texto neutro", &words)
    }

    #[test]
    fn test_length_term_at_window_edges() {
        let expected = [
            (4, -0.1),
            (5, 0.0),
            (7, 0.0),
            (8, 0.2),
            (25, 0.2),
            (26, 0.0),
        ];
        for (n, length) in expected {
            let b = neutral_terms(n);
            assert!((b.length - length).abs() < EPS, "n={} got {}", n, b.length);
            assert_eq!(b.position, 0.0);
        }
    }

    fn word_set(words: &[&str]) -> FxHashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_redundancy_threshold_is_strict() {
        let cfg = ScoringConfig::default();
        let tf = TermFrequencyMap::default();
        let phrases = SaliencePhraseSet::default();
        let scorer = SentenceScorer::new(&cfg, 4, &tf, &phrases);

        let shared = ["agua", "vida", "río", "lago", "nube", "mar", "lluvia"];
        let mut current: Vec<&str> = shared.to_vec();
        current.push("hielo");
        let mut previous: Vec<&str> = shared.to_vec();
        previous.extend(["vapor", "ola"]);

        // 7 shared out of a union of 10: exactly 0.7, no penalty
        let at_threshold = scorer.redundancy(&word_set(&current), &word_set(&previous));
        assert_eq!(at_threshold, 0.0);

        // 8 shared out of a union of 10: above threshold
        current.push("vapor");
        let above = scorer.redundancy(&word_set(&current), &word_set(&previous));
        assert!((above + 0.2).abs() < EPS);
    }

    #[test]
    fn test_redundancy_penalty_isolated() {
        let scores = score_text(REDUNDANT_TEXT);
        let second = scores[1];
        assert!((second.breakdown.redundancy + 0.2).abs() < EPS);

        let without_penalty = ScoreBreakdown {
            redundancy: 0.0,
            ..second.breakdown
        }
        .total();
        assert!(second.score < without_penalty);
        assert!((without_penalty - second.score - 0.2).abs() < EPS);

        // Not applied to the first sentence, nor to an unrelated one
        assert_eq!(scores[0].breakdown.redundancy, 0.0);
        assert_eq!(scores[2].breakdown.redundancy, 0.0);
    }

    #[test]
    fn test_scores_can_be_negative() {
        let scores = score_text("Uno. Dos. Tres. Cuatro.");
        assert!(scores[1].score < 0.0);
    }
}
