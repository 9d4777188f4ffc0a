//! Synthesis — the extractive summarization pipeline.
//!
//! split → term frequencies + salience phrases → score → select → compose.
//! Every call builds its own intermediate structures; a `Synthesizer` only
//! holds read-only configuration and can be shared freely.

use serde::{Deserialize, Serialize};

use crate::config::SynthesisConfig;
use crate::processing::composer::compose;
use crate::processing::frequency::TermFrequencyMap;
use crate::processing::phrases::SaliencePhraseSet;
use crate::processing::scorer::{ScoredSentence, SentenceScorer};
use crate::processing::selector::{select_indices, target_count};
use crate::processing::splitter::split_sentences;
use crate::SynthesisResult;

/// How the output was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryMode {
    /// Too few sentences to summarize; text returned verbatim.
    Passthrough,
    Extractive,
}

/// Structured result of one synthesis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    /// Final labelled output.
    pub text: String,
    pub mode: SummaryMode,
    pub sentence_count: usize,
    pub target_count: usize,
    /// Selected sentence indices, strictly increasing.
    pub selected: Vec<usize>,
    /// Empty in passthrough mode.
    pub scores: Vec<ScoredSentence>,
}

#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    config: SynthesisConfig,
}

impl Synthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Out-of-range values are repaired before use.
    pub fn with_config(mut config: SynthesisConfig) -> Self {
        config.validate();
        Self { config }
    }

    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Run the pipeline, surfacing `EmptyInput` / `NoSentences` as errors.
    pub fn try_summarize(&self, text: &str) -> SynthesisResult<Summary> {
        let cfg = &self.config;
        let text = text.trim();
        let sentences = split_sentences(text)?;
        let total = sentences.len();

        if total <= cfg.selection.passthrough_max_sentences {
            tracing::info!(sentence_count = total, mode = "passthrough", "Synthesis complete");
            return Ok(Summary {
                text: format!("{}{}", cfg.labels.passthrough_prefix, text),
                mode: SummaryMode::Passthrough,
                sentence_count: total,
                target_count: total,
                selected: (0..total).collect(),
                scores: Vec::new(),
            });
        }

        let frequencies = TermFrequencyMap::build(text, cfg.min_word_length);
        let phrases = SaliencePhraseSet::detect(text);
        let scores = SentenceScorer::new(&cfg.scoring, cfg.min_word_length, &frequencies, &phrases)
            .score_all(&sentences);

        let target = target_count(total, &cfg.selection);
        let selected = select_indices(&scores, target);
        let chosen: Vec<&str> = selected.iter().map(|&i| sentences[i].text.as_str()).collect();
        let body = compose(&chosen);

        tracing::info!(
            sentence_count = total,
            target_count = target,
            mode = "extractive",
            output_len = body.len(),
            "Synthesis complete"
        );

        Ok(Summary {
            text: format!("{}{}", cfg.labels.synthesis_prefix, body),
            mode: SummaryMode::Extractive,
            sentence_count: total,
            target_count: target,
            selected,
            scores,
        })
    }

    /// Always returns a non-empty string; input conditions become their fixed messages.
    pub fn summarize(&self, text: &str) -> String {
        match self.try_summarize(text) {
            Ok(summary) => summary.text,
            Err(crate::SynthesisError::EmptyInput) => self.config.labels.empty_input.clone(),
            Err(crate::SynthesisError::NoSentences) => self.config.labels.no_sentences.clone(),
            Err(e) => {
                // Only input conditions are produced by the pipeline itself.
                tracing::warn!(error = %e, "Unexpected synthesis failure");
                self.config.labels.no_sentences.clone()
            }
        }
    }
}

/// Summarize with the stock configuration.
pub fn summarize(text: &str) -> String {
    Synthesizer::new().summarize(text)
}
