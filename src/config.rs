//! Synthesis configuration — scoring weights, selection policy, output labels.
//!
//! Every tunable used by the pipeline lives here. `SynthesisConfig::default()`
//! reproduces the stock scoring formula exactly; a JSON file only needs to
//! carry the fields it overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::{SynthesisError, SynthesisResult};

const CONFIG_FILE_NAME: &str = "config.json";

/// Repertoire de configuration cross-platform.
/// Linux: ~/.config/sintesis/
/// macOS: ~/Library/Application Support/sintesis/
/// Windows: %APPDATA%/sintesis/
pub fn config_dir() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
    });
    base.join("sintesis")
}

/// Default location of the config file: `{config_dir}/config.json`.
pub fn default_config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

// ============================================================================
// SCORING
// ============================================================================

/// Weights and thresholds of the composite sentence score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    pub term_frequency_weight: f64,   // default: 0.3
    pub first_sentence_bonus: f64,    // default: 0.4
    pub last_sentence_bonus: f64,     // default: 0.3
    pub optimal_length_bonus: f64,    // default: 0.2
    pub short_sentence_penalty: f64,  // default: 0.1 (subtracted)
    pub optimal_length_min: usize,    // default: 8
    pub optimal_length_max: usize,    // default: 25
    /// Sentences with strictly fewer content words are penalized.
    pub short_sentence_words: usize,  // default: 5
    pub phrase_bonus: f64,            // default: 0.15 per phrase
    pub indicator_bonus: f64,         // default: 0.1 per indicator
    pub numeric_bonus: f64,           // default: 0.1
    pub redundancy_penalty: f64,      // default: 0.2 (subtracted)
    /// Jaccard similarity with the previous sentence must exceed this.
    pub redundancy_threshold: f64,    // default: 0.7
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            term_frequency_weight: TERM_FREQUENCY_WEIGHT,
            first_sentence_bonus: FIRST_SENTENCE_BONUS,
            last_sentence_bonus: LAST_SENTENCE_BONUS,
            optimal_length_bonus: OPTIMAL_LENGTH_BONUS,
            short_sentence_penalty: SHORT_SENTENCE_PENALTY,
            optimal_length_min: OPTIMAL_LENGTH_MIN,
            optimal_length_max: OPTIMAL_LENGTH_MAX,
            short_sentence_words: SHORT_SENTENCE_WORDS,
            phrase_bonus: PHRASE_BONUS,
            indicator_bonus: INDICATOR_BONUS,
            numeric_bonus: NUMERIC_BONUS,
            redundancy_penalty: REDUNDANCY_PENALTY,
            redundancy_threshold: REDUNDANCY_THRESHOLD,
        }
    }
}

// ============================================================================
// SELECTION
// ============================================================================

/// How many sentences survive, and when summarization kicks in at all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SelectionConfig {
    /// Fraction of the sentences kept (rounded up).
    pub target_ratio: f64,              // default: 0.4
    pub min_sentences: usize,           // default: 2
    /// Inputs with this many sentences or fewer are returned verbatim.
    pub passthrough_max_sentences: usize, // default: 2
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            target_ratio: TARGET_RATIO,
            min_sentences: MIN_TARGET_SENTENCES,
            passthrough_max_sentences: PASSTHROUGH_MAX_SENTENCES,
        }
    }
}

// ============================================================================
// OUTPUT LABELS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LabelConfig {
    pub synthesis_prefix: String,
    pub passthrough_prefix: String,
    pub empty_input: String,
    pub no_sentences: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            synthesis_prefix: SYNTHESIS_LABEL.to_string(),
            passthrough_prefix: PASSTHROUGH_LABEL.to_string(),
            empty_input: EMPTY_INPUT_MESSAGE.to_string(),
            no_sentences: NO_SENTENCES_MESSAGE.to_string(),
        }
    }
}

// ============================================================================
// ROOT CONFIG
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Tokens shorter than this (in chars) are not content words.
    pub min_word_length: usize, // default: 4
    pub scoring: ScoringConfig,
    pub selection: SelectionConfig,
    pub labels: LabelConfig,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            min_word_length: MIN_CONTENT_WORD_CHARS,
            scoring: ScoringConfig::default(),
            selection: SelectionConfig::default(),
            labels: LabelConfig::default(),
        }
    }
}

impl SynthesisConfig {
    /// Load from the default location.
    /// Returns defaults if the file is missing or invalid.
    pub fn load() -> Self {
        let config_path = default_config_path();
        if !config_path.exists() {
            return Self::default();
        }
        match Self::load_from(&config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(
                    path = %config_path.display(),
                    error = %e,
                    "Invalid synthesis config, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Load and validate a config file. Missing fields take their defaults.
    pub fn load_from(path: &Path) -> SynthesisResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut cfg: Self = serde_json::from_str(&content)?;
        cfg.validate();
        tracing::debug!(path = %path.display(), "Synthesis config loaded");
        Ok(cfg)
    }

    /// Save as pretty JSON, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> SynthesisResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Build from an already-parsed JSON value (used by `config set`).
    pub fn from_value(value: serde_json::Value) -> SynthesisResult<Self> {
        let mut cfg: Self = serde_json::from_value(value)
            .map_err(|e| SynthesisError::Config(e.to_string()))?;
        cfg.validate();
        Ok(cfg)
    }

    /// Repair out-of-range values in place, logging each repair.
    pub fn validate(&mut self) {
        self.validate_selection();
        self.validate_scoring();
        self.validate_labels();

        if self.min_word_length == 0 {
            tracing::warn!(field = "min_word_length", "Must be > 0, resetting to default");
            self.min_word_length = MIN_CONTENT_WORD_CHARS;
        }
    }

    fn validate_selection(&mut self) {
        let sel = &mut self.selection;
        if !(sel.target_ratio > 0.0 && sel.target_ratio <= 1.0) {
            tracing::warn!(
                field = "selection.target_ratio",
                value = sel.target_ratio,
                "Must be in (0,1], resetting to default"
            );
            sel.target_ratio = TARGET_RATIO;
        }
        if sel.min_sentences == 0 {
            tracing::warn!(field = "selection.min_sentences", "Must be > 0, resetting to default");
            sel.min_sentences = MIN_TARGET_SENTENCES;
        }
    }

    fn validate_scoring(&mut self) {
        let sc = &mut self.scoring;
        clamp_01(&mut sc.redundancy_threshold, "scoring.redundancy_threshold");
        if sc.optimal_length_min > sc.optimal_length_max {
            tracing::warn!(
                min = sc.optimal_length_min,
                max = sc.optimal_length_max,
                "scoring.optimal_length_min > optimal_length_max, swapping"
            );
            std::mem::swap(&mut sc.optimal_length_min, &mut sc.optimal_length_max);
        }
    }

    fn validate_labels(&mut self) {
        let defaults = LabelConfig::default();
        let labels = &mut self.labels;
        for (name, value, default) in [
            ("labels.synthesis_prefix", &mut labels.synthesis_prefix, defaults.synthesis_prefix),
            ("labels.passthrough_prefix", &mut labels.passthrough_prefix, defaults.passthrough_prefix),
            ("labels.empty_input", &mut labels.empty_input, defaults.empty_input),
            ("labels.no_sentences", &mut labels.no_sentences, defaults.no_sentences),
        ] {
            if value.is_empty() {
                tracing::warn!(field = name, "Must not be empty, resetting to default");
                *value = default;
            }
        }
    }
}

fn clamp_01(val: &mut f64, name: &str) {
    if *val < 0.0 || *val > 1.0 {
        tracing::warn!(field = name, value = *val, "Config out of range [0,1], clamping");
        *val = val.clamp(0.0, 1.0);
    }
}
