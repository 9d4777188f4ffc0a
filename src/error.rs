use thiserror::Error;

use crate::constants::{EMPTY_INPUT_MESSAGE, NO_SENTENCES_MESSAGE};

#[derive(Error, Debug)]
pub enum SynthesisError {
    /// Nothing left after trimming the input.
    #[error("Empty input: nothing to summarize")]
    EmptyInput,

    /// Input had characters but no sentence survived splitting (e.g. "?!...").
    #[error("No sentences could be extracted from the input")]
    NoSentences,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure reported by an external collaborator (captioning, translation, speech).
    #[error("Collaborator error: {0}")]
    Collaborator(String),
}

impl SynthesisError {
    /// Fixed caller-visible text for the input conditions that are not hard failures.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::EmptyInput => Some(EMPTY_INPUT_MESSAGE),
            Self::NoSentences => Some(NO_SENTENCES_MESSAGE),
            _ => None,
        }
    }
}

pub type SynthesisResult<T> = Result<T, SynthesisError>;
