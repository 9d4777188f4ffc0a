//! Sintesis — heuristic extractive text synthesis for Spanish.
//!
//! Single-crate library: sentence splitting, lexical analysis, discourse
//! marker detection, sentence scoring and connector-aware composition, plus
//! the static dictionary and collaborator seams of the reading assistant.

pub mod config;
pub mod constants;
pub mod error;
pub mod tracing_init;

// Pipeline
pub mod processing;
pub mod synthesis;

// Surrounding services
pub mod dictionary;
pub mod handler;
pub mod provider;

#[cfg(test)]
pub(crate) mod test_helpers;

// Re-exports for convenience
pub use error::{SynthesisError, SynthesisResult};
pub use synthesis::{summarize, Summary, SummaryMode, Synthesizer};
