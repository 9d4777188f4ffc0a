//! Request handling — JSON envelopes for the synthesis and dictionary operations.
//!
//! Transport (HTTP, stdio) belongs to the caller; this module only maps a
//! request body to a response body. Every path produces a JSON response.

use serde::{Deserialize, Serialize};

use crate::constants::{MISSING_TEXT_MESSAGE, MISSING_WORD_MESSAGE};
use crate::dictionary::{self, Entry};
use crate::synthesis::Synthesizer;
use crate::SynthesisError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SynthesizeRequest {
    /// Absent and `null` are both treated as missing.
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DictionaryRequest {
    #[serde(default)]
    pub word: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Synthesis { synthesis: String },
    Definition(Entry),
    Error { error: String },
}

impl Response {
    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error { error: msg.into() }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

/// Operation selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    Synthesize,
    Dictionary,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Synthesize => "synthesize",
            Self::Dictionary => "dictionary",
        }
    }
}

/// Missing or blank text is a request error, not an `EmptyInput` synthesis.
pub fn handle_synthesize(synth: &Synthesizer, req: &SynthesizeRequest) -> Response {
    match req.text.as_deref() {
        None | Some("") => Response::error(MISSING_TEXT_MESSAGE),
        Some(text) => Response::Synthesis {
            synthesis: synth.summarize(text),
        },
    }
}

pub fn handle_dictionary(req: &DictionaryRequest) -> Response {
    let Some(word) = req.word.as_deref() else {
        return Response::error(MISSING_WORD_MESSAGE);
    };
    match dictionary::lookup(word) {
        Ok(entry) => Response::Definition(entry),
        Err(SynthesisError::InvalidInput(_)) => Response::error(MISSING_WORD_MESSAGE),
        Err(e) => Response::error(e.to_string()),
    }
}

/// Parse `body`, dispatch, and return the response. Malformed JSON is an error envelope.
pub fn handle_json(synth: &Synthesizer, kind: RequestKind, body: &str) -> Response {
    tracing::info!(request = kind.as_str(), body_len = body.len(), "Request received");

    let response = match kind {
        RequestKind::Synthesize => serde_json::from_str::<SynthesizeRequest>(body)
            .map(|req| handle_synthesize(synth, &req)),
        RequestKind::Dictionary => {
            serde_json::from_str::<DictionaryRequest>(body).map(|req| handle_dictionary(&req))
        }
    };

    match response {
        Ok(r) => {
            if r.is_error() {
                tracing::debug!(request = kind.as_str(), "Request rejected");
            }
            r
        }
        Err(e) => {
            tracing::warn!(request = kind.as_str(), error = %e, "Malformed request body");
            Response::error(format!("Invalid request: {}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::WATER_TEXT;

    fn to_json(r: &Response) -> serde_json::Value {
        serde_json::to_value(r).unwrap()
    }

    #[test]
    fn test_synthesize_envelope() {
        let synth = Synthesizer::new();
        let body = serde_json::json!({ "text": WATER_TEXT }).to_string();
        let v = to_json(&handle_json(&synth, RequestKind::Synthesize, &body));
        let s = v["synthesis"].as_str().unwrap();
        assert!(s.starts_with("Síntesis del texto: "));
    }

    #[test]
    fn test_synthesize_missing_text() {
        let synth = Synthesizer::new();
        for body in [r#"{}"#, r#"{"text": ""}"#, r#"{"text": null}"#] {
            let v = to_json(&handle_json(&synth, RequestKind::Synthesize, body));
            assert_eq!(v["error"], "No se proporcionó texto.");
        }
    }

    #[test]
    fn test_synthesize_blank_text_gets_message() {
        let synth = Synthesizer::new();
        let v = to_json(&handle_json(&synth, RequestKind::Synthesize, r#"{"text": "   "}"#));
        assert_eq!(v["synthesis"], "No hay texto para sintetizar.");
    }

    #[test]
    fn test_dictionary_envelope() {
        let synth = Synthesizer::new();
        let v = to_json(&handle_json(&synth, RequestKind::Dictionary, r#"{"word": "Átomo"}"#));
        assert_eq!(v["word"], "átomo");
        assert_eq!(v["pronunciation"], "ÁTOMO");
        assert!(v.get("known").is_none());
    }

    #[test]
    fn test_dictionary_missing_word() {
        let synth = Synthesizer::new();
        for body in [r#"{"word": " "}"#, r#"{"word": null}"#, r#"{}"#] {
            let v = to_json(&handle_json(&synth, RequestKind::Dictionary, body));
            assert_eq!(v["error"], "No se proporcionó palabra.");
        }
    }

    #[test]
    fn test_malformed_body() {
        let synth = Synthesizer::new();
        let r = handle_json(&synth, RequestKind::Synthesize, "not json");
        assert!(r.is_error());
    }
}
