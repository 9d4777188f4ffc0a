//! External collaborators — image captioning, translation, speech synthesis.
//!
//! Only the seams live here; concrete backends (vision model, translation
//! service, TTS engine) are supplied by the embedding application.

use crate::constants::CAPTION_TARGET_LANGUAGE;
use crate::SynthesisResult;

/// Produces an English description of an image.
pub trait Captioner: Send + Sync {
    fn caption(&self, image: &[u8]) -> SynthesisResult<String>;
}

/// Translates text into a target language (ISO 639-1 code).
pub trait Translator: Send + Sync {
    fn translate(&self, text: &str, target_lang: &str) -> SynthesisResult<String>;
}

/// Renders text to encoded audio. `rate` < 1.0 requests slower speech.
pub trait SpeechSynthesizer: Send + Sync {
    fn synthesize(&self, text: &str, rate: f32) -> SynthesisResult<Vec<u8>>;
}

/// Caption an image and translate the caption to Spanish.
///
/// A failed translation degrades to the untranslated caption; a failed
/// caption is an error.
pub fn describe_image(
    captioner: &dyn Captioner,
    translator: &dyn Translator,
    image: &[u8],
) -> SynthesisResult<String> {
    let caption = captioner.caption(image)?;
    tracing::debug!(caption_len = caption.len(), "Image captioned");

    match translator.translate(&caption, CAPTION_TARGET_LANGUAGE) {
        Ok(translated) => Ok(translated),
        Err(e) => {
            tracing::warn!(error = %e, "Caption translation failed, returning original");
            Ok(caption)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SynthesisError;

    struct FixedCaptioner(&'static str);

    impl Captioner for FixedCaptioner {
        fn caption(&self, image: &[u8]) -> SynthesisResult<String> {
            if image.is_empty() {
                return Err(SynthesisError::Collaborator("empty image".into()));
            }
            Ok(self.0.to_string())
        }
    }

    struct UpperTranslator;

    impl Translator for UpperTranslator {
        fn translate(&self, text: &str, target_lang: &str) -> SynthesisResult<String> {
            Ok(format!("[{}] {}", target_lang, text.to_uppercase()))
        }
    }

    struct DownTranslator;

    impl Translator for DownTranslator {
        fn translate(&self, _text: &str, _target_lang: &str) -> SynthesisResult<String> {
            Err(SynthesisError::Collaborator("service unavailable".into()))
        }
    }

    #[test]
    fn test_describe_translates_to_spanish() {
        let out = describe_image(&FixedCaptioner("a dog"), &UpperTranslator, b"png").unwrap();
        assert_eq!(out, "[es] A DOG");
    }

    #[test]
    fn test_translation_failure_falls_back_to_caption() {
        let out = describe_image(&FixedCaptioner("a cat"), &DownTranslator, b"png").unwrap();
        assert_eq!(out, "a cat");
    }

    #[test]
    fn test_caption_failure_propagates() {
        let err = describe_image(&FixedCaptioner("x"), &UpperTranslator, b"");
        assert!(matches!(err, Err(SynthesisError::Collaborator(_))));
    }
}
