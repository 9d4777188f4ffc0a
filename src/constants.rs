// === Lexical analysis ===
pub const MIN_CONTENT_WORD_CHARS: usize = 4;

// === Scoring weights ===
pub const TERM_FREQUENCY_WEIGHT: f64 = 0.3;
pub const FIRST_SENTENCE_BONUS: f64 = 0.4;
pub const LAST_SENTENCE_BONUS: f64 = 0.3;
pub const OPTIMAL_LENGTH_BONUS: f64 = 0.2;
pub const SHORT_SENTENCE_PENALTY: f64 = 0.1;
pub const PHRASE_BONUS: f64 = 0.15;
pub const INDICATOR_BONUS: f64 = 0.1;
pub const NUMERIC_BONUS: f64 = 0.1;
pub const REDUNDANCY_PENALTY: f64 = 0.2;

// === Scoring thresholds ===
pub const OPTIMAL_LENGTH_MIN: usize = 8;
pub const OPTIMAL_LENGTH_MAX: usize = 25;
pub const SHORT_SENTENCE_WORDS: usize = 5; // strictly fewer words → penalty
pub const REDUNDANCY_THRESHOLD: f64 = 0.7; // Jaccard, strictly greater → penalty

// === Selection ===
pub const TARGET_RATIO: f64 = 0.4;
pub const MIN_TARGET_SENTENCES: usize = 2;
pub const PASSTHROUGH_MAX_SENTENCES: usize = 2;

// === Output ===
pub const SYNTHESIS_LABEL: &str = "Síntesis del texto: ";
pub const PASSTHROUGH_LABEL: &str = "Síntesis: ";
pub const EMPTY_INPUT_MESSAGE: &str = "No hay texto para sintetizar.";
pub const NO_SENTENCES_MESSAGE: &str = "No se pudieron extraer oraciones del texto.";
pub const SENTENCE_JOINER: &str = ". ";

// === Request handling ===
pub const MISSING_TEXT_MESSAGE: &str = "No se proporcionó texto.";
pub const MISSING_WORD_MESSAGE: &str = "No se proporcionó palabra.";
pub const CAPTION_TARGET_LANGUAGE: &str = "es";
