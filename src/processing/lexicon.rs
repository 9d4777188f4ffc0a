//! Static Spanish lexicon — stop words, discourse markers, indicators, connectors.
//!
//! All tables are immutable and built once on first use.

use regex::Regex;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Closed list of Spanish function words excluded from content-word analysis.
const STOP_WORD_LIST: &[&str] = &[
    "el", "la", "de", "que", "y", "a", "en", "un", "es", "se", "no", "te", "lo", "le", "da",
    "su", "por", "son", "con", "para", "como", "las", "del", "los", "una", "al", "o", "pero",
    "sus", "ha", "me", "si", "sin", "sobre", "este", "ya", "entre", "cuando", "todo", "esta",
    "ser", "dos", "también", "fue", "había", "sido", "estar", "han", "hay", "donde", "porque",
    "todos", "durante", "ellos", "muy", "puede", "hasta", "desde", "está", "fueron", "van",
    "sea", "tengo", "tiene", "pueden", "más", "tras", "otro", "ante", "bajo", "según", "mismo",
    "tanto", "menos", "apenas", "casi", "mientras", "además", "hacia", "dentro", "contra",
    "aún", "así", "luego", "ahora", "antes", "después", "entonces", "aunque", "solo", "vez",
    "bien", "aquí", "allí", "cada", "cual", "quien", "qué", "cómo", "cuándo", "dónde",
];

pub static STOP_WORDS: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| STOP_WORD_LIST.iter().copied().collect());

/// Check if a lowercase token is a stop word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Semantic class of a discourse marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerClass {
    Importance,
    Exemplification,
    Conclusion,
    ProblemSolution,
    Goal,
    AdvantageRisk,
}

/// Discourse-marker alternations, in match order.
const MARKER_ALTERNATIONS: &[(MarkerClass, &str)] = &[
    (
        MarkerClass::Importance,
        "es importante|fundamental|clave|principal|esencial|básico|crítico",
    ),
    (
        MarkerClass::Exemplification,
        "por ejemplo|como|tal como|entre otros|principalmente",
    ),
    (
        MarkerClass::Conclusion,
        "resultado|conclusión|finalmente|en resumen|por tanto",
    ),
    (
        MarkerClass::ProblemSolution,
        "problema|solución|causa|efecto|consecuencia",
    ),
    (MarkerClass::Goal, "objetivo|meta|propósito|fin|intención"),
    (
        MarkerClass::AdvantageRisk,
        "ventaja|desventaja|beneficio|riesgo|peligro",
    ),
];

/// Compiled, case-insensitive, word-bounded marker patterns.
pub static MARKER_PATTERNS: LazyLock<Vec<(MarkerClass, Regex)>> = LazyLock::new(|| {
    MARKER_ALTERNATIONS
        .iter()
        .map(|(class, alternation)| {
            let pattern = format!(r"(?i)\b(?:{})\b", alternation);
            // Patterns are compile-time literals; a failure here is a programming error.
            let re = Regex::new(&pattern).expect("invalid discourse-marker pattern");
            (*class, re)
        })
        .collect()
});

/// Vocabulary whose presence (as substring) marks an important sentence.
pub const IMPORTANCE_INDICATORS: &[&str] = &[
    "importante",
    "fundamental",
    "clave",
    "principal",
    "esencial",
    "resultado",
    "conclusión",
    "por tanto",
    "en resumen",
    "objetivo",
    "propósito",
    "problema",
    "solución",
];

/// Openings that already read as a connective; such sentences are left untouched.
pub const NATURAL_CONNECTIVES: &[&str] = &[
    "además",
    "por otro lado",
    "asimismo",
    "también",
    "sin embargo",
    "no obstante",
    "por tanto",
    "en consecuencia",
    "finalmente",
];

/// Connectors prepended by composed position; the last entry is reused once exhausted.
pub const CONNECTORS: &[&str] = &[
    "Además, ",
    "Por otro lado, ",
    "Asimismo, ",
    "También, ",
    "En consecuencia, ",
    "Por tanto, ",
    "Finalmente, ",
];

/// Connector for the last sentence of the synthesis.
pub const FINAL_CONNECTOR: &str = "Finalmente, ";
