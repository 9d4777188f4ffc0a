//! Static grade-school dictionary — definitions and pronunciation hints.
//!
//! Independent of the synthesis pipeline.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::{SynthesisError, SynthesisResult};

/// (word, definition). Later duplicates override earlier ones.
const DEFINITIONS: &[(&str, &str)] = &[
    // Ciencias naturales
    ("célula", "La parte más pequeña de un ser vivo. Es como un pequeño ladrillo que forma el cuerpo."),
    ("átomo", "La parte más pequeña de cualquier cosa. Todo está hecho de átomos."),
    ("fotosíntesis", "El proceso donde las plantas usan la luz del sol para hacer su comida."),
    ("digestión", "El proceso donde el cuerpo convierte la comida en energía."),
    ("respiración", "El proceso de tomar aire para vivir."),
    ("ecosistema", "Un lugar donde viven plantas y animales juntos."),
    ("vertebrado", "Animal que tiene huesos en su espalda, como los humanos."),
    ("invertebrado", "Animal que no tiene huesos en su espalda, como los insectos."),
    // Matemáticas
    ("fracción", "Una parte de algo completo. Como media pizza o un cuarto de pastel."),
    ("decimal", "Un número que usa punto para mostrar partes, como 3.5"),
    ("perímetro", "La distancia alrededor de una figura."),
    ("área", "El espacio que ocupa una figura plana."),
    ("volumen", "El espacio que ocupa un objeto en tres dimensiones."),
    ("ángulo", "El espacio entre dos líneas que se encuentran."),
    ("paralelo", "Líneas que nunca se tocan, como las vías del tren."),
    ("perpendicular", "Líneas que se cruzan formando una esquina perfecta."),
    // Geografía
    ("continente", "Una gran porción de tierra en el planeta. Hay 7 continentes."),
    ("océano", "Una gran extensión de agua salada."),
    ("meridiano", "Línea imaginaria que va del polo norte al polo sur."),
    ("paralelo", "Línea imaginaria que rodea la Tierra de este a oeste."),
    ("ecuador", "La línea que divide la Tierra en dos partes iguales."),
    ("clima", "El tiempo que hace normalmente en un lugar durante el año."),
    ("relieve", "Las diferentes formas del terreno: montañas, llanuras, valles."),
    // Historia
    ("civilización", "Un grupo de personas que viven organizadas con leyes y costumbres."),
    ("cultura", "La forma de vivir de un grupo de personas: su comida, música, tradiciones."),
    ("independencia", "Cuando un país deja de ser gobernado por otro país."),
    ("revolución", "Un gran cambio en la forma de gobernar un país."),
    ("conquista", "Cuando un grupo toma control de otro lugar por la fuerza."),
    ("colonia", "Un territorio controlado por otro país lejano."),
    // Español / literatura
    ("sustantivo", "Palabra que nombra personas, animales, cosas o lugares."),
    ("adjetivo", "Palabra que describe cómo es algo o alguien."),
    ("verbo", "Palabra que indica una acción o lo que hace alguien."),
    ("sílaba", "Cada pedacito de sonido en que se divide una palabra."),
    ("sinónimo", "Palabras que significan lo mismo o algo parecido."),
    ("antónimo", "Palabras que significan lo contrario."),
    ("metáfora", "Comparar dos cosas sin usar 'como'. Ejemplo: Tus ojos son estrellas."),
    ("rima", "Cuando las palabras terminan con el mismo sonido."),
];

const PRONUNCIATIONS: &[(&str, &str)] = &[
    ("fotosíntesis", "fo-to-SÍN-te-sis"),
    ("ecosistema", "e-co-sis-TE-ma"),
    ("vertebrado", "ver-te-BRA-do"),
    ("invertebrado", "in-ver-te-BRA-do"),
    ("perpendicular", "per-pen-dic-cu-LAR"),
    ("civilización", "ci-vi-li-za-CIÓN"),
    ("independencia", "in-de-pen-DEN-cia"),
    ("revolución", "re-vo-lu-CIÓN"),
    ("conquista", "con-QUIS-ta"),
    ("metáfora", "me-TÁ-fo-ra"),
];

static DEFINITION_TABLE: LazyLock<FxHashMap<&'static str, &'static str>> =
    LazyLock::new(|| DEFINITIONS.iter().copied().collect());

static PRONUNCIATION_TABLE: LazyLock<FxHashMap<&'static str, &'static str>> =
    LazyLock::new(|| PRONUNCIATIONS.iter().copied().collect());

/// Lookup result, serialized as the dictionary response payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub word: String,
    pub definition: String,
    pub pronunciation: String,
    /// False when the definition is the generic suggestion.
    #[serde(skip)]
    pub known: bool,
}

/// Look up a word (trimmed, lowercased). Unknown words still get an entry.
pub fn lookup(word: &str) -> SynthesisResult<Entry> {
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return Err(SynthesisError::InvalidInput("empty word".to_string()));
    }

    let known = DEFINITION_TABLE.get(word.as_str()).copied();
    let definition = match known {
        Some(d) => d.to_string(),
        None => format!(
            "'{}' es una palabra interesante. Te recomiendo preguntarle a tu maestro o buscar en un diccionario para aprender más sobre ella.",
            word
        ),
    };
    let pronunciation = pronunciation_hint(&word);

    tracing::debug!(word = %word, known = known.is_some(), "Dictionary lookup");
    Ok(Entry {
        definition,
        pronunciation,
        known: known.is_some(),
        word,
    })
}

/// Syllable hint when known, else the word uppercased.
pub fn pronunciation_hint(word: &str) -> String {
    PRONUNCIATION_TABLE
        .get(word)
        .map(|p| p.to_string())
        .unwrap_or_else(|| word.to_uppercase())
}

/// Number of distinct defined words.
pub fn vocabulary_size() -> usize {
    DEFINITION_TABLE.len()
}
