//! Shared test fixtures — sample texts with known sentence counts.
//!
//! Available only under `#[cfg(test)]`.

/// Four sentences; "Por tanto … importante" carries phrase and indicator bonuses.
pub const WATER_TEXT: &str = "El agua es esencial para la vida. Los ríos llevan agua a los océanos. \
     Por tanto, cuidar el agua es importante. Finalmente, todos debemos actuar.";

/// Second sentence repeats the first one's content words.
pub const REDUNDANT_TEXT: &str = "Los estudiantes aprenden matemáticas avanzadas. \
     Los estudiantes aprenden matemáticas avanzadas hoy. \
     Después jugamos fútbol en el parque.";

pub const FIVE_SENTENCE_TEXT: &str = "La fotosíntesis ocurre en las hojas. \
     Las plantas necesitan luz solar. \
     El principal objetivo es producir glucosa. \
     Los animales dependen de las plantas. \
     En resumen, la fotosíntesis sostiene la vida.";

/// Ten sentences, each starting with an uppercase letter.
pub const LONG_TEXT: &str = "La revolución industrial comenzó en Inglaterra durante el siglo dieciocho. \
     Las fábricas transformaron la producción textil de manera profunda. \
     Muchas familias campesinas migraron hacia las ciudades buscando trabajo. \
     El carbón fue la fuente principal de energía para las máquinas de vapor. \
     Por ejemplo, los ferrocarriles conectaron regiones antes aisladas. \
     La contaminación del aire se convirtió en un problema grave. \
     Los trabajadores organizaron sindicatos para defender sus derechos. \
     En 1833 se aprobaron leyes que limitaban el trabajo infantil. \
     El resultado fue una sociedad urbana con nuevas clases sociales. \
     En resumen, la industrialización cambió para siempre la economía mundial.";
