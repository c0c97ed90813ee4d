//! Text processing for the SinglishVoice pipeline
//!
//! Provides:
//! - the text normalization engine (abbreviations, currency, decimals,
//!   integer numerals -> spoken Sinhala words)
//! - Sinhala script detection
//! - the transliteration seam's in-process implementations

pub mod normalize;
pub mod script;
pub mod transliterate;

pub use normalize::{
    number_to_words, Normalizer, NormalizerConfig, NumeralLexicon, UnsupportedMagnitude, SINHALA,
};
pub use script::ScriptDetector;
pub use transliterate::{
    create_transliterator, NoopTransliterator, TransliterationConfig, TransliterationProvider,
};
