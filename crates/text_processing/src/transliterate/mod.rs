//! Transliteration seam (Singlish -> Sinhala script)
//!
//! The NLLB model that does the real transliteration is served out of
//! process; this module holds the seam's in-process implementations and
//! their wiring.

mod noop;

pub use noop::NoopTransliterator;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use singlish_voice_core::Transliterator;

/// Transliteration configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransliterationConfig {
    /// Which provider to use
    #[serde(default)]
    pub provider: TransliterationProvider,
}

/// Transliteration providers
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransliterationProvider {
    /// NLLB model (out-of-process service)
    Nllb,
    /// Disabled (pass-through)
    #[default]
    Disabled,
}

/// Create a transliterator based on config.
pub fn create_transliterator(config: &TransliterationConfig) -> Arc<dyn Transliterator> {
    match config.provider {
        TransliterationProvider::Nllb => {
            tracing::warn!("NLLB transliteration runs out of process, using pass-through");
            Arc::new(NoopTransliterator::new())
        }
        TransliterationProvider::Disabled => Arc::new(NoopTransliterator::new()),
    }
}
