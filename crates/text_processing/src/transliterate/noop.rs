//! Pass-through transliterator

use async_trait::async_trait;
use singlish_voice_core::{Result, Transliterator};

/// Pass-through transliterator for tests and disabled deployments.
///
/// Returns its input unchanged, so Sinhala-script input survives exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTransliterator;

impl NoopTransliterator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Transliterator for NoopTransliterator {
    async fn transliterate(&self, text: &str) -> Result<String> {
        Ok(text.to_string())
    }

    fn name(&self) -> &str {
        "noop"
    }
}
