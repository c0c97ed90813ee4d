//! Collaborator seams consumed by the pipeline

use async_trait::async_trait;

use crate::Result;

/// Opaque transliteration service: romanized Sinhala text in, Sinhala
/// script out.
///
/// The real model (NLLB) runs out of process; implementations here are
/// passthroughs, test doubles, or clients for that service. Callers hand
/// over already-normalized text, since normalization runs before this
/// seam, never behind it.
#[async_trait]
pub trait Transliterator: Send + Sync {
    /// Transliterate a complete string. No streaming; the whole input maps
    /// to the whole output.
    async fn transliterate(&self, text: &str) -> Result<String>;

    /// Backend name for logs.
    fn name(&self) -> &str;
}
