//! Shared error type for the collaborator services

use thiserror::Error;

/// Errors surfaced by the external model services the pipeline talks to.
///
/// The normalization engine itself is total and never produces one of
/// these; they exist for the transliteration and synthesis seams.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The transliteration backend failed to produce target-script text.
    #[error("transliteration failed: {0}")]
    Transliteration(String),

    /// The speech synthesis backend failed to produce audio.
    #[error("synthesis failed: {0}")]
    Synthesis(String),
}

/// Result alias used by the collaborator traits.
pub type Result<T> = std::result::Result<T, ServiceError>;
