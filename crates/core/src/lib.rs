//! Core traits and types for the SinglishVoice pipeline
//!
//! Provides the pieces every other crate builds on:
//! - `ServiceError` / `Result` for the collaborator seams
//! - `Transliterator`, the opaque romanized-text -> Sinhala-script seam

pub mod error;
pub mod traits;

pub use error::{Result, ServiceError};
pub use traits::Transliterator;
