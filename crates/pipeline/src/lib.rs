//! Speech generation pipeline for SinglishVoice
//!
//! Wires one request end to end:
//! - Sinhala script gate (already-Sinhala text skips the rewrite path)
//! - text normalization
//! - the transliteration seam
//! - TTS synthesis and WAV output

pub mod speaker;
pub mod synthesis;
pub mod tts;
pub mod wav;

pub use speaker::resolve_speaker;
pub use synthesis::{SpeechOutput, SpeechPipeline, SpeechPipelineConfig, SpeechRequest};
pub use tts::{create_tts_backend, StubTtsBackend, TtsBackend, TtsConfig, TtsEngine};
pub use wav::write_speech_wav;

use singlish_voice_core::ServiceError;
use thiserror::Error;

/// Pipeline error type
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A collaborator service (transliteration, synthesis) failed.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// WAV encoding failed.
    #[error("wav encoding failed: {0}")]
    AudioWrite(#[from] hound::Error),

    /// Filesystem error while writing audio.
    #[error("audio output failed: {0}")]
    Io(#[from] std::io::Error),
}
