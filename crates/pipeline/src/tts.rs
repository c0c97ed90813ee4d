//! Speech synthesis backends
//!
//! The VITS voice model is served out of process; the in-process backend
//! is a silence-emitting stub for tests and disabled deployments. The
//! trait is the seam a real model client implements.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::PipelineError;

/// TTS backend trait
#[async_trait]
pub trait TtsBackend: Send + Sync {
    /// Synthesize Sinhala-script text to mono audio samples.
    async fn synthesize(
        &self,
        text: &str,
        speaker: Option<&str>,
    ) -> Result<Vec<f32>, PipelineError>;

    /// Output sample rate
    fn sample_rate(&self) -> u32;

    /// Speaker identifiers the backend can voice, in preference order.
    /// Empty for single-voice backends.
    fn speakers(&self) -> Vec<String>;
}

/// TTS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtsConfig {
    /// Which engine to use
    #[serde(default)]
    pub engine: TtsEngine,
    /// Output sample rate for backends that let the caller choose
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
}

fn default_sample_rate() -> u32 {
    22050
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            engine: TtsEngine::default(),
            sample_rate: default_sample_rate(),
        }
    }
}

/// TTS engines
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TtsEngine {
    /// VITS voice model (out-of-process service)
    #[default]
    Vits,
}

/// Stub backend when no model is available (returns silence)
pub struct StubTtsBackend {
    sample_rate: u32,
    speakers: Vec<String>,
}

impl StubTtsBackend {
    pub fn new(sample_rate: u32) -> Self {
        tracing::warn!("Using stub TTS backend - audio output will be silence");
        Self {
            sample_rate,
            speakers: Vec::new(),
        }
    }

    /// Stub with a speaker roster, for exercising speaker resolution.
    pub fn with_speakers(
        sample_rate: u32,
        speakers: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let mut backend = Self::new(sample_rate);
        backend.speakers = speakers.into_iter().map(Into::into).collect();
        backend
    }
}

#[async_trait]
impl TtsBackend for StubTtsBackend {
    async fn synthesize(
        &self,
        text: &str,
        _speaker: Option<&str>,
    ) -> Result<Vec<f32>, PipelineError> {
        // Silence of roughly 50ms per character
        let duration_samples = text.chars().count() * (self.sample_rate as usize / 20);
        Ok(vec![0.0f32; duration_samples])
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn speakers(&self) -> Vec<String> {
        self.speakers.clone()
    }
}

/// Create a TTS backend based on config.
pub fn create_tts_backend(config: &TtsConfig) -> Arc<dyn TtsBackend> {
    match config.engine {
        TtsEngine::Vits => {
            tracing::warn!("VITS synthesis runs out of process, using stub backend");
            Arc::new(StubTtsBackend::new(config.sample_rate))
        }
    }
}
