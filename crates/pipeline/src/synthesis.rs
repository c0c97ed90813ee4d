//! End-to-end speech generation
//!
//! Carries one request through the system: gate on script, normalize,
//! transliterate, synthesize, write audio.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use singlish_voice_core::Transliterator;
use singlish_voice_text_processing::{Normalizer, NormalizerConfig, ScriptDetector};
use uuid::Uuid;

use crate::speaker::resolve_speaker;
use crate::tts::TtsBackend;
use crate::wav::write_speech_wav;
use crate::PipelineError;

/// One speech generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechRequest {
    /// Singlish or Sinhala text to speak
    pub text: String,
    /// Requested speaker
    #[serde(default = "default_speaker")]
    pub speaker: String,
}

fn default_speaker() -> String {
    "speaker_01".to_string()
}

impl SpeechRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            speaker: default_speaker(),
        }
    }

    pub fn with_speaker(text: impl Into<String>, speaker: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            speaker: speaker.into(),
        }
    }
}

/// Pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechPipelineConfig {
    /// Normalization options
    #[serde(default)]
    pub normalizer: NormalizerConfig,
    /// Directory that receives generated WAV files
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("generated_waves")
}

impl Default for SpeechPipelineConfig {
    fn default() -> Self {
        Self {
            normalizer: NormalizerConfig::default(),
            output_dir: default_output_dir(),
        }
    }
}

/// What a completed request produced.
#[derive(Debug, Clone)]
pub struct SpeechOutput {
    /// The Sinhala text that was synthesized
    pub text: String,
    /// Where the audio landed
    pub audio_path: PathBuf,
    /// Sample rate of the written audio
    pub sample_rate: u32,
}

/// End-to-end speech pipeline over the two collaborator seams.
pub struct SpeechPipeline {
    config: SpeechPipelineConfig,
    normalizer: Normalizer,
    detector: ScriptDetector,
    transliterator: Arc<dyn Transliterator>,
    tts: Arc<dyn TtsBackend>,
}

impl SpeechPipeline {
    pub fn new(
        config: SpeechPipelineConfig,
        transliterator: Arc<dyn Transliterator>,
        tts: Arc<dyn TtsBackend>,
    ) -> Self {
        let normalizer = Normalizer::new(config.normalizer.clone());
        Self {
            config,
            normalizer,
            detector: ScriptDetector::new(),
            transliterator,
            tts,
        }
    }

    /// Generate speech for one request.
    ///
    /// Text already in Sinhala script goes straight to synthesis; anything
    /// else is normalized first and then transliterated through the seam.
    pub async fn generate(&self, request: &SpeechRequest) -> Result<SpeechOutput, PipelineError> {
        let request_id = Uuid::new_v4();

        let sinhala = if self.detector.is_sinhala(&request.text) {
            tracing::debug!(%request_id, "input already in Sinhala script, skipping transliteration");
            request.text.clone()
        } else {
            let normalized = self.normalizer.normalize(&request.text);
            tracing::debug!(
                %request_id,
                backend = self.transliterator.name(),
                "normalized input, transliterating"
            );
            self.transliterator.transliterate(&normalized).await?
        };

        let roster = self.tts.speakers();
        let speaker = resolve_speaker(&request.speaker, &roster);
        let samples = self.tts.synthesize(&sinhala, speaker.as_deref()).await?;

        let label = speaker.as_deref().unwrap_or(request.speaker.as_str());
        let path = write_speech_wav(
            &self.config.output_dir,
            label,
            &samples,
            self.tts.sample_rate(),
        )?;

        tracing::info!(
            %request_id,
            path = %path.display(),
            samples = samples.len(),
            "speech generated"
        );

        Ok(SpeechOutput {
            text: sinhala,
            audio_path: path,
            sample_rate: self.tts.sample_rate(),
        })
    }
}
