//! Generate a WAV for a romanized Sinhala phrase using the stub backends

use singlish_voice_pipeline::{
    create_tts_backend, SpeechPipeline, SpeechPipelineConfig, SpeechRequest, TtsConfig,
};
use singlish_voice_text_processing::{create_transliterator, TransliterationConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let transliterator = create_transliterator(&TransliterationConfig::default());
    let tts = create_tts_backend(&TtsConfig::default());
    let pipeline = SpeechPipeline::new(SpeechPipelineConfig::default(), transliterator, tts);

    let request = SpeechRequest::new("mata Rs.250 gewanna thiyenawa");
    let output = pipeline.generate(&request).await?;

    println!("Spoken text: {}", output.text);
    println!("Audio written to {}", output.audio_path.display());

    Ok(())
}
