//! WAV output
//!
//! Generated audio lands on disk as mono float WAV files named
//! `audio_{unix_timestamp}_{speaker}.wav`, one per request.

use std::path::{Path, PathBuf};

use chrono::Utc;
use hound::{SampleFormat, WavSpec, WavWriter};

use crate::PipelineError;

/// Write mono float samples under `dir`, creating the directory if needed.
/// Returns the full path of the file written.
pub fn write_speech_wav(
    dir: &Path,
    speaker: &str,
    samples: &[f32],
    sample_rate: u32,
) -> Result<PathBuf, PipelineError> {
    std::fs::create_dir_all(dir)?;

    let filename = format!("audio_{}_{}.wav", Utc::now().timestamp(), speaker);
    let path = dir.join(filename);

    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create(&path, spec)?;
    for sample in samples {
        writer.write_sample(*sample)?;
    }
    writer.finalize()?;

    Ok(path)
}
