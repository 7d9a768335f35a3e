//! The shared `synthesize -> adjust rate -> write` pipeline.

use crate::error::{AudioError, TTSError};
use crate::{AudioData, FileNaming, SpeechRate, SpeechRequest, TTSProvider, adjust_rate, write_wav};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SynthesisError {
    #[error(transparent)]
    Speech(#[from] TTSError),

    #[error(transparent)]
    Audio(#[from] AudioError),

    #[error("Background audio task failed: {0}")]
    Task(String),
}

impl SynthesisError {
    /// Whether the request itself was unusable (as opposed to a provider or
    /// disk failure).
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SynthesisError::Speech(e) if e.is_invalid_input())
    }
}

/// A written audio file and the audio that went into it.
#[derive(Debug, Clone)]
pub struct SynthesisOutput {
    pub path: PathBuf,
    pub audio: AudioData,
    /// Duration of the waveform before rate adjustment.
    pub source_duration_ms: u64,
}

impl SynthesisOutput {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Synthesize `text` and adjust it to `rate`.
pub async fn synthesize(
    provider: &dyn TTSProvider,
    text: &str,
    rate: SpeechRate,
) -> Result<(AudioData, u64), SynthesisError> {
    let response = provider.generate_speech(SpeechRequest::new(text)).await?;
    log::info!(
        "{} produced {} ms of audio at {} Hz",
        provider.provider_name(),
        response.duration_ms,
        response.audio.sample_rate
    );

    let source_ms = response.duration_ms;
    let audio = response.audio;
    let adjusted = tokio::task::spawn_blocking(move || adjust_rate(&audio, rate))
        .await
        .map_err(|e| SynthesisError::Task(e.to_string()))??;
    Ok((adjusted, source_ms))
}

/// Synthesize `text`, adjust it to `rate` and write it into `dir`.
pub async fn synthesize_to_file(
    provider: &dyn TTSProvider,
    text: &str,
    rate: SpeechRate,
    dir: &Path,
    naming: &FileNaming,
) -> Result<SynthesisOutput, SynthesisError> {
    let (audio, source_duration_ms) = synthesize(provider, text, rate).await?;

    let dir = dir.to_path_buf();
    let naming = naming.clone();
    let (path, audio) = tokio::task::spawn_blocking(move || {
        write_wav(&dir, &audio, &naming).map(|path| (path, audio))
    })
    .await
    .map_err(|e| SynthesisError::Task(e.to_string()))??;

    log::info!("Audio saved to {}", path.display());
    Ok(SynthesisOutput {
        path,
        audio,
        source_duration_ms,
    })
}
