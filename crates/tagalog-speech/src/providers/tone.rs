//! Deterministic tone provider.
//!
//! Produces one short sine burst per non-whitespace character instead of
//! speech. It needs no model download, which makes it the provider of choice
//! for smoke tests of the CLI and the web service.

use crate::{
    AudioData, ModelInfo, SpeechRequest, SpeechResponse, TTSError, TTSModelsProvider, TTSProvider,
    TTSResult, TTSSpeechProvider,
};
use async_trait::async_trait;
use std::f32::consts::PI;

/// Milliseconds of audio generated per character.
const MS_PER_CHAR: u32 = 80;

pub struct ToneTTS {
    sample_rate: u32,
}

impl ToneTTS {
    pub fn new(sample_rate: u32) -> Self {
        Self { sample_rate }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn render(&self, text: &str) -> Vec<f32> {
        let per_char = (self.sample_rate * MS_PER_CHAR / 1000) as usize;
        let mut samples = Vec::new();
        for ch in text.chars().filter(|c| !c.is_whitespace()) {
            let freq = 180.0 + (ch as u32 % 32) as f32 * 15.0;
            samples.extend((0..per_char).map(|i| {
                0.4 * (2.0 * PI * freq * i as f32 / self.sample_rate as f32).sin()
            }));
        }
        samples
    }
}

impl Default for ToneTTS {
    fn default() -> Self {
        Self::new(16_000)
    }
}

impl TTSProvider for ToneTTS {
    fn provider_name(&self) -> &str {
        "tone"
    }
}

#[async_trait]
impl TTSSpeechProvider for ToneTTS {
    async fn generate_speech(&self, request: SpeechRequest) -> TTSResult<SpeechResponse> {
        let text = request.text.trim();
        if text.is_empty() {
            return Err(TTSError::InvalidInput("text must not be empty".to_string()));
        }

        let audio = AudioData::mono(self.render(text), self.sample_rate);
        Ok(SpeechResponse {
            duration_ms: audio.duration_ms(),
            audio,
            text: request.text,
        })
    }

    fn default_sample_rate(&self) -> u32 {
        self.sample_rate
    }
}

impl TTSModelsProvider for ToneTTS {
    fn get_current_model(&self) -> ModelInfo {
        ModelInfo {
            id: "tone".to_string(),
            name: "Sine tone".to_string(),
            description: Some("One sine burst per character, no model".to_string()),
            languages: self.supported_languages(),
        }
    }
}
