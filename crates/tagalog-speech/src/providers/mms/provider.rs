//! MMS provider implementation
//!
//! Implements the TTS provider traits on top of an ONNX Runtime session.

use super::config::{MmsConfig, VitsModelConfig};
use super::error::{MmsError, Result};
use super::session::{create_session, run_vits};
use super::tokenizer::{TokenizerConfig, VitsTokenizer};
use crate::{
    AudioData, ModelInfo, SpeechRequest, SpeechResponse, TTSError, TTSModelsProvider, TTSProvider,
    TTSResult, TTSSpeechProvider,
};
use async_trait::async_trait;
use ort::session::Session;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Tagalog (or any MMS language) VITS model running on ONNX Runtime.
pub struct MmsTTS {
    session: Arc<Mutex<Session>>,
    tokenizer: VitsTokenizer,
    sample_rate: u32,
    use_attention_mask: bool,
    model_id: String,
}

impl MmsTTS {
    /// Resolve (downloading if needed) and load every model artifact.
    ///
    /// This is the expensive cold start; do it once per process and share
    /// the provider.
    pub fn load(config: MmsConfig) -> Result<Self> {
        let started = Instant::now();
        log::info!("Loading TTS model {} from {}", config.model_id, config.model);

        let vocab: HashMap<String, i64> = read_json(&config.vocab.resolve()?)?;
        let tokenizer_config: TokenizerConfig = read_json(&config.tokenizer_config.resolve()?)?;
        let model_config: VitsModelConfig = read_json(&config.model_config.resolve()?)?;
        let tokenizer = VitsTokenizer::new(vocab, tokenizer_config);

        let model_path = config.model.resolve()?;
        let session = create_session(&model_path, config.intra_threads)?;

        log::info!(
            "Model loaded successfully in {:.1}s ({} Hz, {} vocabulary entries)",
            started.elapsed().as_secs_f64(),
            model_config.sampling_rate,
            tokenizer.vocab_len()
        );

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            tokenizer,
            sample_rate: model_config.sampling_rate,
            use_attention_mask: config.use_attention_mask,
            model_id: config.model_id,
        })
    }

    pub fn tokenizer(&self) -> &VitsTokenizer {
        &self.tokenizer
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|source| MmsError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| MmsError::Json {
        path: path.display().to_string(),
        source,
    })
}

impl TTSProvider for MmsTTS {
    fn provider_name(&self) -> &str {
        "mms"
    }
}

#[async_trait]
impl TTSSpeechProvider for MmsTTS {
    async fn generate_speech(&self, request: SpeechRequest) -> TTSResult<SpeechResponse> {
        let text = request.text.trim();
        if text.is_empty() {
            return Err(TTSError::InvalidInput("text must not be empty".to_string()));
        }
        let text_len = text.chars().count();

        let input_ids = self.tokenizer.encode(text);
        if input_ids.is_empty() {
            return Err(MmsError::Unpronounceable(text.to_string()).into());
        }
        log::debug!("Tokenized {} characters into {} ids", text_len, input_ids.len());

        // Run CPU-intensive generation in blocking thread
        let session = Arc::clone(&self.session);
        let use_attention_mask = self.use_attention_mask;
        let samples =
            tokio::task::spawn_blocking(move || run_vits(&session, input_ids, use_attention_mask))
                .await
                .map_err(|e| TTSError::GenerationFailed(format!("Task join error: {e}"), text_len))?
                .map_err(|e| match e {
                    MmsError::Inference(msg) => TTSError::GenerationFailed(msg, text_len),
                    other => other.into(),
                })?;

        if samples.is_empty() {
            return Err(TTSError::GenerationFailed(
                "model returned an empty waveform".to_string(),
                text_len,
            ));
        }

        let audio = AudioData::mono(samples, self.sample_rate);
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

impl TTSModelsProvider for MmsTTS {
    fn get_current_model(&self) -> ModelInfo {
        ModelInfo {
            id: self.model_id.clone(),
            name: "MMS TTS".to_string(),
            description: Some(format!(
                "Massively Multilingual Speech VITS model ({} Hz)",
                self.sample_rate
            )),
            languages: self.supported_languages(),
        }
    }
}
