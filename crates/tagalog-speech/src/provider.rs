use crate::{ModelInfo, SpeechRequest, SpeechResponse, TTSResult};
use async_trait::async_trait;

/// Marker Trait for TTS providers
///
/// This trait combines all TTS capabilities into a single provider interface.
/// Providers should implement this marker trait along with the specific capability traits.
pub trait TTSProvider: TTSSpeechProvider + TTSModelsProvider + Send + Sync {
    /// Short provider name used in logs and error context
    fn provider_name(&self) -> &str;
}

/// Trait for TTS speech generation capabilities
#[async_trait]
pub trait TTSSpeechProvider: Send + Sync {
    /// Generate speech from text (required)
    ///
    /// # Arguments
    /// * `request` - Speech generation request with the text to speak
    ///
    /// # Returns
    /// Speech response with audio data and metadata. Empty text is rejected
    /// with [`crate::TTSError::InvalidInput`].
    async fn generate_speech(&self, request: SpeechRequest) -> TTSResult<SpeechResponse>;

    /// Sample rate of the audio this provider produces
    fn default_sample_rate(&self) -> u32 {
        16_000
    }
}

/// Trait for TTS model management capabilities
pub trait TTSModelsProvider: Send + Sync {
    /// Get current model information (required)
    fn get_current_model(&self) -> ModelInfo;

    /// Get supported languages
    fn supported_languages(&self) -> Vec<String> {
        vec!["tl".to_string()]
    }
}
