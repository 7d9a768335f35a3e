use thiserror::Error;

/// TTS-related errors
#[derive(Error, Debug)]
pub enum TTSError {
    /// The request cannot be synthesized as given
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Provider-specific error
    #[error(
        "TTS provider error: {0}\nProvider: {1}\nDetails: This error originated from the TTS provider implementation"
    )]
    ProviderError(String, String),

    /// Audio generation failed
    #[error(
        "Audio generation failed: {0}\nInput text length: {1} characters\nSuggestion: Try shorter text or check model initialization"
    )]
    GenerationFailed(String, usize),

    /// IO error
    #[error(
        "IO error during TTS operation: {0}\nOperation: {1}\nPath: {2}\nSuggestion: Check file permissions and disk space"
    )]
    IoError(std::io::Error, String, String),

    /// Model not found
    #[error(
        "Model not found: '{0}'\nModel path: {1}\nSuggestion: Ensure the model is downloaded from HuggingFace. Check HF_TOKEN environment variable"
    )]
    ModelNotFound(String, String),

    /// Other errors
    #[error("TTS error: {0}\nContext: {1}")]
    Other(String, String),
}

impl TTSError {
    /// Whether the caller, rather than the provider, is at fault.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, TTSError::InvalidInput(_))
    }
}

/// Result type for TTS operations
pub type TTSResult<T> = Result<T, TTSError>;

/// Errors raised while resampling or writing audio.
#[derive(Error, Debug)]
pub enum AudioError {
    #[error("Failed to build resampler: {0}")]
    ResamplerInit(String),

    #[error("Resampling failed: {0}")]
    Resample(String),

    #[error("WAV encoding failed for {path}: {source}")]
    Wav {
        path: String,
        #[source]
        source: hound::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AudioResult<T> = Result<T, AudioError>;
