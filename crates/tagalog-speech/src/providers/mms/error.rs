//! Error types for the MMS provider

use crate::ModelSourceError;
use thiserror::Error;

/// MMS specific errors
#[derive(Error, Debug)]
pub enum MmsError {
    #[error("Model source error: {0}")]
    ModelSource(#[from] ModelSourceError),

    #[error("IO error: {source}\nFile path: {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Model load failed: {0}")]
    ModelLoad(String),

    #[error("Model inference failed: {0}")]
    Inference(String),

    #[error("Text contains no characters in the model vocabulary: {0:?}")]
    Unpronounceable(String),

    #[error("Inference session lock poisoned")]
    LockPoisoned,
}

/// Result type for MMS operations
pub type Result<T> = std::result::Result<T, MmsError>;

// Conversion to parent crate's TTSError
impl From<MmsError> for crate::TTSError {
    fn from(err: MmsError) -> Self {
        match err {
            MmsError::ModelSource(e) => {
                crate::TTSError::ModelNotFound(e.to_string(), "mms".to_string())
            }
            MmsError::Io { path, source } => {
                crate::TTSError::IoError(source, "read model artifact".to_string(), path)
            }
            MmsError::Unpronounceable(text) => crate::TTSError::InvalidInput(format!(
                "no characters the model can pronounce in {text:?}"
            )),
            MmsError::Inference(msg) => crate::TTSError::GenerationFailed(msg, 0),
            other => crate::TTSError::ProviderError(other.to_string(), "mms".to_string()),
        }
    }
}
