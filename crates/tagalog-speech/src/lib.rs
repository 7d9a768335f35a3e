//! # Tagalog Speech
//!
//! Text-to-speech building blocks for Tagalog audio generation.
//!
//! The crate keeps the model behind a small set of provider traits so the
//! command-line tool and the web service can share one synthesis pipeline:
//!
//! - `TTSProvider`: Marker trait combining all TTS capabilities
//! - `TTSSpeechProvider`: Speech generation capabilities
//! - `TTSModelsProvider`: Model and language information
//!
//! Around the provider sit the audio helpers:
//!
//! - [`rate`]: speech-rate policy and band-limited resampling
//! - [`wav`]: WAV file naming and writing
//! - [`synthesis`]: `synthesize -> adjust rate -> write` in one call
//!
//! ## Providers
//!
//! Enable providers using feature flags:
//! - `mms` (default): Meta MMS VITS models exported to ONNX (`facebook/mms-tts-tgl`)
//!
//! ## Example
//!
//! ```rust
//! use tagalog_speech::{FileNaming, SpeechRate, SynthesisError, TTSProvider, synthesis};
//!
//! async fn speak(provider: &dyn TTSProvider, text: &str) -> Result<(), SynthesisError> {
//!     let rate = SpeechRate::new(0.7);
//!     let output = synthesis::synthesize_to_file(
//!         provider,
//!         text,
//!         rate,
//!         "output".as_ref(),
//!         &FileNaming::timestamp(rate),
//!     )
//!     .await?;
//!     println!("Audio saved to: {}", output.path.display());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod model_source;
mod provider;
pub mod rate;
pub mod synthesis;
pub mod types;
pub mod wav;

// Provider implementations
pub mod providers;

pub use error::{AudioError, AudioResult, TTSError, TTSResult};
pub use model_source::{HubFile, ModelSource, ModelSourceError};
pub use provider::{TTSModelsProvider, TTSProvider, TTSSpeechProvider};
pub use rate::{SpeechRate, adjust_rate};
pub use synthesis::{SynthesisError, SynthesisOutput};
pub use types::{AudioData, ModelInfo, SpeechRequest, SpeechResponse};
pub use wav::{FileNaming, read_wav, write_wav};
