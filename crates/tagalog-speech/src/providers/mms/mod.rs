//! MMS provider for Tagalog speech
//!
//! Runs Meta's Massively Multilingual Speech VITS models (by default
//! `facebook/mms-tts-tgl`) exported to ONNX.
//!
//! # Examples
//!
//! ```no_run
//! use tagalog_speech::providers::mms::{MmsConfig, MmsTTS};
//! use tagalog_speech::{SpeechRequest, TTSSpeechProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Downloads the model on first use
//!     let provider = MmsTTS::load(MmsConfig::default())?;
//!
//!     let response = provider
//!         .generate_speech(SpeechRequest::new("magandang tanghali"))
//!         .await?;
//!     println!("{} samples", response.audio.samples.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod tokenizer;

mod provider;
mod session;

// Re-exports
pub use config::{DEFAULT_MODEL_REPO, DEFAULT_ONNX_FILE, DEFAULT_ONNX_REPO, MmsConfig};
pub use error::{MmsError, Result};
pub use provider::MmsTTS;
pub use tokenizer::{TokenizerConfig, VitsTokenizer};
