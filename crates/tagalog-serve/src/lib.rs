//! # Tagalog Serve
//!
//! A small HTTP service around a [`tagalog_speech::TTSProvider`]:
//!
//! - `GET  /` static page with a text box
//! - `GET  /health` model information
//! - `POST /generate_tts` synthesize text into a temporary WAV file
//! - `GET  /audio/{filename}` fetch a generated file
//! - `GET  /cleanup/{filename}` delete a generated file
//!
//! The provider is built once by the caller and shared by every request.

pub mod error;
mod server;
pub mod store;

pub use error::{Result, ServeError};
pub use server::api::{CleanupResponse, GenerateRequest, GenerateResponse, HealthResponse};
pub use server::{ServerConfig, router, serve};
pub use store::AudioStore;
