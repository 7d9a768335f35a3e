//! Speech provider implementations
//!
//! This module contains concrete implementations of the TTS providers.
//! Model-backed providers are feature-gated and can be enabled individually.

#[cfg(feature = "mms")]
pub mod mms;

pub mod tone;
