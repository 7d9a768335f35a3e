//! Speech-rate policy and rate adjustment.
//!
//! A rate multiplier `m` stretches a waveform of `n` samples to exactly
//! `floor(n / m)` samples at the original sample rate, so `m < 1.0` slows
//! speech down and `m > 1.0` speeds it up. The stretch is done with sinc
//! (band-limited) interpolation.

use crate::AudioData;
use crate::error::{AudioError, AudioResult};
use rubato::{
    Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
};
use std::fmt;

/// Slowest accepted multiplier.
pub const MIN_RATE: f64 = 0.3;
/// Fastest accepted multiplier.
pub const MAX_RATE: f64 = 2.0;
/// Multiplier used when none is given or the given one is out of range.
pub const DEFAULT_RATE: f64 = 0.7;

/// A speech-rate multiplier guaranteed to lie in `[MIN_RATE, MAX_RATE]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeechRate(f64);

impl SpeechRate {
    /// Playback at the model's natural speed.
    pub const NORMAL: SpeechRate = SpeechRate(1.0);

    /// Accepts `value` if it is within range, otherwise falls back to
    /// [`DEFAULT_RATE`] and logs a warning.
    pub fn new(value: f64) -> Self {
        if value.is_finite() && (MIN_RATE..=MAX_RATE).contains(&value) {
            Self(value)
        } else {
            log::warn!(
                "Speech rate {value} is outside [{MIN_RATE}, {MAX_RATE}]; using {DEFAULT_RATE}"
            );
            Self(DEFAULT_RATE)
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_identity(self) -> bool {
        self.0 == 1.0
    }

    /// Number of samples a waveform of `len` samples has after adjustment.
    pub fn target_len(self, len: usize) -> usize {
        (len as f64 / self.0).floor() as usize
    }
}

impl Default for SpeechRate {
    fn default() -> Self {
        Self(DEFAULT_RATE)
    }
}

impl fmt::Display for SpeechRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Stretch `audio` to `floor(len / rate)` samples. Rate 1.0 returns the
/// input unchanged.
pub fn adjust_rate(audio: &AudioData, rate: SpeechRate) -> AudioResult<AudioData> {
    if rate.is_identity() {
        return Ok(audio.clone());
    }

    let target_len = rate.target_len(audio.samples.len());
    let samples = if audio.is_empty() || target_len == 0 {
        Vec::new()
    } else {
        resample_to_len(&audio.samples, target_len)?
    };

    log::debug!(
        "Adjusted speech rate by {}: {} -> {} samples",
        rate.value(),
        audio.samples.len(),
        samples.len()
    );

    Ok(AudioData {
        samples,
        channels: audio.channels,
        sample_rate: audio.sample_rate,
    })
}

fn resample_to_len(input: &[f32], target_len: usize) -> AudioResult<Vec<f32>> {
    let ratio = target_len as f64 / input.len() as f64;
    let params = SincInterpolationParameters {
        sinc_len: 256,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Linear,
        oversampling_factor: 256,
        window: WindowFunction::BlackmanHarris2,
    };

    // Whole waveform as a single chunk; the model output is short enough.
    let mut resampler = SincFixedIn::<f32>::new(ratio, 1.0, params, input.len(), 1)
        .map_err(|e| AudioError::ResamplerInit(e.to_string()))?;
    let delay = resampler.output_delay();

    let waves_in = [input];
    let mut output = resampler
        .process(&waves_in[..], None)
        .map_err(|e| AudioError::Resample(e.to_string()))?
        .remove(0);

    // Flush the filter tail until the delayed signal is fully out.
    while output.len() < delay + target_len {
        let tail = resampler
            .process_partial(None::<&[Vec<f32>]>, None)
            .map_err(|e| AudioError::Resample(e.to_string()))?;
        match tail.into_iter().next() {
            Some(chunk) if !chunk.is_empty() => output.extend_from_slice(&chunk),
            _ => break,
        }
    }

    let mut samples: Vec<f32> = output.into_iter().skip(delay).take(target_len).collect();
    samples.resize(target_len, 0.0);
    Ok(samples)
}
