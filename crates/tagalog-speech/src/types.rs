use serde::{Deserialize, Serialize};

/// Model information
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ModelInfo {
    /// Model identifier
    pub id: String,
    /// Model name
    pub name: String,
    /// Model description
    pub description: Option<String>,
    /// Supported languages
    pub languages: Vec<String>,
}

/// Audio data with normalized samples
#[derive(Clone, Debug, PartialEq)]
pub struct AudioData {
    /// Audio samples normalized to [-1.0, 1.0]
    pub samples: Vec<f32>,
    /// Number of audio channels (typically 1 for mono)
    pub channels: usize,
    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl AudioData {
    /// Mono audio at the given sample rate.
    pub fn mono(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            channels: 1,
            sample_rate,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Playback duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 || self.channels == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.channels as f64 / self.sample_rate as f64
    }

    pub fn duration_ms(&self) -> u64 {
        let frames_per_sec = self.channels as u64 * self.sample_rate as u64;
        if frames_per_sec == 0 {
            return 0;
        }
        self.samples.len() as u64 * 1000 / frames_per_sec
    }
}

/// Speech generation request
#[derive(Clone, Debug)]
pub struct SpeechRequest {
    pub text: String,
}

impl SpeechRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Speech generation response
#[derive(Clone, Debug)]
pub struct SpeechResponse {
    pub audio: AudioData,
    pub text: String,
    pub duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_from_sample_count() {
        let audio = AudioData::mono(vec![0.0; 16_000 * 3], 16_000);
        assert!((audio.duration_secs() - 3.0).abs() < 1e-9);
        assert_eq!(audio.duration_ms(), 3000);
    }

    #[test]
    fn test_duration_of_degenerate_audio() {
        let audio = AudioData {
            samples: vec![0.5; 10],
            channels: 1,
            sample_rate: 0,
        };
        assert_eq!(audio.duration_secs(), 0.0);
        assert!(AudioData::mono(Vec::new(), 16_000).is_empty());
    }

    #[test]
    fn test_model_info_serialization() {
        let info = ModelInfo {
            id: "facebook/mms-tts-tgl".to_string(),
            name: "MMS TTS Tagalog".to_string(),
            description: None,
            languages: vec!["tl".to_string()],
        };

        let json = serde_json::to_string(&info).unwrap();
        let deserialized: ModelInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, info);
    }
}
