//! WAV output: file naming and 32-bit float PCM writing.

use crate::error::{AudioError, AudioResult};
use crate::{AudioData, SpeechRate};
use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;
use std::fs::{self, OpenOptions};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// File name prefix used by the command-line tool.
pub const CLI_PREFIX: &str = "tagalog_tts";
/// File name prefix used by the web service.
pub const SERVICE_PREFIX: &str = "temp_audio";

/// How a generated audio file is named.
#[derive(Debug, Clone, PartialEq)]
pub enum FileNaming {
    /// `<prefix>_<YYYYMMDD_HHMMSS_mmm>[_speed<rate>].wav`, local time.
    /// Two files written within the same millisecond get the same name.
    Timestamp { prefix: String, rate: SpeechRate },
    /// `<prefix>_<uuid v4 hex>.wav`.
    Random { prefix: String },
}

impl FileNaming {
    pub fn timestamp(rate: SpeechRate) -> Self {
        FileNaming::Timestamp {
            prefix: CLI_PREFIX.to_string(),
            rate,
        }
    }

    pub fn random() -> Self {
        FileNaming::Random {
            prefix: SERVICE_PREFIX.to_string(),
        }
    }

    /// A fresh file name for the current moment.
    pub fn file_name(&self) -> String {
        self.file_name_at(Local::now())
    }

    pub fn file_name_at<Tz>(&self, now: DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        match self {
            FileNaming::Timestamp { prefix, rate } => {
                let stamp = now.format("%Y%m%d_%H%M%S_%3f");
                if rate.is_identity() {
                    format!("{prefix}_{stamp}.wav")
                } else {
                    format!("{prefix}_{stamp}_speed{rate}.wav")
                }
            }
            FileNaming::Random { prefix } => {
                format!("{prefix}_{}.wav", uuid::Uuid::new_v4().simple())
            }
        }
    }
}

/// Write `audio` into `dir` under a name chosen by `naming`, creating the
/// directory if needed. Returns the path of the new file.
pub fn write_wav(dir: &Path, audio: &AudioData, naming: &FileNaming) -> AudioResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(naming.file_name());
    write_wav_to(&path, audio)?;
    Ok(path)
}

/// Write `audio` to `path` as 32-bit float PCM. Fails if `path` already exists.
pub fn write_wav_to(path: &Path, audio: &AudioData) -> AudioResult<()> {
    let spec = hound::WavSpec {
        channels: audio.channels.max(1) as u16,
        sample_rate: audio.sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };

    let file = OpenOptions::new().write(true).create_new(true).open(path)?;
    let wav_err = |source| AudioError::Wav {
        path: path.display().to_string(),
        source,
    };

    let mut writer = hound::WavWriter::new(BufWriter::new(file), spec).map_err(wav_err)?;
    for &sample in &audio.samples {
        writer.write_sample(sample).map_err(wav_err)?;
    }
    writer.finalize().map_err(wav_err)?;

    log::debug!(
        "Wrote {} samples at {} Hz to {}",
        audio.samples.len(),
        audio.sample_rate,
        path.display()
    );
    Ok(())
}

/// Read a WAV file into normalized samples.
pub fn read_wav(path: &Path) -> AudioResult<AudioData> {
    let wav_err = |source| AudioError::Wav {
        path: path.display().to_string(),
        source,
    };
    let mut reader = hound::WavReader::open(path).map_err(wav_err)?;
    let spec = reader.spec();

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<Result<_, _>>()
            .map_err(wav_err)?,
        hound::SampleFormat::Int => match spec.bits_per_sample {
            16 => reader
                .samples::<i16>()
                .map(|s| s.map(|v| v as f32 / i16::MAX as f32))
                .collect::<Result<_, _>>()
                .map_err(wav_err)?,
            32 => reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / i32::MAX as f32))
                .collect::<Result<_, _>>()
                .map_err(wav_err)?,
            _ => return Err(wav_err(hound::Error::Unsupported)),
        },
    };

    Ok(AudioData {
        samples,
        channels: spec.channels as usize,
        sample_rate: spec.sample_rate,
    })
}
