//! Configuration for the MMS provider

use crate::ModelSource;
use serde::Deserialize;
use std::path::Path;

/// Repository holding the vocabulary and JSON configs.
pub const DEFAULT_MODEL_REPO: &str = "facebook/mms-tts-tgl";
/// Repository holding the ONNX export of the model.
pub const DEFAULT_ONNX_REPO: &str = "Xenova/mms-tts-tgl";
/// Path of the ONNX graph inside [`DEFAULT_ONNX_REPO`].
pub const DEFAULT_ONNX_FILE: &str = "onnx/model.onnx";

const VOCAB_FILE: &str = "vocab.json";
const TOKENIZER_CONFIG_FILE: &str = "tokenizer_config.json";
const MODEL_CONFIG_FILE: &str = "config.json";
const LOCAL_ONNX_FILE: &str = "model.onnx";

/// Where to find every artifact of an MMS VITS model, plus runtime options.
#[derive(Debug, Clone)]
pub struct MmsConfig {
    /// ONNX graph
    pub model: ModelSource,
    /// Character vocabulary (`vocab.json`)
    pub vocab: ModelSource,
    /// Tokenizer options (`tokenizer_config.json`)
    pub tokenizer_config: ModelSource,
    /// Model options, read for the sampling rate (`config.json`)
    pub model_config: ModelSource,
    /// Identifier reported in [`crate::ModelInfo`]
    pub model_id: String,
    /// Intra-op threads for ONNX Runtime (default: 1)
    pub intra_threads: usize,
    /// Feed an all-ones `attention_mask` next to `input_ids` (default: true)
    pub use_attention_mask: bool,
}

impl MmsConfig {
    /// Configs from `model_repo`, graph from `onnx_repo`/`onnx_file`.
    pub fn from_hf(
        model_repo: impl Into<String>,
        onnx_repo: impl Into<String>,
        onnx_file: impl Into<String>,
    ) -> Self {
        let model_repo = model_repo.into();
        Self {
            model: ModelSource::from_hf(onnx_repo, onnx_file),
            vocab: ModelSource::from_hf(model_repo.clone(), VOCAB_FILE),
            tokenizer_config: ModelSource::from_hf(model_repo.clone(), TOKENIZER_CONFIG_FILE),
            model_config: ModelSource::from_hf(model_repo.clone(), MODEL_CONFIG_FILE),
            model_id: model_repo,
            intra_threads: 1,
            use_attention_mask: true,
        }
    }

    /// All artifacts from one local directory: `model.onnx`, `vocab.json`,
    /// `tokenizer_config.json` and `config.json`.
    pub fn from_dir(dir: &Path) -> Self {
        Self {
            model: ModelSource::from_file(dir.join(LOCAL_ONNX_FILE)),
            vocab: ModelSource::from_file(dir.join(VOCAB_FILE)),
            tokenizer_config: ModelSource::from_file(dir.join(TOKENIZER_CONFIG_FILE)),
            model_config: ModelSource::from_file(dir.join(MODEL_CONFIG_FILE)),
            model_id: dir.display().to_string(),
            intra_threads: 1,
            use_attention_mask: true,
        }
    }

    pub fn with_intra_threads(mut self, threads: usize) -> Self {
        self.intra_threads = threads.max(1);
        self
    }

    pub fn with_attention_mask(mut self, enabled: bool) -> Self {
        self.use_attention_mask = enabled;
        self
    }
}

impl Default for MmsConfig {
    fn default() -> Self {
        Self::from_hf(DEFAULT_MODEL_REPO, DEFAULT_ONNX_REPO, DEFAULT_ONNX_FILE)
    }
}

/// The part of `config.json` the provider needs.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct VitsModelConfig {
    #[serde(default = "default_sampling_rate")]
    pub sampling_rate: u32,
}

fn default_sampling_rate() -> u32 {
    16_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_tagalog_model() {
        let config = MmsConfig::default();
        assert_eq!(config.vocab.repo_id(), Some(DEFAULT_MODEL_REPO));
        assert_eq!(config.vocab.filename(), Some("vocab.json"));
        assert_eq!(config.model.repo_id(), Some(DEFAULT_ONNX_REPO));
        assert_eq!(config.model.filename(), Some(DEFAULT_ONNX_FILE));
        assert_eq!(config.model_id, DEFAULT_MODEL_REPO);
        assert_eq!(config.intra_threads, 1);
        assert!(config.use_attention_mask);
    }

    #[test]
    fn test_from_dir_uses_local_files() {
        let config = MmsConfig::from_dir(Path::new("/models/tgl")).with_intra_threads(0);
        assert_eq!(
            config.model.local_path(),
            Some(Path::new("/models/tgl/model.onnx"))
        );
        assert_eq!(
            config.tokenizer_config.local_path(),
            Some(Path::new("/models/tgl/tokenizer_config.json"))
        );
        assert_eq!(config.intra_threads, 1);
    }

    #[test]
    fn test_model_config_sampling_rate() {
        let parsed: VitsModelConfig =
            serde_json::from_str(r#"{"model_type": "vits", "sampling_rate": 22050}"#).unwrap();
        assert_eq!(parsed.sampling_rate, 22_050);

        let defaulted: VitsModelConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(defaulted.sampling_rate, 16_000);
    }
}
