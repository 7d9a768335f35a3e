//! Argument groups shared by the `tagalog-tts` and `tagalog-tts-web` binaries.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tagalog_speech::TTSProvider;
use tagalog_speech::providers::mms::{
    DEFAULT_MODEL_REPO, DEFAULT_ONNX_FILE, DEFAULT_ONNX_REPO, MmsConfig, MmsTTS,
};
use tagalog_speech::providers::tone::ToneTTS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// MMS VITS model over ONNX Runtime
    Mms,
    /// Sine bursts, no model download (smoke tests)
    Tone,
}

#[derive(Debug, Clone, Args)]
pub struct ModelArgs {
    /// Speech backend
    #[arg(long, value_enum, default_value_t = Backend::Mms)]
    pub backend: Backend,

    /// HuggingFace repository with vocab.json and the model configs
    #[arg(long, default_value = DEFAULT_MODEL_REPO)]
    pub model_repo: String,

    /// HuggingFace repository with the ONNX export
    #[arg(long, default_value = DEFAULT_ONNX_REPO)]
    pub onnx_repo: String,

    /// Path of the ONNX graph inside --onnx-repo
    #[arg(long, default_value = DEFAULT_ONNX_FILE)]
    pub onnx_file: String,

    /// Load model.onnx, vocab.json, tokenizer_config.json and config.json
    /// from this directory instead of the Hub
    #[arg(long)]
    pub model_dir: Option<PathBuf>,

    /// Intra-op threads for inference
    #[arg(long, default_value_t = 1)]
    pub threads: usize,
}

impl ModelArgs {
    pub fn mms_config(&self) -> MmsConfig {
        let config = match &self.model_dir {
            Some(dir) => MmsConfig::from_dir(dir),
            None => MmsConfig::from_hf(&self.model_repo, &self.onnx_repo, &self.onnx_file),
        };
        config.with_intra_threads(self.threads)
    }

    /// Load the selected provider once; callers share it.
    pub async fn load(&self) -> Result<Arc<dyn TTSProvider>> {
        match self.backend {
            Backend::Tone => {
                log::warn!("Using the tone backend: output is not speech");
                Ok(Arc::new(ToneTTS::default()))
            }
            Backend::Mms => {
                let config = self.mms_config();
                log::info!("Loading model {}", config.model_id);
                let start = Instant::now();

                let provider = tokio::task::spawn_blocking(move || MmsTTS::load(config))
                    .await
                    .context("Model loading task failed")?
                    .context("Failed to load MMS model")?;

                log::info!("Model ready in {:.2}s", start.elapsed().as_secs_f64());
                Ok(Arc::new(provider))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        model: ModelArgs,
    }

    #[test]
    fn test_defaults_point_at_the_hub() {
        let cli = TestCli::parse_from(["test"]);
        assert_eq!(cli.model.backend, Backend::Mms);
        assert_eq!(cli.model.threads, 1);

        let config = cli.model.mms_config();
        assert_eq!(config.model_id, DEFAULT_MODEL_REPO);
        assert_eq!(config.model.repo_id(), Some(DEFAULT_ONNX_REPO));
        assert_eq!(config.model.filename(), Some(DEFAULT_ONNX_FILE));
    }

    #[test]
    fn test_model_dir_overrides_repos() {
        let cli = TestCli::parse_from(["test", "--model-dir", "/models/tgl", "--threads", "4"]);
        let config = cli.model.mms_config();

        assert_eq!(
            config.model.local_path(),
            Some(std::path::Path::new("/models/tgl/model.onnx"))
        );
        assert_eq!(config.vocab.repo_id(), None);
        assert_eq!(config.intra_threads, 4);
    }

    #[tokio::test]
    async fn test_tone_backend_loads_without_model() {
        let cli = TestCli::parse_from(["test", "--backend", "tone"]);
        let provider = cli.model.load().await.unwrap();
        assert_eq!(provider.provider_name(), "tone");
    }
}
