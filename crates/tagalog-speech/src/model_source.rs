//! Where model artifacts live: a local path or a file in a HuggingFace repo.

use std::fmt;
use std::path::{Path, PathBuf};

/// Env vars checked, in order, for a HuggingFace access token.
#[cfg(feature = "model-hf")]
const HF_TOKEN_VARS: [&str; 3] = ["HF_TOKEN", "HUGGINGFACE_HUB_TOKEN", "HUGGINGFACE_TOKEN"];

/// One model artifact (ONNX graph, vocabulary, config file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    File(PathBuf),
    Hub(HubFile),
}

/// A file inside a HuggingFace model repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubFile {
    pub repo_id: String,
    pub filename: String,
    /// Branch, tag or commit; `main` when unset
    pub revision: Option<String>,
}

impl ModelSource {
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        ModelSource::File(path.into())
    }

    pub fn from_hf(repo_id: impl Into<String>, filename: impl Into<String>) -> Self {
        ModelSource::Hub(HubFile {
            repo_id: repo_id.into(),
            filename: filename.into(),
            revision: None,
        })
    }

    /// Pin a Hub source to a revision. No effect on local files.
    pub fn with_revision(self, revision: impl Into<String>) -> Self {
        match self {
            ModelSource::Hub(file) => ModelSource::Hub(HubFile {
                revision: Some(revision.into()),
                ..file
            }),
            local => local,
        }
    }

    /// Local path of the artifact, downloading it into the HF cache first
    /// when it comes from the Hub.
    pub fn resolve(&self) -> Result<PathBuf, ModelSourceError> {
        match self {
            ModelSource::File(path) if path.is_file() => Ok(path.clone()),
            ModelSource::File(path) => Err(ModelSourceError::MissingLocalFile(path.clone())),
            ModelSource::Hub(file) => {
                if file.repo_id.is_empty() || file.filename.is_empty() {
                    return Err(ModelSourceError::Incomplete(self.to_string()));
                }
                download(file)
            }
        }
    }

    pub fn local_path(&self) -> Option<&Path> {
        match self {
            ModelSource::File(path) => Some(path.as_path()),
            ModelSource::Hub(_) => None,
        }
    }

    pub fn repo_id(&self) -> Option<&str> {
        match self {
            ModelSource::Hub(file) => Some(file.repo_id.as_str()),
            ModelSource::File(_) => None,
        }
    }

    pub fn filename(&self) -> Option<&str> {
        match self {
            ModelSource::Hub(file) => Some(file.filename.as_str()),
            ModelSource::File(_) => None,
        }
    }
}

impl fmt::Display for ModelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelSource::File(path) => write!(f, "{}", path.display()),
            ModelSource::Hub(file) => {
                write!(f, "hf://{}", file.repo_id)?;
                if let Some(revision) = &file.revision {
                    write!(f, "@{revision}")?;
                }
                write!(f, "/{}", file.filename)
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ModelSourceError {
    #[error("Model file not found: {0}")]
    MissingLocalFile(PathBuf),

    #[error("Cannot fetch {0}: HuggingFace support needs the `model-hf` feature")]
    HubDisabled(String),

    #[error("Incomplete HuggingFace location '{0}': repo id and filename are required")]
    Incomplete(String),

    #[error("Failed to download {file}: {reason}")]
    Download { file: String, reason: String },
}

#[cfg(feature = "model-hf")]
fn download(file: &HubFile) -> Result<PathBuf, ModelSourceError> {
    use hf_hub::api::sync::ApiBuilder;
    use hf_hub::{Cache, Repo, RepoType};

    let failed = |reason: String| ModelSourceError::Download {
        file: ModelSource::Hub(file.clone()).to_string(),
        reason,
    };

    let mut builder = ApiBuilder::from_cache(Cache::from_env());
    if let Ok(endpoint) = std::env::var("HF_ENDPOINT") {
        builder = builder.with_endpoint(endpoint);
    }
    let token = HF_TOKEN_VARS
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|value| !value.is_empty()));
    if token.is_some() {
        builder = builder.with_token(token);
    }
    let api = builder.build().map_err(|err| failed(err.to_string()))?;

    let revision = file.revision.as_deref().unwrap_or("main");
    log::debug!(
        "Fetching {} from {}@{} (cached after the first run)",
        file.filename,
        file.repo_id,
        revision
    );
    api.repo(Repo::with_revision(
        file.repo_id.clone(),
        RepoType::Model,
        revision.to_string(),
    ))
    .get(&file.filename)
    .map_err(|err| failed(err.to_string()))
}

#[cfg(not(feature = "model-hf"))]
fn download(file: &HubFile) -> Result<PathBuf, ModelSourceError> {
    Err(ModelSourceError::HubDisabled(
        ModelSource::Hub(file.clone()).to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_file_resolves_to_itself() {
        let tmp = tempfile::tempdir().unwrap();
        let vocab = tmp.path().join("vocab.json");
        std::fs::write(&vocab, "{}").unwrap();

        let source = ModelSource::from_file(&vocab);
        assert_eq!(source.resolve().unwrap(), vocab);
        assert_eq!(source.local_path(), Some(vocab.as_path()));
        assert_eq!(source.repo_id(), None);
    }

    #[test]
    fn missing_local_file_is_reported_with_path() {
        let source = ModelSource::from_file("/nonexistent/mms/model.onnx");
        match source.resolve().unwrap_err() {
            ModelSourceError::MissingLocalFile(path) => {
                assert_eq!(path, PathBuf::from("/nonexistent/mms/model.onnx"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn directory_is_not_a_model_file() {
        let tmp = tempfile::tempdir().unwrap();
        let err = ModelSource::from_file(tmp.path()).resolve().unwrap_err();
        assert!(matches!(err, ModelSourceError::MissingLocalFile(_)));
    }

    #[test]
    fn hub_source_exposes_repo_and_filename() {
        let source = ModelSource::from_hf("facebook/mms-tts-tgl", "vocab.json");
        assert_eq!(source.repo_id(), Some("facebook/mms-tts-tgl"));
        assert_eq!(source.filename(), Some("vocab.json"));
        assert_eq!(source.local_path(), None);
    }

    #[test]
    fn display_shows_revision_only_when_pinned() {
        let source = ModelSource::from_hf("org/model", "onnx/model.onnx");
        assert_eq!(source.to_string(), "hf://org/model/onnx/model.onnx");
        assert_eq!(
            source.with_revision("v2").to_string(),
            "hf://org/model@v2/onnx/model.onnx"
        );
        assert_eq!(
            ModelSource::from_file("/tmp/model.onnx")
                .with_revision("v2")
                .to_string(),
            "/tmp/model.onnx"
        );
    }

    #[test]
    fn incomplete_hub_location_is_rejected_before_download() {
        for source in [
            ModelSource::from_hf("", "vocab.json"),
            ModelSource::from_hf("facebook/mms-tts-tgl", ""),
        ] {
            let err = source.resolve().unwrap_err();
            assert!(matches!(err, ModelSourceError::Incomplete(_)), "{err}");
        }
    }

    #[test]
    #[cfg(not(feature = "model-hf"))]
    fn hub_requires_feature() {
        let err = ModelSource::from_hf("org/model", "model.onnx")
            .resolve()
            .unwrap_err();
        assert!(matches!(err, ModelSourceError::HubDisabled(_)));
    }
}
