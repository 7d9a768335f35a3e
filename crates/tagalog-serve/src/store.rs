//! Generated audio files on disk.
//!
//! Files are addressed by name only and carry no owner: anyone who knows a
//! name can fetch or delete it. Only names of the shape the service itself
//! generates resolve, so a request can never reach other files in the
//! directory or escape it.

use std::io;
use std::path::{Path, PathBuf};
use tagalog_speech::FileNaming;
use tagalog_speech::wav::SERVICE_PREFIX;
use tokio::fs::File;

#[derive(Debug, Clone)]
pub struct AudioStore {
    dir: PathBuf,
}

impl AudioStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Naming strategy for new files: a random token per file.
    pub fn naming(&self) -> FileNaming {
        FileNaming::random()
    }

    /// `temp_audio_<32 lowercase hex>.wav`
    pub fn is_generated_name(name: &str) -> bool {
        name.strip_prefix(SERVICE_PREFIX)
            .and_then(|rest| rest.strip_prefix('_'))
            .and_then(|rest| rest.strip_suffix(".wav"))
            .is_some_and(|token| {
                token.len() == 32
                    && token
                        .chars()
                        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
            })
    }

    /// Path of `name` inside the store, if `name` is a generated name.
    pub fn path_for(&self, name: &str) -> Option<PathBuf> {
        Self::is_generated_name(name).then(|| self.dir.join(name))
    }

    /// Open `name` for reading, or `None` when there is no such file.
    pub async fn open(&self, name: &str) -> io::Result<Option<File>> {
        let Some(path) = self.path_for(name) else {
            return Ok(None);
        };
        match File::open(&path).await {
            Ok(file) => Ok(Some(file)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Delete `name`. Returns `false` when there was nothing to delete.
    pub async fn remove(&self, name: &str) -> io::Result<bool> {
        let Some(path) = self.path_for(name) else {
            return Ok(false);
        };
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;

    const NAME: &str = "temp_audio_0123456789abcdef0123456789abcdef.wav";

    #[test]
    fn generated_names_are_recognised() {
        assert!(AudioStore::is_generated_name(NAME));
        let fresh = AudioStore::new("/tmp").naming().file_name();
        assert!(AudioStore::is_generated_name(&fresh), "{fresh}");
    }

    #[test]
    fn foreign_names_are_rejected() {
        for name in [
            "",
            "temp_audio_.wav",
            "temp_audio_0123456789ABCDEF0123456789ABCDEF.wav",
            "temp_audio_0123456789abcdef0123456789abcdef.mp3",
            "../temp_audio_0123456789abcdef0123456789abcdef.wav",
            "passwd",
            "tagalog_tts_20240309_140507_042.wav",
        ] {
            assert!(!AudioStore::is_generated_name(name), "{name}");
        }
    }

    #[tokio::test]
    async fn open_and_remove_lifecycle() {
        let tmp = tempfile::tempdir().unwrap();
        let store = AudioStore::new(tmp.path());
        std::fs::write(tmp.path().join(NAME), b"RIFF").unwrap();

        let mut file = store.open(NAME).await.unwrap().expect("file exists");
        let mut contents = Vec::new();
        file.read_to_end(&mut contents).await.unwrap();
        assert_eq!(contents, b"RIFF");
        drop(file);

        assert!(store.remove(NAME).await.unwrap());
        assert!(store.open(NAME).await.unwrap().is_none());
        assert!(!store.remove(NAME).await.unwrap());
    }

    #[tokio::test]
    async fn other_files_in_directory_are_unreachable() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("notes.txt"), b"private").unwrap();
        let store = AudioStore::new(tmp.path());

        assert!(store.open("notes.txt").await.unwrap().is_none());
        assert!(!store.remove("notes.txt").await.unwrap());
        assert!(tmp.path().join("notes.txt").exists());
    }
}
