//! Local filesystem storage for uploaded files.
//!
//! Files are addressed by a storage key relative to a base directory,
//! e.g. `photos/<user-id>_<filename>`. Keys are validated before any
//! filesystem access so request-supplied filenames cannot escape the
//! base directory.

use std::fmt;
use std::path::PathBuf;
use tokio::fs;

#[derive(Debug)]
pub enum StorageError {
    /// The key is malformed or would resolve outside the base
    /// directory; nothing was written.
    InvalidKey(String),
    IoError(std::io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey(key) => write!(f, "invalid storage key {key:?}"),
            Self::IoError(e) => write!(f, "storage i/o failed: {e}"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        Self::IoError(e)
    }
}

fn key_char_allowed(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '/' | '.')
}

/// Local filesystem file storage.
///
/// Cheaply cloneable; shared through application state.
#[derive(Debug, Clone)]
pub struct LocalFileStorage {
    base_dir: PathBuf,
}

impl LocalFileStorage {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// The on-disk path recorded for a stored key.
    pub fn file_path(&self, key: &str) -> String {
        self.base_dir.join(key).to_string_lossy().into_owned()
    }

    /// Writes `content` under `key`, creating parent directories as
    /// needed. Returns the on-disk path that was written.
    pub async fn save(&self, key: &str, content: &[u8]) -> Result<String, StorageError> {
        Self::validate_key(key)?;

        let path = self.base_dir.join(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&path, content).await?;

        Ok(path.to_string_lossy().into_owned())
    }

    /// A key must be a non-empty relative path containing no `..` and
    /// only alphanumerics, `-`, `_`, `.` and `/`.
    fn validate_key(key: &str) -> Result<(), StorageError> {
        let well_formed = !key.is_empty()
            && !key.starts_with('/')
            && !key.contains("..")
            && key.chars().all(key_char_allowed);

        if well_formed {
            Ok(())
        } else {
            Err(StorageError::InvalidKey(key.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_well_formed_keys_accepted() {
        for key in ["photos/logo.png", "photos/abc-123.jpg", "certificates/cert_1.pdf"] {
            assert!(LocalFileStorage::validate_key(key).is_ok(), "{key}");
        }
    }

    #[test]
    fn test_traversal_and_absolute_keys_rejected() {
        for key in ["../../../etc/passwd", "photos/../secret.pdf", "/etc/passwd", ""] {
            assert!(LocalFileStorage::validate_key(key).is_err(), "{key:?}");
        }
    }

    #[test]
    fn test_keys_with_odd_characters_rejected() {
        assert!(LocalFileStorage::validate_key("photos/a b.png").is_err());
        assert!(LocalFileStorage::validate_key("photos/a?.png").is_err());
    }

    #[tokio::test]
    async fn test_save_writes_file_and_creates_directories() {
        let base = std::env::temp_dir().join(format!("alumnet-core-{}", Uuid::new_v4()));
        let storage = LocalFileStorage::new(base.clone());

        let path = storage.save("photos/test.png", b"content").await.unwrap();

        assert_eq!(path, storage.file_path("photos/test.png"));
        let written = tokio::fs::read(&path).await.unwrap();
        assert_eq!(written, b"content");

        tokio::fs::remove_dir_all(&base).await.unwrap();
    }

    #[tokio::test]
    async fn test_save_rejects_traversal_key_without_writing() {
        let base = std::env::temp_dir().join(format!("alumnet-core-{}", Uuid::new_v4()));
        let storage = LocalFileStorage::new(base.clone());

        let result = storage.save("photos/../escape.png", b"content").await;

        assert!(matches!(result, Err(StorageError::InvalidKey(_))));
        assert!(tokio::fs::metadata(&base).await.is_err());
    }
}
