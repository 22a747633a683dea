//! File-backed storage
//!
//! Persists each document as one file in the application's data
//! directory. Keys are sanitized before being used as file names.

use std::fs;
use std::path::PathBuf;

use crate::shared::errors::{AppError, AppResult};

use super::KeyValueStorage;

/// Durable storage implementation writing one file per key.
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    /// Opens or creates the storage directory in the platform's standard
    /// data location.
    pub fn open() -> AppResult<Self> {
        let proj_dirs = directories::ProjectDirs::from("io", "cinescope", "cinescope")
            .ok_or_else(|| {
                AppError::StorageError("Failed to determine data directory location".to_string())
            })?;

        Self::with_dir(proj_dirs.data_dir().to_path_buf())
    }

    /// Opens or creates storage rooted at an explicit directory.
    pub fn with_dir(data_dir: PathBuf) -> AppResult<Self> {
        fs::create_dir_all(&data_dir).map_err(|e| {
            AppError::StorageError(format!(
                "Failed to create data directory at {}: {}",
                data_dir.display(),
                e
            ))
        })?;

        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", sanitize_key(key)))
    }
}

impl KeyValueStorage for FileStorage {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.file_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            AppError::StorageError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Ok(Some(content))
    }

    fn write(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.file_path(key);
        fs::write(&path, value).map_err(|e| {
            AppError::StorageError(format!("Failed to write {}: {}", path.display(), e))
        })
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.file_path(key);
        if !path.exists() {
            return Ok(());
        }

        fs::remove_file(&path).map_err(|e| {
            AppError::StorageError(format!("Failed to remove {}: {}", path.display(), e))
        })
    }
}

/// Sanitizes a key for use in file paths.
///
/// Converts to lowercase and replaces all characters that are not
/// a-z, 0-9, or hyphen with underscores.
fn sanitize_key(key: &str) -> String {
    key.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
