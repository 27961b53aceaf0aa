//! Whole-document JSON storage on the local filesystem
//!
//! Reads return `None` when the document does not exist yet. Writes create the
//! parent directory on demand, serialize to a sibling temp file and rename it
//! over the target, so readers never observe a half-written document.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON document {}: {source}", .path.display())]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize document for {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A single JSON document at a fixed path
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the document, `None` if it does not exist
    pub async fn read<T: DeserializeOwned>(&self) -> Result<Option<T>, StorageError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Document {} not found, treating as empty", self.path.display());
                return Ok(None);
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| StorageError::Deserialize {
                path: self.path.clone(),
                source,
            })
    }

    /// Replace the document with `value`
    pub async fn write<T: Serialize + ?Sized>(&self, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_vec_pretty(value).map_err(|source| StorageError::Serialize {
            path: self.path.clone(),
            source,
        })?;

        self.ensure_parent_dir().await?;

        let tmp_path = self.temp_path();
        if let Err(source) = tokio::fs::write(&tmp_path, &json).await {
            return Err(StorageError::Io {
                path: tmp_path,
                source,
            });
        }

        if let Err(source) = tokio::fs::rename(&tmp_path, &self.path).await {
            // Best effort, the original error is what matters
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(StorageError::Io {
                path: self.path.clone(),
                source,
            });
        }

        debug!("Wrote {} bytes to {}", json.len(), self.path.display());

        Ok(())
    }

    async fn ensure_parent_dir(&self) -> Result<(), StorageError> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => tokio::fs::create_dir_all(dir)
                .await
                .map_err(|source| StorageError::Io {
                    path: dir.to_path_buf(),
                    source,
                }),
            _ => Ok(()),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", file_name, Uuid::new_v4().simple()))
    }
}
