//! JSON file storage backend.

use async_trait::async_trait;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use crate::{KeyValueStore, Result, StoreError, validate_key};

const EXTENSION: &str = "json";

/// File storage configuration.
#[derive(Debug, Clone)]
pub struct FileStoreConfig {
    /// Directory holding one file per key.
    pub base_path: PathBuf,
    /// Create the directory if it doesn't exist.
    pub create_directories: bool,
    /// Pretty-print stored JSON.
    pub pretty: bool,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("./stowage"),
            create_directories: true,
            pretty: true,
        }
    }
}

impl FileStoreConfig {
    /// Create configuration with a base path.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            ..Default::default()
        }
    }

    /// Write compact JSON instead of pretty-printed.
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

/// Stores each key as `<base_path>/<key>.json`.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the target, so a reader never sees a half-written value.
#[derive(Debug, Clone)]
pub struct FileStore {
    config: FileStoreConfig,
}

impl FileStore {
    /// Create a new file store.
    pub async fn new(config: FileStoreConfig) -> Result<Self> {
        if config.create_directories {
            fs::create_dir_all(&config.base_path).await.map_err(|e| {
                StoreError::Config(format!(
                    "Failed to create storage directory {:?}: {}",
                    config.base_path, e
                ))
            })?;
        } else if !fs::try_exists(&config.base_path).await? {
            return Err(StoreError::Config(format!(
                "Storage directory {:?} does not exist",
                config.base_path
            )));
        }

        info!(path = ?config.base_path, "Initialized file store");

        Ok(Self { config })
    }

    /// Create with just a base path (convenience method).
    pub async fn with_path(path: impl Into<PathBuf>) -> Result<Self> {
        Self::new(FileStoreConfig::new(path)).await
    }

    /// Directory holding the stored files.
    pub fn base_path(&self) -> &Path {
        &self.config.base_path
    }

    /// Get the full filesystem path for a key.
    fn full_path(&self, key: &str) -> PathBuf {
        self.config.base_path.join(format!("{}.{}", key, EXTENSION))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        self.config
            .base_path
            .join(format!(".{}.{}.tmp", key, uuid::Uuid::new_v4()))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get_item(&self, key: &str) -> Result<Option<Value>> {
        validate_key(key)?;
        let path = self.full_path(key);

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(key, "File store miss");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let value = serde_json::from_slice(&bytes).map_err(|e| StoreError::Corrupt {
            key: key.to_string(),
            reason: e.to_string(),
        })?;

        debug!(key, path = ?path, "File store read");
        Ok(Some(value))
    }

    async fn set_item(&self, key: &str, value: Value) -> Result<()> {
        validate_key(key)?;

        let bytes = if self.config.pretty {
            serde_json::to_vec_pretty(&value)?
        } else {
            serde_json::to_vec(&value)?
        };

        let path = self.full_path(key);
        let temp = self.temp_path(key);

        let written = match fs::write(&temp, &bytes).await {
            Ok(()) => fs::rename(&temp, &path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            let _ = fs::remove_file(&temp).await;
            return Err(e.into());
        }

        debug!(key, path = ?path, size = bytes.len(), "File store write");
        Ok(())
    }
}
