use crate::cache::errors::CacheError;
use crate::cache::structs::cache_entry::CacheEntry;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::drivers::structs::file_cache::{FileCache, FileContent};
use async_trait::async_trait;
use log::debug;
use sha1::{Digest, Sha1};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

const LOG_PREFIX: &str = "[File]";
const CACHE_SUFFIX: &str = ".cache";

impl FileCache {
    /// Builds a driver storing entries under `directory`, which must already
    /// exist.
    pub fn new(directory: &Path) -> FileCache {
        FileCache {
            directory: directory.to_path_buf(),
        }
    }

    pub(crate) fn cache_file(&self, key: &str) -> PathBuf {
        let mut hasher = Sha1::new();
        hasher.update(key.as_bytes());
        let digest = hex::encode(hasher.finalize());
        self.directory.join(format!("{}{}", digest, CACHE_SUFFIX))
    }

    async fn read(&self, key: &str) -> Result<String, CacheError> {
        let path = self.cache_file(key);
        let raw = match tokio::fs::read(&path).await {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                return Err(CacheError::KeyNotFound(key.to_string()));
            }
            Err(error) => {
                return Err(CacheError::OperationError(format!("Unable to open cache file: {}", error)));
            }
        };
        let content: FileContent = serde_json::from_slice(&raw)
            .map_err(|error| CacheError::SerializationError(format!("Invalid cache file content: {}", error)))?;
        let entry = CacheEntry::from_timestamp(&content.data, content.duration);
        if entry.is_expired() {
            let _ = tokio::fs::remove_file(&path).await;
            return Err(CacheError::KeyExpired(key.to_string()));
        }
        Ok(entry.value)
    }
}

#[async_trait]
impl CacheBackend for FileCache {
    async fn contains(&self, key: &str) -> bool {
        self.read(key).await.is_ok()
    }

    async fn fetch(&self, key: &str) -> Result<String, CacheError> {
        self.read(key).await
    }

    async fn fetch_multi(&self, keys: &[&str]) -> HashMap<String, String> {
        let mut values = HashMap::new();
        for key in keys {
            if let Ok(value) = self.read(key).await {
                values.insert(key.to_string(), value);
            }
        }
        values
    }

    async fn save(&self, key: &str, value: &str, lifetime: Option<Duration>) -> Result<(), CacheError> {
        let entry = CacheEntry::new(value, lifetime);
        let content = FileContent {
            duration: entry.timestamp(),
            data: entry.value,
        };
        let raw = serde_json::to_vec(&content)
            .map_err(|error| CacheError::SerializationError(format!("Unable to encode cache content: {}", error)))?;
        tokio::fs::write(self.cache_file(key), raw)
            .await
            .map_err(|error| CacheError::OperationError(format!("Unable to save cache file: {}", error)))?;
        debug!("{} Saved key {}", LOG_PREFIX, key);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        match tokio::fs::remove_file(self.cache_file(key)).await {
            Ok(()) => {
                debug!("{} Deleted key {}", LOG_PREFIX, key);
                Ok(())
            }
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(CacheError::OperationError(format!("Unable to delete cache file: {}", error))),
        }
    }

    async fn flush(&self) -> Result<(), CacheError> {
        let mut entries = tokio::fs::read_dir(&self.directory)
            .await
            .map_err(|error| CacheError::OperationError(format!("Unable to flush cache directory: {}", error)))?;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|error| CacheError::OperationError(format!("Unable to flush cache directory: {}", error)))?
        {
            // Only the driver's own namespace; foreign files stay untouched.
            if entry.file_name().to_string_lossy().ends_with(CACHE_SUFFIX) {
                tokio::fs::remove_file(entry.path())
                    .await
                    .map_err(|error| CacheError::OperationError(format!("Unable to delete cache file: {}", error)))?;
            }
        }
        debug!("{} Flushed directory {}", LOG_PREFIX, self.directory.display());
        Ok(())
    }
}
