use crate::cache::errors::CacheError;
use crate::cache::structs::cache_entry::CacheEntry;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::drivers::structs::memory_cache::MemoryCache;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Duration;

impl MemoryCache {
    pub fn new() -> MemoryCache {
        MemoryCache {
            storage: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    fn read(&self, key: &str) -> Result<String, CacheError> {
        {
            let lock = self.storage.read();
            match lock.get(key) {
                None => return Err(CacheError::KeyNotFound(key.to_string())),
                Some(entry) if !entry.is_expired() => return Ok(entry.value.clone()),
                Some(_) => {}
            }
        }
        let mut lock = self.storage.write();
        // Re-check under the write lock, a concurrent save may have replaced the entry.
        match lock.get(key) {
            None => Err(CacheError::KeyNotFound(key.to_string())),
            Some(entry) if !entry.is_expired() => Ok(entry.value.clone()),
            Some(_) => {
                lock.remove(key);
                Err(CacheError::KeyExpired(key.to_string()))
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn insert_expired(&self, key: &str, value: &str) {
        let mut lock = self.storage.write();
        lock.insert(
            key.to_string(),
            CacheEntry {
                value: value.to_string(),
                expires_at: Some(chrono::Utc::now().timestamp() - 60),
            },
        );
    }
}

#[async_trait]
impl CacheBackend for MemoryCache {
    async fn contains(&self, key: &str) -> bool {
        self.read(key).is_ok()
    }

    async fn fetch(&self, key: &str) -> Result<String, CacheError> {
        self.read(key)
    }

    async fn fetch_multi(&self, keys: &[&str]) -> HashMap<String, String> {
        let mut values = HashMap::new();
        for key in keys {
            if let Ok(value) = self.read(key) {
                values.insert(key.to_string(), value);
            }
        }
        values
    }

    async fn save(&self, key: &str, value: &str, lifetime: Option<Duration>) -> Result<(), CacheError> {
        let entry = CacheEntry::new(value, lifetime);
        let mut lock = self.storage.write();
        lock.insert(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut lock = self.storage.write();
        lock.remove(key);
        Ok(())
    }

    async fn flush(&self) -> Result<(), CacheError> {
        let mut lock = self.storage.write();
        *lock = BTreeMap::new();
        Ok(())
    }
}
