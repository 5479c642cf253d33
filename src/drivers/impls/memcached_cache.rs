use crate::cache::errors::CacheError;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::drivers::structs::memcached_cache::MemcachedCache;
use async_trait::async_trait;
use log::{debug, info};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

const LOG_PREFIX: &str = "[Memcached]";

impl MemcachedCache {
    /// Builds a driver over a client the caller established and owns.
    pub fn new(client: memcache::Client) -> MemcachedCache {
        MemcachedCache {
            client: Arc::new(Mutex::new(client)),
        }
    }

    /// Convenience constructor connecting to `url`
    /// (`memcache://host:port` form).
    pub fn connect(url: &str) -> Result<MemcachedCache, CacheError> {
        let client = memcache::connect(url)
            .map_err(|e| CacheError::ConnectionError(format!("Failed to connect to Memcached: {}", e)))?;
        info!("{} Connected to {}", LOG_PREFIX, url);
        Ok(MemcachedCache {
            client: Arc::new(Mutex::new(client)),
        })
    }

    /// Queries the server version to check the connection is alive.
    pub fn ping(&self) -> Result<(), CacheError> {
        let client = self.client.lock();
        client.version().map_err(CacheError::MemcacheError)?;
        Ok(())
    }
}

#[async_trait]
impl CacheBackend for MemcachedCache {
    async fn contains(&self, key: &str) -> bool {
        let client = self.client.lock();
        matches!(client.get::<String>(key), Ok(Some(_)))
    }

    async fn fetch(&self, key: &str) -> Result<String, CacheError> {
        let client = self.client.lock();
        match client.get::<String>(key) {
            Ok(Some(value)) => Ok(value),
            Ok(None) => Err(CacheError::KeyNotFound(key.to_string())),
            Err(error) => Err(CacheError::MemcacheError(error)),
        }
    }

    async fn fetch_multi(&self, keys: &[&str]) -> HashMap<String, String> {
        if keys.is_empty() {
            return HashMap::new();
        }
        let client = self.client.lock();
        client.gets::<String>(keys).unwrap_or_default()
    }

    async fn save(&self, key: &str, value: &str, lifetime: Option<Duration>) -> Result<(), CacheError> {
        let client = self.client.lock();
        // The protocol reads an exptime of 0 as "never expires", so positive
        // lifetimes round to at least one second and saturate on overflow.
        let expiration = match lifetime {
            Some(lifetime) if !lifetime.is_zero() => {
                u32::try_from(lifetime.as_secs().max(1)).unwrap_or(u32::MAX)
            }
            _ => 0,
        };
        client
            .set(key, value, expiration)
            .map_err(CacheError::MemcacheError)?;
        debug!("{} Saved key {} ttl={}", LOG_PREFIX, key, expiration);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let client = self.client.lock();
        client.delete(key).map_err(CacheError::MemcacheError)?;
        debug!("{} Deleted key {}", LOG_PREFIX, key);
        Ok(())
    }

    async fn flush(&self) -> Result<(), CacheError> {
        let client = self.client.lock();
        client.flush().map_err(CacheError::MemcacheError)?;
        debug!("{} Flushed server", LOG_PREFIX);
        Ok(())
    }
}
