use crate::cache::errors::CacheError;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::drivers::structs::chain_cache::ChainCache;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

impl ChainCache {
    /// Builds a chain over `drivers`, with fallback priority following the
    /// vector order.
    pub fn new(drivers: Vec<Arc<dyn CacheBackend>>) -> ChainCache {
        ChainCache { drivers }
    }
}

#[async_trait]
impl CacheBackend for ChainCache {
    async fn contains(&self, key: &str) -> bool {
        for driver in &self.drivers {
            if driver.contains(key).await {
                return true;
            }
        }
        false
    }

    async fn fetch(&self, key: &str) -> Result<String, CacheError> {
        let mut failures = Vec::with_capacity(self.drivers.len());
        for driver in &self.drivers {
            match driver.fetch(key).await {
                Ok(value) => return Ok(value),
                Err(error) => failures.push(error.to_string()),
            }
        }
        Err(CacheError::ChainNotFound(failures.join(",")))
    }

    async fn fetch_multi(&self, keys: &[&str]) -> HashMap<String, String> {
        let mut values = HashMap::new();
        for key in keys {
            if let Ok(value) = self.fetch(key).await {
                values.insert(key.to_string(), value);
            }
        }
        values
    }

    async fn save(&self, key: &str, value: &str, lifetime: Option<Duration>) -> Result<(), CacheError> {
        for driver in &self.drivers {
            driver.save(key, value, lifetime).await?;
        }
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        for driver in &self.drivers {
            driver.delete(key).await?;
        }
        Ok(())
    }

    async fn flush(&self) -> Result<(), CacheError> {
        for driver in &self.drivers {
            driver.flush().await?;
        }
        Ok(())
    }
}
