use crate::cache::errors::CacheError;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::drivers::structs::redis_cache::RedisCache;
use async_trait::async_trait;
use log::{debug, info};
use redis::AsyncCommands;
use redis::aio::MultiplexedConnection;
use std::collections::HashMap;
use std::time::Duration;

const LOG_PREFIX: &str = "[Redis]";

impl RedisCache {
    /// Builds a driver over a connection the caller established and owns.
    pub fn new(connection: MultiplexedConnection) -> RedisCache {
        RedisCache { connection }
    }

    /// Convenience constructor opening a multiplexed connection to `url`.
    pub async fn connect(url: &str) -> Result<RedisCache, CacheError> {
        let client = redis::Client::open(url)
            .map_err(|e| CacheError::ConnectionError(format!("Failed to create Redis client: {}", e)))?;
        let connection = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e)))?;
        info!("{} Connected to {}", LOG_PREFIX, url);
        Ok(RedisCache { connection })
    }

    /// Round-trips a PING to check the connection is alive.
    pub async fn ping(&self) -> Result<(), CacheError> {
        let mut conn = self.connection.clone();
        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map_err(CacheError::RedisError)?;
        Ok(())
    }
}

#[async_trait]
impl CacheBackend for RedisCache {
    async fn contains(&self, key: &str) -> bool {
        let mut conn = self.connection.clone();
        conn.exists::<_, bool>(key).await.unwrap_or(false)
    }

    async fn fetch(&self, key: &str) -> Result<String, CacheError> {
        let mut conn = self.connection.clone();
        let value = conn
            .get::<_, Option<String>>(key)
            .await
            .map_err(CacheError::RedisError)?;
        value.ok_or_else(|| CacheError::KeyNotFound(key.to_string()))
    }

    async fn fetch_multi(&self, keys: &[&str]) -> HashMap<String, String> {
        if keys.is_empty() {
            return HashMap::new();
        }
        let mut conn = self.connection.clone();
        let mut cmd = redis::cmd("MGET");
        for key in keys {
            cmd.arg(*key);
        }
        let values: Vec<Option<String>> = match cmd.query_async(&mut conn).await {
            Ok(values) => values,
            Err(_) => return HashMap::new(),
        };
        keys.iter()
            .zip(values)
            .filter_map(|(key, value)| value.map(|value| (key.to_string(), value)))
            .collect()
    }

    async fn save(&self, key: &str, value: &str, lifetime: Option<Duration>) -> Result<(), CacheError> {
        let mut conn = self.connection.clone();
        // Positive lifetimes stay positive after whole-second truncation, only
        // a zero or absent lifetime takes the eternal branch.
        let ttl_secs = match lifetime {
            Some(lifetime) if !lifetime.is_zero() => lifetime.as_secs().max(1),
            _ => 0,
        };
        if ttl_secs > 0 {
            redis::cmd("SETEX")
                .arg(key)
                .arg(ttl_secs)
                .arg(value)
                .query_async::<()>(&mut conn)
                .await
                .map_err(CacheError::RedisError)?;
        } else {
            conn.set::<_, _, ()>(key, value)
                .await
                .map_err(CacheError::RedisError)?;
        }
        debug!("{} Saved key {} ttl={}", LOG_PREFIX, key, ttl_secs);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.connection.clone();
        conn.del::<_, ()>(key)
            .await
            .map_err(CacheError::RedisError)?;
        debug!("{} Deleted key {}", LOG_PREFIX, key);
        Ok(())
    }

    async fn flush(&self) -> Result<(), CacheError> {
        let mut conn = self.connection.clone();
        redis::cmd("FLUSHDB")
            .query_async::<()>(&mut conn)
            .await
            .map_err(CacheError::RedisError)?;
        debug!("{} Flushed database", LOG_PREFIX);
        Ok(())
    }
}
