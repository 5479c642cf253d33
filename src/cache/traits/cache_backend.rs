use crate::cache::errors::CacheError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// The contract every cache driver implements.
///
/// Keys are opaque strings, values are opaque strings, and the container
/// behind a driver instance is private to that instance. Read operations on
/// storing drivers purge entries they find expired.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Whether a live entry exists for `key`. Backend failures and expired
    /// entries both answer `false`.
    async fn contains(&self, key: &str) -> bool;

    /// The value stored under `key`, or `KeyNotFound` / `KeyExpired` when
    /// there is nothing live to return. Drivers that delegate expiry to the
    /// engine (Redis, Memcached) only ever report `KeyNotFound`.
    async fn fetch(&self, key: &str) -> Result<String, CacheError>;

    /// Best-effort batch fetch. Keys that are missing, expired or hit a
    /// backend failure are silently absent from the result.
    async fn fetch_multi(&self, keys: &[&str]) -> HashMap<String, String>;

    /// Stores `value` under `key`, replacing any previous entry. A `None` or
    /// zero lifetime keeps the entry until it is deleted or flushed.
    async fn save(&self, key: &str, value: &str, lifetime: Option<Duration>) -> Result<(), CacheError>;

    /// Removes the entry under `key`. Deleting an absent key succeeds.
    async fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Removes every entry in the container behind this instance.
    async fn flush(&self) -> Result<(), CacheError>;
}
