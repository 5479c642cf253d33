use crate::cache::errors::CacheError;
use crate::cache::structs::cache_entry::CacheEntry;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::drivers::structs::sqlite_cache::SqliteCache;
use async_trait::async_trait;
use log::{debug, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Row, Sqlite};
use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

const LOG_PREFIX: &str = "[SQLite]";

impl SqliteCache {
    /// Builds a driver over `pool`, creating `table` when it does not exist.
    pub async fn new(pool: Pool<Sqlite>, table: &str) -> Result<SqliteCache, CacheError> {
        let query = format!(
            "CREATE TABLE IF NOT EXISTS `{}` (`key` TEXT PRIMARY KEY NOT NULL, `value` TEXT NOT NULL, `lifetime` INTEGER NOT NULL DEFAULT 0)",
            table
        );
        sqlx::query(&query)
            .execute(&pool)
            .await
            .map_err(CacheError::DatabaseError)?;
        debug!("{} Using table {}", LOG_PREFIX, table);
        Ok(SqliteCache {
            pool,
            table: table.to_string(),
        })
    }

    /// Convenience constructor opening a pool on `dsl`
    /// (`sqlite://path` or `sqlite::memory:` form), creating the database
    /// file when missing.
    pub async fn connect(dsl: &str, table: &str) -> Result<SqliteCache, CacheError> {
        let options = SqliteConnectOptions::from_str(dsl).map_err(CacheError::DatabaseError)?;
        let pool = SqlitePoolOptions::new()
            .connect_with(options.create_if_missing(true))
            .await
            .map_err(CacheError::DatabaseError)?;
        info!("{} Connected to {}", LOG_PREFIX, dsl);
        SqliteCache::new(pool, table).await
    }
}

#[async_trait]
impl CacheBackend for SqliteCache {
    async fn contains(&self, key: &str) -> bool {
        self.fetch(key).await.is_ok()
    }

    async fn fetch(&self, key: &str) -> Result<String, CacheError> {
        let query = format!("SELECT `value`, `lifetime` FROM `{}` WHERE `key` = ?", self.table);
        let row = sqlx::query(&query)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(CacheError::DatabaseError)?;
        let Some(row) = row else {
            return Err(CacheError::KeyNotFound(key.to_string()));
        };
        let value: String = row.get("value");
        let lifetime: i64 = row.get("lifetime");
        let entry = CacheEntry::from_timestamp(&value, lifetime);
        if entry.is_expired() {
            // Best-effort purge, the lapsed read reports KeyExpired either way.
            let _ = self.delete(key).await;
            return Err(CacheError::KeyExpired(key.to_string()));
        }
        Ok(entry.value)
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
        let entry = CacheEntry::new(value, lifetime);
        let query = format!(
            "INSERT OR REPLACE INTO `{}` (`key`, `value`, `lifetime`) VALUES (?, ?, ?)",
            self.table
        );
        sqlx::query(&query)
            .bind(key)
            .bind(value)
            .bind(entry.timestamp())
            .execute(&self.pool)
            .await
            .map_err(CacheError::DatabaseError)?;
        debug!("{} Saved key {}", LOG_PREFIX, key);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let query = format!("DELETE FROM `{}` WHERE `key` = ?", self.table);
        sqlx::query(&query)
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(CacheError::DatabaseError)?;
        debug!("{} Deleted key {}", LOG_PREFIX, key);
        Ok(())
    }

    async fn flush(&self) -> Result<(), CacheError> {
        let query = format!("DELETE FROM `{}`", self.table);
        sqlx::query(&query)
            .execute(&self.pool)
            .await
            .map_err(CacheError::DatabaseError)?;
        debug!("{} Flushed table {}", LOG_PREFIX, self.table);
        Ok(())
    }
}
