#![allow(dead_code)]
use cachelayer::cache::traits::cache_backend::CacheBackend;
use cachelayer::drivers::structs::file_cache::FileCache;
use cachelayer::drivers::structs::memory_cache::MemoryCache;
use cachelayer::drivers::structs::sqlite_cache::SqliteCache;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use tempfile::TempDir;

pub fn create_memory_cache() -> MemoryCache {
    MemoryCache::new()
}

/// The driver and the directory guard; drop the guard and the entries vanish.
pub fn create_file_cache() -> (FileCache, TempDir) {
    let dir = TempDir::new().expect("temp directory should be created");
    (FileCache::new(dir.path()), dir)
}

/// A single connection keeps every handle on the same in-memory database.
pub async fn create_sqlite_pool() -> Pool<Sqlite> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory SQLite pool should open")
}

pub async fn create_sqlite_cache(table: &str) -> SqliteCache {
    let pool = create_sqlite_pool().await;
    SqliteCache::new(pool, table)
        .await
        .expect("cache table should be created")
}

pub async fn seed(cache: &dyn CacheBackend, pairs: &[(&str, &str)]) {
    for (key, value) in pairs {
        cache
            .save(key, value, None)
            .await
            .expect("seeding a cache entry should succeed");
    }
}
