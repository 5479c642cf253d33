mod common;

use cachelayer::cache::errors::CacheError;
use cachelayer::cache::traits::cache_backend::CacheBackend;
use cachelayer::drivers::structs::sqlite_cache::SqliteCache;
use sqlx::Row;
use std::time::Duration;
use tempfile::TempDir;

#[tokio::test]
async fn test_save_fetch_delete_lifecycle() {
    let cache = common::create_sqlite_cache("cache").await;

    cache.save("token", "payload", None).await.unwrap();
    assert!(cache.contains("token").await);
    assert_eq!(cache.fetch("token").await.unwrap(), "payload");

    cache.delete("token").await.unwrap();
    assert!(!cache.contains("token").await);
    cache.delete("token").await.unwrap();
}

#[tokio::test]
async fn test_rows_store_key_value_and_lifetime() {
    let pool = common::create_sqlite_pool().await;
    let cache = SqliteCache::new(pool.clone(), "cache").await.unwrap();

    cache.save("eternal", "value", None).await.unwrap();
    cache.save("bounded", "value", Some(Duration::from_secs(300))).await.unwrap();

    let row = sqlx::query("SELECT `lifetime` FROM `cache` WHERE `key` = ?")
        .bind("eternal")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(row.get::<i64, _>("lifetime"), 0, "eternal entries store a 0 lifetime");

    let row = sqlx::query("SELECT `lifetime` FROM `cache` WHERE `key` = ?")
        .bind("bounded")
        .fetch_one(&pool)
        .await
        .unwrap();
    let instant = row.get::<i64, _>("lifetime");
    let now = chrono::Utc::now().timestamp();
    assert!(instant >= now + 298, "instant should be ~300s ahead");
    assert!(instant <= now + 301, "instant should be ~300s ahead");
}

#[tokio::test]
async fn test_lapsed_row_reports_expired_and_is_deleted() {
    let pool = common::create_sqlite_pool().await;
    let cache = SqliteCache::new(pool.clone(), "cache").await.unwrap();

    cache.save("stale", "value", Some(Duration::from_secs(3600))).await.unwrap();
    sqlx::query("UPDATE `cache` SET `lifetime` = 1 WHERE `key` = ?")
        .bind("stale")
        .execute(&pool)
        .await
        .unwrap();

    match cache.fetch("stale").await {
        Err(CacheError::KeyExpired(key)) => assert_eq!(key, "stale"),
        other => panic!("expected KeyExpired, got {:?}", other),
    }

    let row = sqlx::query("SELECT COUNT(*) AS total FROM `cache`")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(row.get::<i64, _>("total"), 0, "the read should delete the lapsed row");
}

#[tokio::test]
async fn test_flush_only_clears_the_drivers_table() {
    let pool = common::create_sqlite_pool().await;
    let first = SqliteCache::new(pool.clone(), "cache_a").await.unwrap();
    let second = SqliteCache::new(pool.clone(), "cache_b").await.unwrap();

    first.save("key", "a", None).await.unwrap();
    second.save("key", "b", None).await.unwrap();

    first.flush().await.unwrap();

    assert!(!first.contains("key").await);
    assert_eq!(second.fetch("key").await.unwrap(), "b");
}

#[tokio::test]
async fn test_fetch_multi_returns_only_live_rows() {
    let cache = common::create_sqlite_cache("cache").await;
    common::seed(&cache, &[("alpha", "1"), ("beta", "2")]).await;

    let values = cache.fetch_multi(&["alpha", "beta", "ghost"]).await;

    assert_eq!(values.len(), 2);
    assert_eq!(values.get("alpha").map(String::as_str), Some("1"));
    assert_eq!(values.get("beta").map(String::as_str), Some("2"));
}

#[tokio::test]
async fn test_connect_creates_the_database_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cache.db");
    let dsl = format!("sqlite://{}", path.display());

    let cache = SqliteCache::connect(&dsl, "cache").await.unwrap();
    cache.save("key", "value", None).await.unwrap();

    assert!(path.exists(), "connect should create the database file");
    assert_eq!(cache.fetch("key").await.unwrap(), "value");
}

#[tokio::test]
async fn test_entries_survive_a_new_pool_on_the_same_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cache.db");
    let dsl = format!("sqlite://{}", path.display());

    {
        let cache = SqliteCache::connect(&dsl, "cache").await.unwrap();
        cache.save("key", "value", None).await.unwrap();
    }

    let cache = SqliteCache::connect(&dsl, "cache").await.unwrap();
    assert_eq!(cache.fetch("key").await.unwrap(), "value");
}
