mod common;

use cachelayer::cache::traits::cache_backend::CacheBackend;
use cachelayer::drivers::structs::chain_cache::ChainCache;
use std::sync::Arc;

#[tokio::test]
async fn test_chain_over_heterogeneous_drivers_fans_out_saves() {
    let memory = Arc::new(common::create_memory_cache());
    let (file, _dir) = common::create_file_cache();
    let file = Arc::new(file);
    let sqlite = Arc::new(common::create_sqlite_cache("cache").await);

    let chain = ChainCache::new(vec![
        memory.clone() as Arc<dyn CacheBackend>,
        file.clone(),
        sqlite.clone(),
    ]);
    chain.save("key", "value", None).await.unwrap();

    assert_eq!(memory.fetch("key").await.unwrap(), "value");
    assert_eq!(file.fetch("key").await.unwrap(), "value");
    assert_eq!(sqlite.fetch("key").await.unwrap(), "value");
}

#[tokio::test]
async fn test_chain_falls_back_to_the_driver_holding_the_key() {
    let memory = Arc::new(common::create_memory_cache());
    let sqlite = Arc::new(common::create_sqlite_cache("cache").await);

    // Seed only the last driver, as if the front tier had been restarted.
    sqlite.save("key", "value", None).await.unwrap();

    let chain = ChainCache::new(vec![
        memory.clone() as Arc<dyn CacheBackend>,
        sqlite.clone(),
    ]);
    assert_eq!(chain.fetch("key").await.unwrap(), "value");

    // The chain read does not backfill earlier drivers.
    assert!(!memory.contains("key").await);
}

#[tokio::test]
async fn test_chain_aggregates_misses_into_one_error() {
    let memory = Arc::new(common::create_memory_cache());
    let sqlite = Arc::new(common::create_sqlite_cache("cache").await);

    let chain = ChainCache::new(vec![
        memory as Arc<dyn CacheBackend>,
        sqlite,
    ]);
    let error = chain.fetch("ghost").await.unwrap_err();

    assert_eq!(
        error.to_string(),
        "Key not found in cache chain. Errors: Key not found: ghost,Key not found: ghost"
    );
}

#[tokio::test]
async fn test_chain_delete_and_flush_reach_every_driver() {
    let memory = Arc::new(common::create_memory_cache());
    let (file, _dir) = common::create_file_cache();
    let file = Arc::new(file);

    let chain = ChainCache::new(vec![
        memory.clone() as Arc<dyn CacheBackend>,
        file.clone(),
    ]);
    chain.save("one", "1", None).await.unwrap();
    chain.save("two", "2", None).await.unwrap();

    chain.delete("one").await.unwrap();
    assert!(!memory.contains("one").await);
    assert!(!file.contains("one").await);

    chain.flush().await.unwrap();
    assert!(!memory.contains("two").await);
    assert!(!file.contains("two").await);
}

#[tokio::test]
async fn test_chain_fetch_multi_collects_keys_from_different_tiers() {
    let memory = Arc::new(common::create_memory_cache());
    let sqlite = Arc::new(common::create_sqlite_cache("cache").await);

    memory.save("hot", "ram", None).await.unwrap();
    sqlite.save("cold", "disk", None).await.unwrap();

    let chain = ChainCache::new(vec![
        memory as Arc<dyn CacheBackend>,
        sqlite,
    ]);
    let values = chain.fetch_multi(&["hot", "cold", "ghost"]).await;

    assert_eq!(values.len(), 2);
    assert_eq!(values.get("hot").map(String::as_str), Some("ram"));
    assert_eq!(values.get("cold").map(String::as_str), Some("disk"));
}

#[tokio::test]
async fn test_chain_contains_finds_keys_in_any_tier() {
    let memory = Arc::new(common::create_memory_cache());
    let sqlite = Arc::new(common::create_sqlite_cache("cache").await);

    sqlite.save("key", "value", None).await.unwrap();

    let chain = ChainCache::new(vec![
        memory as Arc<dyn CacheBackend>,
        sqlite,
    ]);
    assert!(chain.contains("key").await);
    assert!(!chain.contains("ghost").await);
}

#[tokio::test]
async fn test_nested_chains_compose() {
    let inner_memory = Arc::new(common::create_memory_cache());
    let outer_memory = Arc::new(common::create_memory_cache());

    let inner = Arc::new(ChainCache::new(vec![
        inner_memory.clone() as Arc<dyn CacheBackend>,
    ]));
    let outer = ChainCache::new(vec![
        outer_memory.clone() as Arc<dyn CacheBackend>,
        inner,
    ]);

    inner_memory.save("key", "value", None).await.unwrap();
    assert_eq!(outer.fetch("key").await.unwrap(), "value");
}
