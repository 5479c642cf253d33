//! Cache driver structures.

/// Ordered fallback composite over other drivers.
pub mod chain_cache;

/// File-per-entry cache under a caller-owned directory.
pub mod file_cache;

/// Memcached-backed cache driver.
pub mod memcached_cache;

/// In-process concurrent map cache driver.
pub mod memory_cache;

/// Redis-backed cache driver.
pub mod redis_cache;

/// SQLite-backed cache driver.
pub mod sqlite_cache;
