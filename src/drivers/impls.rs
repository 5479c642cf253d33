//! Implementation blocks for the cache drivers.

/// Fallback reads and fan-out writes for the chain composite.
pub mod chain_cache;

/// File-per-entry cache operations.
pub mod file_cache;

/// Memcached cache operations.
pub mod memcached_cache;

/// In-process map cache operations.
pub mod memory_cache;

/// Redis cache operations.
pub mod redis_cache;

/// SQLite cache operations.
pub mod sqlite_cache;
