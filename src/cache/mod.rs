//! Cache contract shared by every driver.
//!
//! This module defines the pieces the backends have in common:
//!
//! - `CacheBackend` - the trait with the six cache operations
//! - `CacheEntry` - a value paired with its optional absolute expiration
//! - `CacheError` - the error type every fallible operation returns
//!
//! # Expiration model
//!
//! Entries expire lazily. A save with a positive lifetime records an absolute
//! unix-second instant; a read that finds the instant in the past removes the
//! entry (where the backend supports deletion) and reports it as expired. A
//! lifetime of zero, or no lifetime at all, keeps the entry until it is
//! deleted or the container is flushed. No driver spawns background tasks.
//!
//! # Example
//!
//! ```rust,ignore
//! use cachelayer::cache::traits::cache_backend::CacheBackend;
//! use cachelayer::drivers::structs::memory_cache::MemoryCache;
//!
//! let cache = MemoryCache::new();
//! cache.save("key", "value", None).await?;
//! assert!(cache.contains("key").await);
//! ```

/// Error types for cache operations.
pub mod errors;

/// Implementation blocks for the cache entry model.
pub mod impls;

/// Data structures for cached entries.
pub mod structs;

/// Cache backend trait definitions.
pub mod traits;
