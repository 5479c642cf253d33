//! Implementation blocks for the cache entry model.

/// Lifetime arithmetic and expiration checks for cache entries.
pub mod cache_entry;
