//! Cache entry structures.

/// A cached value paired with its optional expiration instant.
pub mod cache_entry;
