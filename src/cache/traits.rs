//! Cache backend trait definitions.

/// The operations every cache backend implements.
pub mod cache_backend;
