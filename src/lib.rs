//! # Cachelayer
//!
//! A multi-backend caching library with lazy TTL expiration and chained fallback.
//!
//! ## Overview
//!
//! Cachelayer exposes one asynchronous contract,
//! [`CacheBackend`](cache::traits::cache_backend::CacheBackend), and ships several
//! interchangeable drivers behind it: an in-process concurrent map, a file-per-entry
//! store, Redis, Memcached, SQLite, and a chain composite that stacks any of the
//! above into a fallback hierarchy.
//!
//! ## Features
//!
//! - **Uniform contract**: contains / fetch / fetch_multi / save / delete / flush
//!   across every backend
//! - **Lazy expiration**: entries carry an absolute unix-second expiry and are
//!   purged when a read finds them lapsed, never by a background task
//! - **Chained fallback**: ordered drivers where the first hit wins on reads,
//!   while writes fan out to every driver and stop at the first failure
//! - **Caller-owned resources**: the network and database drivers wrap
//!   connections the caller established and keep no global state
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cachelayer::cache::traits::cache_backend::CacheBackend;
//! use cachelayer::drivers::structs::memory_cache::MemoryCache;
//! use std::time::Duration;
//!
//! let cache = MemoryCache::new();
//! cache.save("session", "opaque-blob", Some(Duration::from_secs(60))).await?;
//! let value = cache.fetch("session").await?;
//! ```
//!
//! ## Modules
//!
//! - [`cache`] - The backend contract: trait, entry model, and error types
//! - [`drivers`] - The shipped backends and the chain composite

/// Cache contract module with the backend trait, entry model and errors.
///
/// Defines the `CacheBackend` trait every driver implements, the `CacheEntry`
/// expiration model shared by the storing drivers, and the `CacheError` type
/// returned by every fallible operation.
pub mod cache;

/// Cache driver implementations.
///
/// Contains the in-memory, file, Redis, Memcached and SQLite backends plus the
/// `ChainCache` composite for stacked fallback setups.
pub mod drivers;
