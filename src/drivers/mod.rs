//! Cache drivers implementing the backend contract.
//!
//! # Shipped drivers
//!
//! - **MemoryCache**: concurrent in-process map, the reference backend
//! - **FileCache**: one JSON document per entry under a caller-owned directory
//! - **RedisCache**: adapter over an established Redis connection
//! - **MemcachedCache**: adapter over an established Memcached client
//! - **SqliteCache**: adapter over an SQLite pool and a caller-named table
//! - **ChainCache**: ordered composite falling back across other drivers
//!
//! The network and database drivers wrap resources the caller constructed and
//! remains responsible for. None of the drivers spawn background work; expired
//! entries are dropped by the read that discovers them.

/// Implementation blocks for the cache drivers.
pub mod impls;

/// Data structures for the cache drivers.
pub mod structs;
