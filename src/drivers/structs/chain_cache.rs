use crate::cache::traits::cache_backend::CacheBackend;
use std::fmt;
use std::sync::Arc;

/// Ordered composite falling back across other drivers.
///
/// Reads walk the drivers in order and stop at the first hit; writes fan out
/// to every driver and stop at the first failure, leaving earlier drivers
/// updated.
#[derive(Clone)]
pub struct ChainCache {
    pub(crate) drivers: Vec<Arc<dyn CacheBackend>>,
}

impl fmt::Debug for ChainCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainCache")
            .field("drivers", &self.drivers.len())
            .finish()
    }
}
