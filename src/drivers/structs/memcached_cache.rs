use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Memcached-backed cache driver over an established client.
///
/// Expiration is delegated to the engine, so a lapsed key is reported as not
/// found rather than expired. Sub-second lifetimes round up to one second,
/// keeping every positive lifetime an expiring one.
#[derive(Clone)]
pub struct MemcachedCache {
    pub(crate) client: Arc<Mutex<memcache::Client>>,
}

impl fmt::Debug for MemcachedCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemcachedCache")
            .field("client", &"<memcache::Client>")
            .finish()
    }
}
