use crate::cache::structs::cache_entry::CacheEntry;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

/// In-process cache over a lock-guarded map.
///
/// Every instance owns its container; independent instances never observe
/// each other's entries. Clones share the container of the instance they
/// were cloned from.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    pub(crate) storage: Arc<RwLock<BTreeMap<String, CacheEntry>>>,
}
