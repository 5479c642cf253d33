use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File-per-entry cache under a caller-owned directory.
///
/// Each entry lives in its own `.cache` file named after the SHA-1 digest of
/// the key, so arbitrary keys stay filesystem-safe. The directory must exist
/// and may hold foreign files; flush only touches the `.cache` namespace.
#[derive(Debug, Clone)]
pub struct FileCache {
    pub(crate) directory: PathBuf,
}

/// On-disk document for a single entry, with 0 marking an eternal lifetime.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct FileContent {
    pub(crate) duration: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub(crate) data: String,
}
