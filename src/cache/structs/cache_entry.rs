/// A cached value together with the instant it stops being served.
///
/// `expires_at` is an absolute unix-second timestamp; `None` means the entry
/// never expires. Storing drivers keep this model (directly or through their
/// own on-disk representation) and check it on every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub value: String,
    pub expires_at: Option<i64>,
}
