use sqlx::{Pool, Sqlite};

/// SQLite-backed cache driver over a caller-owned pool and table.
///
/// Entries are rows of `(key, value, lifetime)` where a lifetime of 0 marks
/// an eternal entry. Several drivers may share one pool as long as they use
/// distinct tables.
#[derive(Debug, Clone)]
pub struct SqliteCache {
    pub(crate) pool: Pool<Sqlite>,
    pub(crate) table: String,
}
