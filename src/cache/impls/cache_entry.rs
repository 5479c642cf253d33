use crate::cache::structs::cache_entry::CacheEntry;
use chrono::Utc;
use std::time::Duration;

impl CacheEntry {
    /// Builds an entry expiring `lifetime` from now. A `None` or zero
    /// lifetime produces an entry that never expires.
    pub fn new(value: &str, lifetime: Option<Duration>) -> CacheEntry {
        CacheEntry {
            value: value.to_string(),
            expires_at: Self::expiration(lifetime),
        }
    }

    /// Rebuilds an entry from a stored timestamp, where 0 means eternal.
    pub fn from_timestamp(value: &str, timestamp: i64) -> CacheEntry {
        CacheEntry {
            value: value.to_string(),
            expires_at: match timestamp {
                0 => None,
                instant => Some(instant),
            },
        }
    }

    /// Absolute expiration instant for a lifetime starting now, saturating
    /// on overflow. Lifetimes truncate to whole seconds.
    pub fn expiration(lifetime: Option<Duration>) -> Option<i64> {
        match lifetime {
            Some(duration) if !duration.is_zero() => {
                let seconds = i64::try_from(duration.as_secs()).unwrap_or(i64::MAX);
                Some(Utc::now().timestamp().saturating_add(seconds))
            }
            _ => None,
        }
    }

    /// An entry is expired once the current instant reaches `expires_at`.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(instant) => instant <= Utc::now().timestamp(),
            None => false,
        }
    }

    /// The storage form of the expiration, 0 when the entry never expires.
    pub fn timestamp(&self) -> i64 {
        self.expires_at.unwrap_or(0)
    }
}
