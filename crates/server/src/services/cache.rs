use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;

/// In-memory TTL cache for upstream responses, keyed by request signature.
///
/// Entries are immutable once written; the pipeline behaves identically with
/// or without hits, so this only shortcuts repeated upstream calls.
pub struct ResponseCache<T> {
    entries: RwLock<HashMap<String, CacheEntry<T>>>,
    ttl: Duration,
}

struct CacheEntry<T> {
    value: T,
    fetched_at: Instant,
}

impl<T: Clone> ResponseCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Get the cached value if present and not expired.
    pub fn get(&self, key: &str) -> Option<T> {
        let entries = self.entries.read();
        entries
            .get(key)
            .filter(|entry| entry.fetched_at.elapsed() < self.ttl)
            .map(|entry| entry.value.clone())
    }

    pub fn set(&self, key: impl Into<String>, value: T) {
        let mut entries = self.entries.write();
        // Drop expired entries on write so the map stays bounded.
        entries.retain(|_, entry| entry.fetched_at.elapsed() < self.ttl);
        entries.insert(
            key.into(),
            CacheEntry {
                value,
                fetched_at: Instant::now(),
            },
        );
    }
}
