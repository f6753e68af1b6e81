//! Bounded LRU + TTL cache for search result lists.
//!
//! Keys are normalized queries (lowercased, trimmed); values are the ordered
//! record lists produced by a successful search. Expiry is lazy: an entry
//! past its TTL is treated as absent and removed on lookup. Capacity is a
//! hard bound enforced on insert by evicting the least-recently-used entry.
//!
//! Shared across concurrent requests behind a [`Mutex`]; racing `put`s for
//! the same key resolve as last-write-wins with no interleaved lists.

use crate::types::ResultRecord;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Normalize a free-text query into its cache key.
///
/// Queries that differ only in case or surrounding whitespace share one key.
pub fn normalize_key(query: &str) -> String {
    query.trim().to_lowercase()
}

/// One cached result list with its freshness and recency bookkeeping.
#[derive(Debug, Clone)]
struct CacheEntry {
    records: Vec<ResultRecord>,
    created_at: Instant,
    /// Logical timestamp of the last get/put touching this entry.
    last_used: u64,
}

#[derive(Debug, Default)]
struct CacheInner {
    map: HashMap<String, CacheEntry>,
    /// Monotonic logical clock for LRU ordering.
    tick: u64,
}

/// Bounded LRU + TTL store mapping normalized query → ordered result list.
#[derive(Debug)]
pub struct SearchCache {
    inner: Mutex<CacheInner>,
    capacity: usize,
    ttl: Duration,
}

impl SearchCache {
    /// Create a cache with the given capacity and entry time-to-live.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            inner: Mutex::new(CacheInner::default()),
            capacity: capacity.max(1),
            ttl,
        }
    }

    /// Look up a result list by normalized key.
    ///
    /// Returns `None` if the key was never set or its entry aged past the
    /// TTL (the expired entry is removed on the spot). A hit counts as a
    /// use for LRU ordering.
    pub fn get(&self, key: &str) -> Option<Vec<ResultRecord>> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);

        let expired = match inner.map.get(key) {
            Some(entry) => entry.created_at.elapsed() >= self.ttl,
            None => return None,
        };
        if expired {
            inner.map.remove(key);
            tracing::debug!(key, "cache entry expired");
            return None;
        }

        inner.tick += 1;
        let tick = inner.tick;
        let entry = inner.map.get_mut(key)?;
        entry.last_used = tick;
        Some(entry.records.clone())
    }

    /// Insert or overwrite a result list under a normalized key.
    ///
    /// Stamps the entry with the current time. If the insert pushes the map
    /// past capacity, the least-recently-used entry is evicted; the map
    /// never exceeds capacity once this returns.
    pub fn put(&self, key: &str, records: Vec<ResultRecord>) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);

        inner.tick += 1;
        let tick = inner.tick;
        inner.map.insert(
            key.to_string(),
            CacheEntry {
                records,
                created_at: Instant::now(),
                last_used: tick,
            },
        );

        if inner.map.len() > self.capacity {
            // The fresh insert holds the highest tick, so it is never the victim.
            if let Some(victim) = inner
                .map
                .iter()
                .min_by_key(|(_, entry)| entry.last_used)
                .map(|(k, _)| k.clone())
            {
                inner.map.remove(&victim);
                tracing::debug!(key = %victim, "evicted least-recently-used cache entry");
            }
        }
    }

    /// Number of live entries (expired-but-unvisited entries count until
    /// a lookup removes them).
    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .map
            .len()
    }

    /// Whether the cache currently holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
