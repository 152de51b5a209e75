//! Geocoding result cache.
//!
//! Keys are the raw query text lower-cased. Nothing else is normalized:
//! queries that differ only in leading or trailing whitespace are distinct
//! entries.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use tracing::debug;

use crate::cache::CacheStats;

/// In-memory cache of geocoding lookups keyed by case-folded query text.
///
/// Unbounded with process lifetime, like [`RouteCache`]. Unlike the route
/// cache it supports single-key invalidation via [`delete`], so a stale
/// result for one query can be dropped without losing the rest.
///
/// [`RouteCache`]: crate::cache::RouteCache
/// [`delete`]: GeocodeCache::delete
pub struct GeocodeCache<R> {
    entries: DashMap<String, R>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<R: Clone> GeocodeCache<R> {
    /// Creates an empty geocoding cache.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Derives the cache key for a query: Unicode lower-casing, nothing else.
    fn normalize(query: &str) -> String {
        query.to_lowercase()
    }

    /// Looks up the result stored for this query.
    ///
    /// Returns `None` when nothing has been stored; absence is not an error.
    pub fn get(&self, query: &str) -> Option<R> {
        match self.entries.get(&Self::normalize(query)) {
            Some(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(entry.value().clone())
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Stores a result under the normalized key, overwriting any prior
    /// entry. Last write wins.
    pub fn put(&self, query: &str, result: R) {
        self.entries.insert(Self::normalize(query), result);
    }

    /// Removes the entry for this query if present.
    ///
    /// Returns `true` when an entry was removed; a missing key is a no-op
    /// returning `false`, never an error.
    pub fn delete(&self, query: &str) -> bool {
        self.entries.remove(&Self::normalize(query)).is_some()
    }

    /// Removes every entry unconditionally.
    pub fn clear(&self) {
        self.entries.clear();
        debug!("geocoding cache cleared");
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of the hit/miss counters and entry count.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}

impl<R: Clone> Default for GeocodeCache<R> {
    fn default() -> Self {
        Self::new()
    }
}
