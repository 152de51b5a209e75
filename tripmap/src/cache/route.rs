//! Route geometry cache.
//!
//! Keyed by [`RouteKey`]. Storing a route writes both directions of the leg,
//! since the geometry is assumed path-symmetric: an out-and-back itinerary
//! fetches its return leg from cache.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use tracing::debug;

use crate::cache::CacheStats;
use crate::coord::RouteKey;

/// In-memory cache of route lookups keyed by endpoint pair.
///
/// Unbounded with process lifetime: entries stay until [`clear`] removes
/// them. The map is concurrent, so the cache can be shared across async
/// tasks behind an `Arc` without external locking.
///
/// [`clear`]: RouteCache::clear
pub struct RouteCache<G> {
    entries: DashMap<RouteKey, G>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<G: Clone> RouteCache<G> {
    /// Creates an empty route cache.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Looks up the route stored for this endpoint pair.
    ///
    /// Returns `None` when nothing has been stored; absence is not an error.
    pub fn get(&self, key: &RouteKey) -> Option<G> {
        match self.entries.get(key) {
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

    /// Stores a route under `key` and its reversal.
    ///
    /// Two entries are written per call, overwriting any prior value in
    /// either direction. Last write wins.
    pub fn put(&self, key: RouteKey, geometry: G) {
        self.entries.insert(key.reversed(), geometry.clone());
        self.entries.insert(key, geometry);
    }

    /// Removes every entry unconditionally.
    ///
    /// There is no partial clear by coordinate.
    pub fn clear(&self) {
        self.entries.clear();
        debug!("route cache cleared");
    }

    /// Number of entries currently stored.
    ///
    /// Each stored route counts twice (once per direction) unless its
    /// endpoints round to the same key.
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

impl<G: Clone> Default for RouteCache<G> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::LngLat;

    fn key(start: (f64, f64), end: (f64, f64)) -> RouteKey {
        RouteKey::new(
            LngLat::new(start.0, start.1),
            LngLat::new(end.0, end.1),
        )
        .unwrap()
    }

    #[test]
    fn test_get_missing_returns_none() {
        let cache: RouteCache<String> = RouteCache::new();
        assert!(cache.get(&key((0.0, 0.0), (1.0, 1.0))).is_none());
    }

    #[test]
    fn test_put_then_get() {
        let cache = RouteCache::new();
        let k = key((-9.1393, 38.7223), (-8.6291, 41.1579));
        cache.put(k, "geometry".to_string());
        assert_eq!(cache.get(&k), Some("geometry".to_string()));
    }

    #[test]
    fn test_put_is_symmetric() {
        let cache = RouteCache::new();
        let forward = key((-9.1393, 38.7223), (-8.6291, 41.1579));
        cache.put(forward, "geometry".to_string());
        assert_eq!(
            cache.get(&forward.reversed()),
            Some("geometry".to_string()),
            "reverse direction should be served from the same put"
        );
    }

    #[test]
    fn test_put_writes_two_entries() {
        let cache = RouteCache::new();
        cache.put(key((0.0, 0.0), (1.0, 1.0)), "g".to_string());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_degenerate_leg_writes_one_entry() {
        let cache = RouteCache::new();
        cache.put(key((5.0, 5.0), (5.0, 5.0)), "loop".to_string());
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&key((5.0, 5.0), (5.0, 5.0))), Some("loop".to_string()));
    }

    #[test]
    fn test_repeated_put_overwrites() {
        let cache = RouteCache::new();
        let k = key((0.0, 0.0), (1.0, 1.0));
        cache.put(k, "old".to_string());
        cache.put(k, "new".to_string());
        assert_eq!(cache.get(&k), Some("new".to_string()));
        assert_eq!(cache.get(&k.reversed()), Some("new".to_string()));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_rounded_coordinates_share_entry() {
        let cache = RouteCache::new();
        cache.put(
            key((12.34567, 56.78912), (0.0, 0.0)),
            "rounded".to_string(),
        );
        assert_eq!(
            cache.get(&key((12.34569, 56.78909), (0.0, 0.0))),
            Some("rounded".to_string())
        );
    }

    #[test]
    fn test_clear_empties_everything() {
        let cache = RouteCache::new();
        let a = key((0.0, 0.0), (1.0, 1.0));
        let b = key((2.0, 2.0), (3.0, 3.0));
        cache.put(a, "a".to_string());
        cache.put(b, "b".to_string());
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get(&a).is_none());
        assert!(cache.get(&b).is_none());
    }

    #[test]
    fn test_stats_track_hits_and_misses() {
        let cache = RouteCache::new();
        let k = key((0.0, 0.0), (1.0, 1.0));
        assert!(cache.get(&k).is_none()); // miss
        cache.put(k, "g".to_string());
        assert!(cache.get(&k).is_some()); // hit
        assert!(cache.get(&k.reversed()).is_some()); // hit

        let stats = cache.stats();
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 2);
    }

    #[test]
    fn test_shared_across_threads() {
        use std::sync::Arc;

        let cache = Arc::new(RouteCache::new());
        let mut handles = Vec::new();
        for i in 0..8 {
            let cache = Arc::clone(&cache);
            handles.push(std::thread::spawn(move || {
                let k = key((f64::from(i), 0.0), (f64::from(i) + 1.0, 1.0));
                cache.put(k, format!("route-{i}"));
                assert_eq!(cache.get(&k), Some(format!("route-{i}")));
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(cache.len(), 16);
    }
}
