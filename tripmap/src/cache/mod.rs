//! Response caches for mapping-provider lookups
//!
//! Two independent caches memoize expensive external calls: [`RouteCache`]
//! keyed by normalized endpoint pairs and [`GeocodeCache`] keyed by
//! case-folded query text. Both are unbounded in-memory maps with process
//! lifetime: entries appear on the first successful lookup and survive until
//! an explicit clear (or, for geocoding, a single-key delete). Nothing is
//! persisted across restarts.
//!
//! The caches never perform I/O themselves. Callers in the [`crate::client`]
//! layer check the cache first, call the provider on a miss, then store the
//! result.

mod geocode;
mod route;

pub use geocode::GeocodeCache;
pub use route::RouteCache;

use std::fmt;

/// Point-in-time cache statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of lookups answered from the cache.
    pub hits: u64,
    /// Number of lookups that found no entry.
    pub misses: u64,
    /// Number of entries currently stored.
    pub entries: usize,
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hits, {} misses, {} entries",
            self.hits, self.misses, self.entries
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_stats_default() {
        let stats = CacheStats::default();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.entries, 0);
    }

    #[test]
    fn test_cache_stats_display() {
        let stats = CacheStats {
            hits: 7,
            misses: 3,
            entries: 4,
        };
        assert_eq!(stats.to_string(), "7 hits, 3 misses, 4 entries");
    }
}
