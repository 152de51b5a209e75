//! Cached geocoding client.

use std::sync::Arc;

use tracing::debug;

use crate::cache::{CacheStats, GeocodeCache};
use crate::provider::{GeocodedPlace, GeocodingProvider, ProviderError};

/// Geocoding client with response caching.
///
/// Wraps a [`GeocodingProvider`] with a [`GeocodeCache`]. Queries are
/// case-folded by the cache, so `"Lisbon"` and `"LISBON"` resolve to the
/// same entry without a second network call.
pub struct GeocodingClient<P: GeocodingProvider> {
    provider: P,
    cache: Arc<GeocodeCache<GeocodedPlace>>,
}

impl<P: GeocodingProvider> GeocodingClient<P> {
    /// Creates a client over the given provider and cache.
    pub fn new(provider: P, cache: Arc<GeocodeCache<GeocodedPlace>>) -> Self {
        Self { provider, cache }
    }

    /// Resolves a free-text query, consulting the cache first.
    pub async fn geocode(&self, query: &str) -> Result<GeocodedPlace, ProviderError> {
        if let Some(place) = self.cache.get(query) {
            debug!(query, "Geocoding cache hit");
            return Ok(place);
        }

        debug!(query, provider = self.provider.name(), "Geocoding cache miss, fetching");
        let place = self.provider.geocode(query).await?;
        self.cache.put(query, place.clone());
        Ok(place)
    }

    /// Drops the cached result for one query.
    ///
    /// Returns `true` when an entry was removed; a missing key is a no-op.
    pub fn invalidate(&self, query: &str) -> bool {
        self.cache.delete(query)
    }

    /// Drops every cached result.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Snapshot of the cache statistics.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Handle to the underlying cache.
    pub fn cache(&self) -> &Arc<GeocodeCache<GeocodedPlace>> {
        &self.cache
    }
}
