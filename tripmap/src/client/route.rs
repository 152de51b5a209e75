//! Cached routing client.

use std::sync::Arc;

use tracing::debug;

use crate::cache::{CacheStats, RouteCache};
use crate::coord::{LngLat, RouteKey};
use crate::provider::{DirectionsProvider, ProviderError, Route};

/// Routing client with response caching.
///
/// Wraps a [`DirectionsProvider`] with a [`RouteCache`]: the cache is
/// consulted first and the fetched route is stored under both directions of
/// the leg, so the return leg of an out-and-back itinerary never hits the
/// network.
pub struct RoutingClient<P: DirectionsProvider> {
    provider: P,
    cache: Arc<RouteCache<Route>>,
}

impl<P: DirectionsProvider> RoutingClient<P> {
    /// Creates a client over the given provider and cache.
    ///
    /// The cache is injected rather than created here so the composition
    /// root can share or inspect it.
    pub fn new(provider: P, cache: Arc<RouteCache<Route>>) -> Self {
        Self { provider, cache }
    }

    /// Fetches the route between two endpoints, consulting the cache first.
    pub async fn route(&self, start: LngLat, end: LngLat) -> Result<Route, ProviderError> {
        let key = RouteKey::new(start, end)?;

        if let Some(route) = self.cache.get(&key) {
            debug!(key = %key, "Route cache hit");
            return Ok(route);
        }

        debug!(key = %key, provider = self.provider.name(), "Route cache miss, fetching");
        let route = self.provider.route(start, end).await?;
        self.cache.put(key, route.clone());
        Ok(route)
    }

    /// Drops every cached route.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Snapshot of the cache statistics.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Handle to the underlying cache.
    pub fn cache(&self) -> &Arc<RouteCache<Route>> {
        &self.cache
    }
}
