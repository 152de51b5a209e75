//! Application bootstrap: construct and wire the mapping stack.

use std::sync::Arc;

use tracing::info;

use crate::app::{AppConfig, AppError};
use crate::cache::{GeocodeCache, RouteCache};
use crate::client::{GeocodingClient, RoutingClient};
use crate::provider::{MapboxProvider, ReqwestClient};

/// Concrete provider type used by the bootstrapped stack.
pub type AppProvider = MapboxProvider<ReqwestClient>;

/// The wired mapping stack: provider, caches, and cached clients.
///
/// Constructed once per process by the composition root and shared from
/// there. Each `start` call creates fresh, empty caches.
pub struct MapServices {
    routing: RoutingClient<AppProvider>,
    geocoding: GeocodingClient<AppProvider>,
}

impl MapServices {
    /// Constructs the stack from configuration.
    pub fn start(config: AppConfig) -> Result<Self, AppError> {
        if config.provider.access_token.is_empty() {
            return Err(AppError::MissingAccessToken);
        }

        let http_client = ReqwestClient::with_timeout(config.provider.timeout_secs)
            .map_err(AppError::HttpClient)?;
        let provider = MapboxProvider::new(http_client, config.provider.access_token)
            .with_base_url(config.provider.base_url.clone())
            .with_profile(config.provider.profile.clone());

        info!(
            base_url = %config.provider.base_url,
            profile = %config.provider.profile,
            "Mapping stack started"
        );

        Ok(Self {
            routing: RoutingClient::new(provider.clone(), Arc::new(RouteCache::new())),
            geocoding: GeocodingClient::new(provider, Arc::new(GeocodeCache::new())),
        })
    }

    /// Routing client backed by the route cache.
    pub fn routing(&self) -> &RoutingClient<AppProvider> {
        &self.routing
    }

    /// Geocoding client backed by the geocoding cache.
    pub fn geocoding(&self) -> &GeocodingClient<AppProvider> {
        &self.geocoding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_requires_access_token() {
        let result = MapServices::start(AppConfig::default());
        assert!(matches!(result, Err(AppError::MissingAccessToken)));
    }

    #[test]
    fn test_start_with_token() {
        let services = MapServices::start(AppConfig::with_access_token("pk.test")).unwrap();
        assert!(services.routing().cache().is_empty());
        assert!(services.geocoding().cache().is_empty());
    }

    #[test]
    fn test_each_start_gets_fresh_caches() {
        let a = MapServices::start(AppConfig::with_access_token("pk.test")).unwrap();
        let b = MapServices::start(AppConfig::with_access_token("pk.test")).unwrap();
        assert!(!Arc::ptr_eq(a.routing().cache(), b.routing().cache()));
    }
}
