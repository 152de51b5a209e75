//! Mapbox-style directions and geocoding provider.
//!
//! # URL Patterns
//!
//! Directions:
//! `{base}/directions/v5/mapbox/{profile}/{lng},{lat};{lng},{lat}?geometries=geojson&overview=full&access_token={token}`
//!
//! Geocoding:
//! `{base}/geocoding/v5/mapbox.places/{query}.json?limit=1&access_token={token}`
//!
//! The provider owns URL construction and response decoding. It never
//! consults the caches; the client layer above it does.

use serde::Deserialize;
use url::Url;

use crate::coord::LngLat;
use crate::provider::{
    DirectionsProvider, GeocodedPlace, GeocodingProvider, HttpClient, ProviderError, Route,
};

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.mapbox.com";

/// Default routing profile.
pub const DEFAULT_PROFILE: &str = "driving";

/// Mapbox-style mapping provider.
///
/// Generic over the HTTP client so tests can inject canned responses.
///
/// # Example
///
/// ```ignore
/// use tripmap::provider::{MapboxProvider, ReqwestClient};
///
/// let client = ReqwestClient::new()?;
/// let provider = MapboxProvider::new(client, "pk.token");
/// ```
#[derive(Clone)]
pub struct MapboxProvider<C: HttpClient> {
    http_client: C,
    access_token: String,
    base_url: String,
    profile: String,
}

impl<C: HttpClient> MapboxProvider<C> {
    /// Creates a provider with the default API root and routing profile.
    pub fn new(http_client: C, access_token: impl Into<String>) -> Self {
        Self {
            http_client,
            access_token: access_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            profile: DEFAULT_PROFILE.to_string(),
        }
    }

    /// Overrides the API root (testing, self-hosted gateways).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the routing profile (`driving`, `walking`, `cycling`).
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Builds the directions request URL for the given endpoints.
    fn directions_url(&self, start: LngLat, end: LngLat) -> Result<Url, ProviderError> {
        let mut url = Url::parse(&self.base_url)?;
        let pair = format!("{},{};{},{}", start.lng, start.lat, end.lng, end.lat);
        url.path_segments_mut()
            .map_err(|_| ProviderError::Http(format!("Invalid base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(["directions", "v5", "mapbox", self.profile.as_str(), pair.as_str()]);
        url.query_pairs_mut()
            .append_pair("geometries", "geojson")
            .append_pair("overview", "full")
            .append_pair("access_token", &self.access_token);
        Ok(url)
    }

    /// Builds the forward-geocoding request URL for the given query.
    fn geocoding_url(&self, query: &str) -> Result<Url, ProviderError> {
        let mut url = Url::parse(&self.base_url)?;
        let resource = format!("{}.json", query);
        url.path_segments_mut()
            .map_err(|_| ProviderError::Http(format!("Invalid base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(["geocoding", "v5", "mapbox.places", resource.as_str()]);
        url.query_pairs_mut()
            .append_pair("limit", "1")
            .append_pair("access_token", &self.access_token);
        Ok(url)
    }
}

/// Wire shape of a directions response.
#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    #[serde(default)]
    routes: Vec<Route>,
    #[serde(default)]
    code: String,
}

/// Wire shape of a forward-geocoding response.
#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    features: Vec<GeocodingFeature>,
}

#[derive(Debug, Deserialize)]
struct GeocodingFeature {
    place_name: String,
    center: LngLat,
}

impl<C: HttpClient> DirectionsProvider for MapboxProvider<C> {
    async fn route(&self, start: LngLat, end: LngLat) -> Result<Route, ProviderError> {
        let url = self.directions_url(start, end)?;
        let body = self.http_client.get(url.as_str()).await?;
        let response: DirectionsResponse =
            serde_json::from_slice(&body).map_err(|e| ProviderError::Decode(e.to_string()))?;

        if !response.code.is_empty() && response.code != "Ok" {
            return Err(ProviderError::Http(format!(
                "Provider returned code {}",
                response.code
            )));
        }

        response
            .routes
            .into_iter()
            .next()
            .ok_or(ProviderError::NoRoute { start, end })
    }

    fn name(&self) -> &str {
        "Mapbox"
    }
}

impl<C: HttpClient> GeocodingProvider for MapboxProvider<C> {
    async fn geocode(&self, query: &str) -> Result<GeocodedPlace, ProviderError> {
        let url = self.geocoding_url(query)?;
        let body = self.http_client.get(url.as_str()).await?;
        let response: GeocodingResponse =
            serde_json::from_slice(&body).map_err(|e| ProviderError::Decode(e.to_string()))?;

        let feature = response
            .features
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::NoMatch(query.to_string()))?;

        Ok(GeocodedPlace {
            name: feature.place_name,
            center: feature.center,
        })
    }

    fn name(&self) -> &str {
        "Mapbox"
    }
}
