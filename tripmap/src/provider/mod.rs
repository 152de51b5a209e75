//! Mapping provider abstraction
//!
//! This module provides traits and implementations for fetching route
//! geometry and forward-geocoding results from an external mapping API.
//! Providers are generic over an [`HttpClient`] so tests can inject canned
//! responses instead of hitting the network.

mod http;
mod mapbox;
mod types;

pub use http::{HttpClient, ReqwestClient};
pub use mapbox::{MapboxProvider, DEFAULT_BASE_URL, DEFAULT_PROFILE};
pub use types::{
    DirectionsProvider, GeocodedPlace, GeocodingProvider, ProviderError, Route, RouteGeometry,
};

#[cfg(test)]
pub use http::tests::MockHttpClient;
