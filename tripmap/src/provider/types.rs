//! Provider traits, payload types, and errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coord::{CoordError, LngLat};

/// Errors returned by mapping providers.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// Transport failure or non-success HTTP status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The response body could not be decoded.
    #[error("malformed provider response: {0}")]
    Decode(String),

    /// The provider found no route between the endpoints.
    #[error("no route between {start} and {end}")]
    NoRoute { start: LngLat, end: LngLat },

    /// The geocoder found no match for the query.
    #[error("no match for '{0}'")]
    NoMatch(String),

    /// A request URL could not be constructed.
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    /// A coordinate could not be keyed or encoded.
    #[error(transparent)]
    Coord(#[from] CoordError),
}

/// Route geometry as a GeoJSON LineString.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteGeometry {
    /// GeoJSON geometry type, `"LineString"` for routes.
    #[serde(rename = "type")]
    pub geometry_type: String,

    /// Path coordinates as `[lng, lat]` pairs.
    pub coordinates: Vec<LngLat>,
}

/// A routed leg between two endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// The path geometry.
    pub geometry: RouteGeometry,

    /// Leg length in meters.
    #[serde(rename = "distance")]
    pub distance_meters: f64,

    /// Estimated travel time in seconds.
    #[serde(rename = "duration")]
    pub duration_seconds: f64,
}

/// A geocoded place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodedPlace {
    /// Full display name of the match.
    pub name: String,

    /// Location of the match.
    pub center: LngLat,
}

/// Provider of route geometry between two endpoints.
///
/// Implementations perform the actual network call; caching happens in the
/// client layer above.
pub trait DirectionsProvider: Send + Sync {
    /// Fetches a route from `start` to `end`.
    async fn route(&self, start: LngLat, end: LngLat) -> Result<Route, ProviderError>;

    /// Human-readable provider name for logs.
    fn name(&self) -> &str;
}

/// Provider of forward-geocoding results for free-text queries.
pub trait GeocodingProvider: Send + Sync {
    /// Resolves a free-text query to its best match.
    async fn geocode(&self, query: &str) -> Result<GeocodedPlace, ProviderError>;

    /// Human-readable provider name for logs.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_route_error_display() {
        let err = ProviderError::NoRoute {
            start: LngLat::new(1.5, 2.5),
            end: LngLat::new(3.5, 4.5),
        };
        assert_eq!(err.to_string(), "no route between 1.5,2.5 and 3.5,4.5");
    }

    #[test]
    fn test_coord_error_converts() {
        let err: ProviderError = CoordError::NonFiniteLatitude(f64::NAN).into();
        assert!(matches!(err, ProviderError::Coord(_)));
    }

    #[test]
    fn test_route_decodes_from_provider_json() {
        let json = r#"{
            "geometry": {"type": "LineString", "coordinates": [[-9.14, 38.72], [-8.63, 41.16]]},
            "distance": 313000.5,
            "duration": 10980.0
        }"#;
        let route: Route = serde_json::from_str(json).unwrap();
        assert_eq!(route.geometry.geometry_type, "LineString");
        assert_eq!(route.geometry.coordinates.len(), 2);
        assert_eq!(route.geometry.coordinates[0], LngLat::new(-9.14, 38.72));
        assert_eq!(route.distance_meters, 313000.5);
        assert_eq!(route.duration_seconds, 10980.0);
    }

    #[test]
    fn test_geocoded_place_roundtrip() {
        let place = GeocodedPlace {
            name: "Lisbon, Portugal".to_string(),
            center: LngLat::new(-9.1393, 38.7223),
        };
        let json = serde_json::to_string(&place).unwrap();
        let back: GeocodedPlace = serde_json::from_str(&json).unwrap();
        assert_eq!(back, place);
    }
}
