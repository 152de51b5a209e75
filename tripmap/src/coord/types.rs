//! Coordinate and cache-key value types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of decimal places retained when deriving route cache keys.
pub const KEY_PRECISION: u32 = 4;

/// Scale factor corresponding to [`KEY_PRECISION`] decimal places.
const KEY_SCALE: f64 = 10_000.0;

/// Errors from coordinate parsing and route-key derivation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    /// Longitude was NaN or infinite and cannot be keyed.
    #[error("longitude is not a finite number: {0}")]
    NonFiniteLongitude(f64),

    /// Latitude was NaN or infinite and cannot be keyed.
    #[error("latitude is not a finite number: {0}")]
    NonFiniteLatitude(f64),

    /// A string could not be parsed as a `lng,lat` pair.
    #[error("expected a 'lng,lat' pair, got '{0}'")]
    InvalidPair(String),
}

/// A longitude/latitude pair in degrees.
///
/// Serialized as a two-element `[lng, lat]` array, matching the mapping
/// provider's wire format. Parseable from `"lng,lat"` strings for CLI input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LngLat {
    /// Longitude in degrees.
    pub lng: f64,
    /// Latitude in degrees.
    pub lat: f64,
}

impl LngLat {
    /// Creates a coordinate pair from longitude and latitude.
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

impl From<[f64; 2]> for LngLat {
    fn from(pair: [f64; 2]) -> Self {
        Self {
            lng: pair[0],
            lat: pair[1],
        }
    }
}

impl From<LngLat> for [f64; 2] {
    fn from(point: LngLat) -> Self {
        [point.lng, point.lat]
    }
}

impl fmt::Display for LngLat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lng, self.lat)
    }
}

impl FromStr for LngLat {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lng, lat) = s
            .split_once(',')
            .ok_or_else(|| CoordError::InvalidPair(s.to_string()))?;
        let lng: f64 = lng
            .trim()
            .parse()
            .map_err(|_| CoordError::InvalidPair(s.to_string()))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| CoordError::InvalidPair(s.to_string()))?;
        Ok(Self { lng, lat })
    }
}

/// Cache key for a route between two endpoints.
///
/// Each component is stored in 10^-4-degree units, so coordinates closer
/// than half of that resolution derive the same key and share a cache entry.
/// Construction rejects non-finite components; finite values outside the
/// usual coordinate ranges pass through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteKey {
    start_lng: i64,
    start_lat: i64,
    end_lng: i64,
    end_lat: i64,
}

impl RouteKey {
    /// Derives the cache key for a route from `start` to `end`.
    pub fn new(start: LngLat, end: LngLat) -> Result<Self, CoordError> {
        Ok(Self {
            start_lng: scale_lng(start.lng)?,
            start_lat: scale_lat(start.lat)?,
            end_lng: scale_lng(end.lng)?,
            end_lat: scale_lat(end.lat)?,
        })
    }

    /// The same key with start and end swapped.
    pub fn reversed(&self) -> Self {
        Self {
            start_lng: self.end_lng,
            start_lat: self.end_lat,
            end_lng: self.start_lng,
            end_lat: self.start_lat,
        }
    }
}

impl fmt::Display for RouteKey {
    /// Formats as `lng,lat-lng,lat` with 4 decimal places, the string form
    /// route keys took before they became structured values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.4},{:.4}-{:.4},{:.4}",
            self.start_lng as f64 / KEY_SCALE,
            self.start_lat as f64 / KEY_SCALE,
            self.end_lng as f64 / KEY_SCALE,
            self.end_lat as f64 / KEY_SCALE,
        )
    }
}

fn scale_lng(value: f64) -> Result<i64, CoordError> {
    if !value.is_finite() {
        return Err(CoordError::NonFiniteLongitude(value));
    }
    Ok((value * KEY_SCALE).round() as i64)
}

fn scale_lat(value: f64) -> Result<i64, CoordError> {
    if !value.is_finite() {
        return Err(CoordError::NonFiniteLatitude(value));
    }
    Ok((value * KEY_SCALE).round() as i64)
}
