//! Coordinate types and route cache-key derivation
//!
//! Provides the [`LngLat`] pair type used throughout the library and the
//! structured [`RouteKey`] that the route cache is keyed by. Keys normalize
//! each endpoint to [`KEY_PRECISION`] decimal places, so endpoints within
//! half of that resolution resolve to the same cached route.

mod types;

pub use types::{CoordError, LngLat, RouteKey, KEY_PRECISION};
