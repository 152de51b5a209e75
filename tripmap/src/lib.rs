//! TripMap - mapping support for the trip planner
//!
//! This library memoizes route-geometry and geocoding lookups from the
//! mapping provider so itinerary views do not re-request data they have
//! already seen. The [`cache`] module holds the two response caches,
//! [`provider`] talks to the external mapping API, [`client`] combines the
//! two into the check-cache-first lookup path, and [`app`] wires the whole
//! stack together from configuration.

pub mod app;
pub mod cache;
pub mod client;
pub mod config;
pub mod coord;
pub mod provider;
pub mod telemetry;
