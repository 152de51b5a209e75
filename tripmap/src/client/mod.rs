//! Cached lookup clients
//!
//! Domain clients that combine a provider with its response cache. Lookups
//! go to the cache first; the provider is called only on a miss and the
//! fetched result is stored before it is returned. This is the call path
//! itinerary code uses instead of talking to the provider directly.

mod geocode;
mod route;

pub use geocode::GeocodingClient;
pub use route::RoutingClient;
