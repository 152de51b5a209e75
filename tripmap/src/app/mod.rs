//! Application composition root
//!
//! The caches, provider, and cached clients are constructed here and owned
//! by [`MapServices`]; consumers receive them by reference instead of
//! reaching for hidden global state. This also gives tests a fresh cache
//! per constructed stack.

mod bootstrap;
mod config;
mod error;

pub use bootstrap::{AppProvider, MapServices};
pub use config::AppConfig;
pub use error::AppError;
