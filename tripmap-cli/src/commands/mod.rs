//! CLI subcommand implementations.

pub mod common;
pub mod config;
pub mod geocode;
pub mod plan;
pub mod route;
