//! Fetch a route between two endpoints from the command line.

use clap::Args;

use tripmap::coord::LngLat;

use crate::commands::common::{format_distance, format_duration, map_services};
use crate::error::CliError;

/// Arguments for `tripmap route`.
#[derive(Debug, Args)]
pub struct RouteArgs {
    /// Start endpoint as "lng,lat"
    pub start: String,

    /// End endpoint as "lng,lat"
    pub end: String,
}

/// Run the route command.
pub async fn run(args: RouteArgs) -> Result<(), CliError> {
    let start: LngLat = args
        .start
        .parse()
        .map_err(|e| CliError::InvalidArgument(format!("start: {}", e)))?;
    let end: LngLat = args
        .end
        .parse()
        .map_err(|e| CliError::InvalidArgument(format!("end: {}", e)))?;

    let services = map_services()?;
    let route = services.routing().route(start, end).await?;

    println!("{} -> {}", start, end);
    println!("  Distance: {}", format_distance(route.distance_meters));
    println!("  Duration: {}", format_duration(route.duration_seconds));
    println!("  Points:   {}", route.geometry.coordinates.len());
    Ok(())
}
