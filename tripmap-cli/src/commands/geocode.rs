//! Geocode a place name from the command line.

use clap::Args;
use console::style;

use crate::commands::common::map_services;
use crate::error::CliError;

/// Arguments for `tripmap geocode`.
#[derive(Debug, Args)]
pub struct GeocodeArgs {
    /// Free-text place query, e.g. "Lisbon, Portugal"
    pub query: String,
}

/// Run the geocode command.
pub async fn run(args: GeocodeArgs) -> Result<(), CliError> {
    let services = map_services()?;
    let place = services.geocoding().geocode(&args.query).await?;

    println!("{}", style(&place.name).bold());
    println!("  Longitude: {}", place.center.lng);
    println!("  Latitude:  {}", place.center.lat);
    Ok(())
}
