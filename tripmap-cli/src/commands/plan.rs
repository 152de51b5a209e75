//! Plan an itinerary from a JSON file.
//!
//! The itinerary lists stops with free-text locations:
//!
//! ```json
//! {
//!   "title": "Portugal long weekend",
//!   "stops": [
//!     {"name": "Lisbon", "location": "Lisbon, Portugal"},
//!     {"name": "Porto", "location": "Porto, Portugal"},
//!     {"name": "Lisbon", "location": "Lisbon, Portugal"}
//!   ]
//! }
//! ```
//!
//! Planning geocodes every stop, then fetches the route legs between
//! consecutive stops. Repeated stops and return legs are served from the
//! in-process caches, which the final statistics line makes visible.

use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;
use tracing::info;

use tripmap::provider::{GeocodedPlace, Route};

use crate::commands::common::{format_distance, format_duration, map_services};
use crate::error::CliError;

/// Arguments for `tripmap plan`.
#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Itinerary JSON file
    pub file: PathBuf,
}

/// Itinerary file format.
#[derive(Debug, Deserialize)]
struct Itinerary {
    /// Optional trip title shown above the summary.
    #[serde(default)]
    title: Option<String>,

    /// Ordered stops of the trip.
    stops: Vec<Stop>,
}

/// One stop of the itinerary.
#[derive(Debug, Deserialize)]
struct Stop {
    /// Display name of the stop.
    name: String,

    /// Free-text location passed to the geocoder.
    location: String,
}

/// Run the plan command.
pub async fn run(args: PlanArgs) -> Result<(), CliError> {
    let itinerary = load_itinerary(&args.file)?;
    if itinerary.stops.len() < 2 {
        return Err(CliError::Itinerary(
            "An itinerary needs at least two stops".to_string(),
        ));
    }

    info!(
        file = %args.file.display(),
        stops = itinerary.stops.len(),
        "Itinerary loaded"
    );

    let services = map_services()?;

    if let Some(title) = &itinerary.title {
        println!("{}", style(title).bold().underlined());
    }

    let bar = progress_bar(itinerary.stops.len() as u64, "geocoding stops");
    let mut places: Vec<GeocodedPlace> = Vec::with_capacity(itinerary.stops.len());
    for stop in &itinerary.stops {
        let place = services.geocoding().geocode(&stop.location).await?;
        bar.inc(1);
        places.push(place);
    }
    bar.finish_and_clear();

    let bar = progress_bar((itinerary.stops.len() - 1) as u64, "fetching legs");
    let mut legs: Vec<Route> = Vec::with_capacity(itinerary.stops.len() - 1);
    for pair in places.windows(2) {
        let leg = services
            .routing()
            .route(pair[0].center, pair[1].center)
            .await?;
        bar.inc(1);
        legs.push(leg);
    }
    bar.finish_and_clear();

    let mut total_distance = 0.0;
    let mut total_duration = 0.0;
    for (i, leg) in legs.iter().enumerate() {
        println!(
            "{} {} -> {}: {}, {}",
            style(format!("[{}]", i + 1)).dim(),
            itinerary.stops[i].name,
            itinerary.stops[i + 1].name,
            format_distance(leg.distance_meters),
            format_duration(leg.duration_seconds),
        );
        total_distance += leg.distance_meters;
        total_duration += leg.duration_seconds;
    }
    println!(
        "{} {} over {} legs ({})",
        style("Total:").bold(),
        format_distance(total_distance),
        legs.len(),
        format_duration(total_duration),
    );

    println!(
        "Route cache: {}; geocoding cache: {}",
        services.routing().cache_stats(),
        services.geocoding().cache_stats(),
    );
    Ok(())
}

/// Reads and parses an itinerary file.
fn load_itinerary(path: &Path) -> Result<Itinerary, CliError> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| CliError::Itinerary(format!("Failed to read {}: {}", path.display(), e)))?;
    serde_json::from_str(&data)
        .map_err(|e| CliError::Itinerary(format!("Malformed itinerary {}: {}", path.display(), e)))
}

fn progress_bar(len: u64, message: &'static str) -> ProgressBar {
    let bar_style = ProgressStyle::with_template("{msg} [{bar:30}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    ProgressBar::new(len).with_style(bar_style).with_message(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_itinerary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trip.json");
        std::fs::write(
            &path,
            r#"{
                "title": "Weekend",
                "stops": [
                    {"name": "Lisbon", "location": "Lisbon, Portugal"},
                    {"name": "Porto", "location": "Porto, Portugal"}
                ]
            }"#,
        )
        .unwrap();

        let itinerary = load_itinerary(&path).unwrap();
        assert_eq!(itinerary.title.as_deref(), Some("Weekend"));
        assert_eq!(itinerary.stops.len(), 2);
        assert_eq!(itinerary.stops[0].name, "Lisbon");
        assert_eq!(itinerary.stops[1].location, "Porto, Portugal");
    }

    #[test]
    fn test_load_itinerary_title_optional() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trip.json");
        std::fs::write(
            &path,
            r#"{"stops": [{"name": "A", "location": "a"}, {"name": "B", "location": "b"}]}"#,
        )
        .unwrap();

        let itinerary = load_itinerary(&path).unwrap();
        assert!(itinerary.title.is_none());
    }

    #[test]
    fn test_load_itinerary_missing_file() {
        let result = load_itinerary(Path::new("/nonexistent/trip.json"));
        assert!(matches!(result, Err(CliError::Itinerary(_))));
    }

    #[test]
    fn test_load_itinerary_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trip.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = load_itinerary(&path);
        assert!(matches!(result, Err(CliError::Itinerary(_))));
    }
}
