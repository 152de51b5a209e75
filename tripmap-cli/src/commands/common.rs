//! Shared helpers for CLI commands.

use tripmap::app::{AppConfig, MapServices};
use tripmap::config::ConfigFile;

use crate::error::CliError;

/// Builds the mapping stack from the user's configuration file.
pub fn map_services() -> Result<MapServices, CliError> {
    let config = ConfigFile::load().unwrap_or_default();
    let app_config = AppConfig::from_config_file(&config);
    MapServices::start(app_config).map_err(CliError::from)
}

/// Formats a distance in meters for display.
pub fn format_distance(meters: f64) -> String {
    if meters >= 1000.0 {
        format!("{:.1} km", meters / 1000.0)
    } else {
        format!("{:.0} m", meters)
    }
}

/// Formats a duration in seconds for display.
pub fn format_duration(seconds: f64) -> String {
    let total_minutes = (seconds / 60.0).round() as u64;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    if hours > 0 {
        format!("{} h {:02} min", hours, minutes)
    } else {
        format!("{} min", minutes)
    }
}
