//! TripMap CLI - command-line trip planning
//!
//! This binary exposes the tripmap library through `geocode`, `route`,
//! `plan`, and `config` subcommands.

mod commands;
mod error;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use console::style;

use crate::commands::config::ConfigCommands;
use crate::commands::{geocode, plan, route};

#[derive(Debug, Parser)]
#[command(name = "tripmap", version, about = "Trip planning with cached mapping lookups")]
struct Cli {
    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Write logs to a daily-rolling file in this directory instead of stderr
    #[arg(long, global = true, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve a place name to coordinates
    Geocode(geocode::GeocodeArgs),

    /// Fetch a route between two lng,lat endpoints
    Route(route::RouteArgs),

    /// Plan an itinerary: geocode every stop and fetch the legs between them
    Plan(plan::PlanArgs),

    /// View or modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "tripmap=debug"
    } else {
        "tripmap=info"
    };
    let _guard = tripmap::telemetry::init(default_filter, cli.log_dir.as_deref());

    let result = match cli.command {
        Commands::Geocode(args) => geocode::run(args).await,
        Commands::Route(args) => route::run(args).await,
        Commands::Plan(args) => plan::run(args).await,
        Commands::Config { command } => commands::config::run(command),
    };

    if let Err(e) = result {
        eprintln!("{} {}", style("error:").red().bold(), e);
        process::exit(1);
    }
}
