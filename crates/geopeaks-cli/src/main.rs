//! geopeaks — command-line front end for geopeaks-core
//!
//! Usage examples
//! --------------
//!
//! - Seed the sample cities and peaks
//!   $ geopeaks add
//!
//! - Coordinates of a city (longitude, latitude)
//!   $ geopeaks lookup Geneva
//!
//! - Peaks within 200 km of a city, nearest first
//!   $ geopeaks find Zurich
//!   $ geopeaks find Zurich --radius 120 --limit 3
//!
//! - Export everything as CSV for geojson.io
//!   $ geopeaks export alps.csv
//!
//! - Delete every key in the selected database
//!   $ geopeaks flush
//!
//! Any store error aborts the command with a non-zero exit status.
use anyhow::Context;
use clap::Parser;
use geopeaks_cli::args::{CliArgs, Commands};
use geopeaks_cli::output;
use geopeaks_core::{store, GeoIndex, RadiusQuery, Settings};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.log_level());

    // Settings: defaults < geopeaks.toml < GEOPEAKS_* < flags
    let mut settings = Settings::load(args.config.as_deref())?;
    args.preflight(&mut settings)?;

    let store = store::open(&settings).with_context(|| {
        format!(
            "failed to connect to {} (db {})",
            settings.redis_url, settings.db
        )
    })?;
    let mut index = GeoIndex::new(store);

    match args.command {
        Commands::Add => {
            let report = index.seed()?;
            println!("{}", output::seed_text(&report));
        }

        Commands::Lookup { city, json } => {
            let loc = index.lookup(&city)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&loc)?);
            } else {
                println!("{}", output::lookup_text(&loc));
            }
        }

        Commands::Find {
            city,
            radius,
            limit,
            json,
        } => {
            let query = RadiusQuery::new(radius.unwrap_or(settings.radius_km)).with_limit(limit);
            let near = index.find_peaks(&city, &query)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&near)?);
            } else {
                print!("{}", output::proximity_text(&near));
            }
        }

        Commands::Export { file } => {
            let rows = index
                .export_to_path(&file, &settings.palette())
                .with_context(|| format!("failed to export to {}", file.display()))?;
            tracing::info!(rows, "export complete");
        }

        Commands::Flush => {
            index.flush()?;
        }
    }

    Ok(())
}

/// Logs go to stderr; stdout carries command output only.
fn init_tracing(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
