use clap::{ArgAction, Parser, Subcommand};
use geopeaks_core::{catalog, Settings};
use std::path::PathBuf;

/// CLI arguments for geopeaks
#[derive(Debug, Parser)]
#[command(
    name = "geopeaks",
    version,
    about = "Store cities and mountain peaks in a Redis geo index, query and export them"
)]
pub struct CliArgs {
    /// Path to a TOML settings file (default: ./geopeaks.toml when present)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Store URL (e.g. redis://localhost:6379); overrides settings and GEOPEAKS_REDIS_URL
    #[arg(short = 'u', long = "url", global = true)]
    pub url: Option<String>,

    /// Database index to select after connecting (default: 1)
    #[arg(long = "db", global = true)]
    pub db: Option<i64>,

    /// Increase log output (-v info, -vv debug). RUST_LOG takes precedence
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    /// Applies command-line overrides on top of loaded settings.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(url) = &self.url {
            settings.redis_url = url.clone();
        }
        if let Some(db) = self.db {
            settings.db = db;
        }
    }

    /// Everything that can fail without touching the network: flag overrides,
    /// settings validation and, for `add`, the compiled-in catalogue.
    pub fn preflight(&self, settings: &mut Settings) -> geopeaks_core::Result<()> {
        self.apply_overrides(settings);
        settings.validate()?;
        if matches!(self.command, Commands::Add) {
            catalog::validate()?;
        }
        Ok(())
    }

    /// Default tracing filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add sample data for cities and peaks
    #[command(visible_alias = "seed")]
    Add,

    /// Look up the coordinates of a city
    Lookup {
        /// City name (case- and accent-insensitive for built-in cities)
        city: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Find the peaks closest to a city
    Find {
        /// City name (case- and accent-insensitive for built-in cities)
        city: String,

        /// Search radius in kilometres (default: 200, or radius_km from settings)
        #[arg(short = 'r', long = "radius")]
        radius: Option<f64>,

        /// Return at most this many peaks
        #[arg(short = 'n', long = "limit")]
        limit: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Export to a CSV file suitable for geojson.io (gzip when the name ends in .gz)
    Export {
        /// Output file; created or truncated
        file: PathBuf,
    },

    /// Clear the selected database
    Flush,
}
