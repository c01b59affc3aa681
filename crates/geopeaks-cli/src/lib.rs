//! geopeaks-cli
//! ============
//!
//! Command-line interface for [`geopeaks-core`]: seed a Redis geo index with
//! Alpine cities and peaks, look them up, find the peaks nearest a city, and
//! export everything as CSV for geojson.io.
//!
//! Quick start
//! -----------
//!
//! ```text
//! geopeaks add                  # add sample data for cities and peaks
//! geopeaks lookup Zurich        # coordinates for Zurich: 8.466676, 47.377550
//! geopeaks find Zurich          # peaks within 200 km, nearest first
//! geopeaks find Milan -r 120 -n 3 --json
//! geopeaks export alps.csv      # or alps.csv.gz
//! geopeaks flush                # clear the database
//! ```
//!
//! Connection settings come from `geopeaks.toml`, `GEOPEAKS_*` environment
//! variables, or `--url` / `--db`; the default is `redis://localhost:6379`,
//! database 1.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;
pub mod output;
