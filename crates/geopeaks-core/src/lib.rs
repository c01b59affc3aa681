// crates/geopeaks-core/src/lib.rs

//! geopeaks-core
//! =============
//!
//! Stores a small catalogue of Alpine cities and mountain peaks in a Redis
//! geo index and queries it back: position lookup, nearest peaks within a
//! radius, CSV export for geojson.io, and a database flush.
//!
//! All spatial work (geohashing, distances, radius scans) is done by the
//! store. This crate only shapes the commands and the replies.
//!
//! ```no_run
//! use geopeaks_core::{store, GeoIndex, RadiusQuery, Settings};
//!
//! let settings = Settings::load(None)?;
//! let mut index = GeoIndex::new(store::open(&settings)?);
//! index.seed()?;
//!
//! let near = index.find_peaks("Zurich", &RadiusQuery::new(settings.radius_km))?;
//! for hit in &near.hits {
//!     println!("{}: {:.0} km", hit.name, hit.distance_km);
//! }
//! # Ok::<(), geopeaks_core::GeoError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod index;
pub mod model;
pub mod store;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::config::Settings;
pub use crate::error::{GeoError, Result};
pub use crate::export::{CompressionMode, Palette};
pub use crate::index::{GeoIndex, SeedReport};
pub use crate::model::{GeoSet, Hit, Location, Position, Proximity, RadiusQuery};
pub use crate::store::RedisStore;
pub use crate::traits::{GeoStore, NameMatch};
