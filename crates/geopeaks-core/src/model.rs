// crates/geopeaks-core/src/model.rs

//! # Data Model
//!
//! Plain value types shared by the catalogue, the store seam and the
//! exporters. Coordinates are always decimal degrees.

use crate::error::{GeoError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Latitude limit accepted by the store's geohash encoding.
pub const MAX_LATITUDE: f64 = 85.051_128_78;
pub const MAX_LONGITUDE: f64 = 180.0;

// -----------------------------------------------------------------------------
// LOCATION
// -----------------------------------------------------------------------------

/// A named point.
///
/// Catalogue entries borrow their name from a `'static` string so the whole
/// catalogue can live in `static` tables; values read back from the store own
/// theirs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: Cow<'static, str>,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Compile-time constructor used by the catalogue tables.
    pub const fn fixed(name: &'static str, latitude: f64, longitude: f64) -> Self {
        Self {
            name: Cow::Borrowed(name),
            latitude,
            longitude,
        }
    }

    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            latitude,
            longitude,
        }
    }

    /// Builds a location from a member name and the position the store holds for it.
    pub fn at(name: impl Into<String>, position: Position) -> Self {
        Self::new(name, position.latitude, position.longitude)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        Position {
            longitude: self.longitude,
            latitude: self.latitude,
        }
    }

    /// Checks that the pair is inside the range the store can index.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(GeoError::invalid("location name cannot be empty"));
        }
        if !self.latitude.is_finite() || self.latitude.abs() > MAX_LATITUDE {
            return Err(GeoError::invalid(format!(
                "latitude {} of '{}' is outside ±{MAX_LATITUDE}",
                self.latitude, self.name
            )));
        }
        if !self.longitude.is_finite() || self.longitude.abs() > MAX_LONGITUDE {
            return Err(GeoError::invalid(format!(
                "longitude {} of '{}' is outside ±{MAX_LONGITUDE}",
                self.longitude, self.name
            )));
        }
        Ok(())
    }
}

/// A coordinate pair as the store reports it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub longitude: f64,
    pub latitude: f64,
}

/// Longitude first, six decimals: the order the store uses.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.longitude, self.latitude)
    }
}

// -----------------------------------------------------------------------------
// GEO-SETS
// -----------------------------------------------------------------------------

/// The two geo-sets this tool manages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeoSet {
    Cities,
    Peaks,
}

impl GeoSet {
    /// Export order: cities first, then peaks.
    pub const ALL: [GeoSet; 2] = [GeoSet::Cities, GeoSet::Peaks];

    /// Key of the sorted set in the store.
    pub fn key(self) -> &'static str {
        match self {
            GeoSet::Cities => "cities",
            GeoSet::Peaks => "peaks",
        }
    }

    /// Singular noun used in messages ("unknown city: …").
    pub fn noun(self) -> &'static str {
        match self {
            GeoSet::Cities => "city",
            GeoSet::Peaks => "peak",
        }
    }
}

impl fmt::Display for GeoSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// -----------------------------------------------------------------------------
// QUERIES
// -----------------------------------------------------------------------------

/// Parameters of a radius query around a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusQuery {
    pub radius_km: f64,
    /// Caps the number of hits (`COUNT n`); `None` returns everything in range.
    pub limit: Option<usize>,
}

impl RadiusQuery {
    pub const DEFAULT_RADIUS_KM: f64 = 200.0;

    pub fn new(radius_km: f64) -> Self {
        Self {
            radius_km,
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.radius_km.is_finite() || self.radius_km <= 0.0 {
            return Err(GeoError::invalid(format!(
                "radius must be a positive number of kilometres, got {}",
                self.radius_km
            )));
        }
        if self.limit == Some(0) {
            return Err(GeoError::invalid("limit must be at least 1"));
        }
        Ok(())
    }
}

impl Default for RadiusQuery {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RADIUS_KM)
    }
}

/// One member found by a radius query, nearest first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    pub name: String,
    pub distance_km: f64,
}

/// Result of a proximity search: the origin city and the peaks around it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Proximity {
    pub origin: Location,
    pub radius_km: f64,
    pub hits: Vec<Hit>,
}
