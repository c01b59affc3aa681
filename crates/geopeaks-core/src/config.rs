// crates/geopeaks-core/src/config.rs

//! Settings loader.
//!
//! Uses Figment to merge, lowest priority first: built-in defaults, a TOML
//! file (an explicit path, or `geopeaks.toml` in the working directory or
//! its nearest ancestor), then `GEOPEAKS_*` environment variables. The CLI
//! applies its own flags on top and calls [`Settings::validate`] last.

use crate::error::{GeoError, Result};
use crate::export::Palette;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "geopeaks.toml";
pub const ENV_PREFIX: &str = "GEOPEAKS_";

/// Runtime settings for the CLI and the store connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Store address, e.g. `redis://localhost:6379`.
    pub redis_url: String,
    /// Logical database selected after connecting.
    pub db: i64,
    /// Default radius for `find`, in kilometres.
    pub radius_km: f64,
    /// CSV marker colour for cities.
    pub city_color: String,
    /// CSV marker colour for peaks.
    pub peak_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        let palette = Palette::default();
        Self {
            redis_url: "redis://localhost:6379".to_string(),
            db: 1,
            radius_km: 200.0,
            city_color: palette.cities,
            peak_color: palette.peaks,
        }
    }
}

impl Settings {
    /// Loads settings from defaults, the TOML file and the environment.
    ///
    /// An explicit `path` must exist; the default `geopeaks.toml` is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let toml = match path {
            Some(p) => {
                if !p.exists() {
                    return Err(GeoError::config(format!(
                        "config file not found: {}",
                        p.display()
                    )));
                }
                Toml::file(p)
            }
            None => Toml::file(DEFAULT_CONFIG_FILE),
        };

        Figment::from(Serialized::defaults(Settings::default()))
            .merge(toml)
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| GeoError::config(e.to_string()))
    }

    /// Marker colours for the CSV export.
    pub fn palette(&self) -> Palette {
        Palette {
            cities: self.city_color.clone(),
            peaks: self.peak_color.clone(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let schemes = ["redis://", "unix://"];
        if !schemes.iter().any(|s| self.redis_url.starts_with(s)) {
            return Err(GeoError::config(format!(
                "redis_url '{}' must start with one of: {}",
                self.redis_url,
                schemes.join(", ")
            )));
        }

        if self.db < 0 {
            return Err(GeoError::config(format!(
                "db must be a non-negative index, got {}",
                self.db
            )));
        }

        if !self.radius_km.is_finite() || self.radius_km <= 0.0 {
            return Err(GeoError::config(format!(
                "radius_km must be positive, got {}",
                self.radius_km
            )));
        }

        for (field, value) in [
            ("city_color", &self.city_color),
            ("peak_color", &self.peak_color),
        ] {
            if !is_hex_color(value) {
                return Err(GeoError::config(format!(
                    "{field} '{value}' is not a #RRGGBB colour"
                )));
            }
        }

        Ok(())
    }
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}
