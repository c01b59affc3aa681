// crates/geopeaks-core/src/catalog.rs

//! # Catalogue
//!
//! The compiled-in seed data: six Alpine-region cities and six peaks.
//! Coordinates are (latitude, longitude) in decimal degrees.

use crate::error::Result;
use crate::model::{GeoSet, Location};
use crate::traits::NameMatch;

pub static CITIES: [Location; 6] = [
    Location::fixed("Zurich", 47.377_549_9, 8.466_675_5),
    Location::fixed("Milan", 45.462_889, 9.037_649_8),
    Location::fixed("Geneva", 46.205_083_6, 6.109_069_2),
    Location::fixed("Salzburg", 47.802_904, 12.986_390_5),
    Location::fixed("Nice", 43.703_293_2, 7.182_777_5),
    Location::fixed("Innsbruck", 47.265_429_6, 11.392_768_5),
];

pub static PEAKS: [Location; 6] = [
    Location::fixed("Mont Blanc", 45.832_650_4, 6.847_665_3),
    Location::fixed("Monte Rosa", 45.937_055_1, 7.850_115_7),
    Location::fixed("Matterhorn", 45.976_602_9, 7.640_942_3),
    Location::fixed("Grossglockner", 47.074_184_6, 12.694_676_1),
    Location::fixed("Wildspitze", 46.885_456_3, 10.849_749_9),
    Location::fixed("Eiger", 46.577_5, 8.005_2),
];

/// Catalogue records seeded into `set`.
pub fn locations(set: GeoSet) -> &'static [Location] {
    match set {
        GeoSet::Cities => &CITIES,
        GeoSet::Peaks => &PEAKS,
    }
}

/// Validates every record of both sets.
///
/// Run before connecting so a bad record never reaches the store.
pub fn validate() -> Result<()> {
    for set in GeoSet::ALL {
        for loc in locations(set) {
            loc.validate()?;
        }
    }
    Ok(())
}

/// Maps a user-typed name onto the catalogue spelling of a member of `set`.
///
/// Matching ignores case and accents (`zürich` → `Zurich`). Names that are not
/// in the catalogue are returned untouched, since the store may hold members
/// added by other tools under any spelling.
pub fn canonical_name(set: GeoSet, query: &str) -> &str {
    match locations(set).iter().find(|l| l.is_named(query)) {
        Some(loc) => loc.name(),
        None => query,
    }
}
