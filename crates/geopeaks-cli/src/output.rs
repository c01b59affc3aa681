//! Terminal rendering for command results.

use geopeaks_core::{Location, Proximity, SeedReport};
use std::fmt::Write;

/// `coordinates for <city>: <lon>, <lat>`
pub fn lookup_text(loc: &Location) -> String {
    format!("coordinates for {}: {}", loc.name(), loc.position())
}

/// Header line plus one numbered line per peak, distances rounded to whole km.
pub fn proximity_text(p: &Proximity) -> String {
    let mut out = format!("Peaks closest to {} in the database:\n", p.origin.name());
    for (i, hit) in p.hits.iter().enumerate() {
        // writing into a String cannot fail
        let _ = writeln!(out, "({}) {}, {:.0} km", i + 1, hit.name, hit.distance_km);
    }
    out
}

pub fn seed_text(report: &SeedReport) -> String {
    format!(
        "Added {} new cities and {} new peaks",
        report.cities, report.peaks
    )
}
