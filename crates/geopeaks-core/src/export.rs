// crates/geopeaks-core/src/export.rs

//! # CSV Export
//!
//! Writes both geo-sets to a CSV file that geojson.io can import as point
//! markers: `name,lat,lon,marker-color`, cities first, then peaks.

use crate::error::{GeoError, Result};
use crate::index::GeoIndex;
use crate::model::{GeoSet, Location};
use crate::traits::GeoStore;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

pub const CSV_HEADER: [&str; 4] = ["name", "lat", "lon", "marker-color"];

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

/// Marker colour per geo-set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub cities: String,
    pub peaks: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            cities: "#CD0000".to_string(),
            peaks: "#0000CD".to_string(),
        }
    }
}

impl Palette {
    pub fn color_for(&self, set: GeoSet) -> &str {
        match set {
            GeoSet::Cities => &self.cities,
            GeoSet::Peaks => &self.peaks,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl CompressionMode {
    /// Gzip for `*.gz` paths, plain text otherwise.
    pub fn for_path(path: &Path) -> Self {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("gz") => CompressionMode::Gzip,
            _ => CompressionMode::None,
        }
    }
}

// -----------------------------------------------------------------------------
// EXPORT
// -----------------------------------------------------------------------------

impl<S: GeoStore> GeoIndex<S> {
    /// **Export:** creates (or truncates) `path` and writes every member.
    ///
    /// Returns the number of data rows written (the header is not counted).
    pub fn export_to_path(&mut self, path: impl AsRef<Path>, palette: &Palette) -> Result<usize> {
        let path = path.as_ref();
        let compression = CompressionMode::for_path(path);

        let rows = match compression {
            #[cfg(feature = "compact")]
            CompressionMode::Gzip => {
                let encoder = GzEncoder::new(create(path)?, Compression::default());
                let (rows, encoder) = self.export_csv(encoder, palette)?;
                encoder.finish()?.flush()?;
                rows
            }
            #[cfg(not(feature = "compact"))]
            CompressionMode::Gzip => {
                return Err(GeoError::invalid(
                    "gzip output requested but 'compact' disabled",
                ));
            }
            CompressionMode::None => {
                let (rows, mut writer) = self.export_csv(create(path)?, palette)?;
                writer.flush()?;
                rows
            }
        };

        info!(path = %path.display(), rows, ?compression, "exported");
        Ok(rows)
    }

    /// Writes the CSV document into `sink` and hands the sink back so the
    /// caller can finish or flush it.
    pub fn export_csv<W: Write>(&mut self, sink: W, palette: &Palette) -> Result<(usize, W)> {
        let mut csv = csv::Writer::from_writer(sink);
        csv.write_record(CSV_HEADER)?;

        let mut rows = 0;
        for set in GeoSet::ALL {
            let color = palette.color_for(set);
            for loc in self.locations(set)? {
                write_row(&mut csv, &loc, color)?;
                rows += 1;
            }
        }

        let sink = csv
            .into_inner()
            .map_err(|e| GeoError::Io(e.into_error()))?;
        Ok((rows, sink))
    }
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    Ok(BufWriter::new(File::create(path)?))
}

/// One CSV line: name, latitude and longitude with six decimals, colour.
fn write_row<W: Write>(csv: &mut csv::Writer<W>, loc: &Location, color: &str) -> Result<()> {
    let lat = format!("{:.6}", loc.latitude);
    let lon = format!("{:.6}", loc.longitude);
    csv.write_record([loc.name(), lat.as_str(), lon.as_str(), color])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(rows: &[(Location, &str)]) -> String {
        let mut csv = csv::Writer::from_writer(Vec::new());
        csv.write_record(CSV_HEADER).unwrap();
        for (loc, color) in rows {
            write_row(&mut csv, loc, color).unwrap();
        }
        String::from_utf8(csv.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn rows_use_six_decimals_latitude_first() {
        let out = render(&[(Location::new("Zurich", 47.377_55, 8.466_68), "#CD0000")]);
        assert_eq!(
            out,
            "name,lat,lon,marker-color\nZurich,47.377550,8.466680,#CD0000\n"
        );
    }

    #[test]
    fn names_with_commas_or_quotes_are_quoted() {
        let out = render(&[
            (Location::new("Piz Bernina, east", 46.38, 9.9), "#0000CD"),
            (Location::new("The \"Horn\"", 46.0, 7.6), "#0000CD"),
        ]);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[1], "\"Piz Bernina, east\",46.380000,9.900000,#0000CD");
        assert_eq!(lines[2], "\"The \"\"Horn\"\"\",46.000000,7.600000,#0000CD");
    }

    #[test]
    fn compression_follows_extension() {
        assert_eq!(
            CompressionMode::for_path(Path::new("out/alps.csv.gz")),
            CompressionMode::Gzip
        );
        assert_eq!(
            CompressionMode::for_path(Path::new("alps.CSV.GZ")),
            CompressionMode::Gzip
        );
        assert_eq!(
            CompressionMode::for_path(Path::new("alps.csv")),
            CompressionMode::None
        );
        assert_eq!(CompressionMode::for_path(Path::new("alps")), CompressionMode::None);
    }

    #[test]
    fn palette_defaults() {
        let p = Palette::default();
        assert_eq!(p.color_for(GeoSet::Cities), "#CD0000");
        assert_eq!(p.color_for(GeoSet::Peaks), "#0000CD");
    }
}
