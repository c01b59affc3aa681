//! CSV export against the in-memory store.

mod common;

use common::MemoryStore;
use geopeaks_core::{GeoError, GeoIndex, Palette};
use std::fs;
use std::io::Read;

fn seeded() -> GeoIndex<MemoryStore> {
    let mut index = GeoIndex::new(MemoryStore::new());
    index.seed().unwrap();
    index
}

#[test]
fn export_writes_header_then_cities_then_peaks() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("alps.csv");

    let rows = seeded().export_to_path(&path, &Palette::default()).unwrap();
    assert_eq!(rows, 12);

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], "name,lat,lon,marker-color");

    let colors: Vec<_> = lines[1..]
        .iter()
        .map(|l| l.rsplit(',').next().unwrap())
        .collect();
    assert!(colors[..6].iter().all(|c| *c == "#CD0000"));
    assert!(colors[6..].iter().all(|c| *c == "#0000CD"));

    assert!(lines.contains(&"Geneva,46.205084,6.109069,#CD0000"));
    assert!(lines.contains(&"Eiger,46.577500,8.005200,#0000CD"));
}

#[test]
fn export_truncates_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("alps.csv");
    fs::write(&path, "stale\n".repeat(100)).unwrap();

    seeded().export_to_path(&path, &Palette::default()).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert!(!text.contains("stale"));
    assert_eq!(text.lines().count(), 13);
}

#[test]
fn export_uses_custom_palette() {
    let palette = Palette {
        cities: "#111111".into(),
        peaks: "#222222".into(),
    };
    let (_, out) = seeded().export_csv(Vec::new(), &palette).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("#111111").count(), 6);
    assert_eq!(text.matches("#222222").count(), 6);
}

#[test]
fn export_of_empty_store_is_header_only() {
    let mut index = GeoIndex::new(MemoryStore::new());
    let (rows, out) = index.export_csv(Vec::new(), &Palette::default()).unwrap();
    assert_eq!(rows, 0);
    assert_eq!(String::from_utf8(out).unwrap(), "name,lat,lon,marker-color\n");
}

#[test]
fn export_skips_vanished_members() {
    let mut index = GeoIndex::new(MemoryStore::new().with_ghost("cities", "Atlantis"));
    index.seed().unwrap();
    let (rows, out) = index.export_csv(Vec::new(), &Palette::default()).unwrap();
    assert_eq!(rows, 12);
    assert!(!String::from_utf8(out).unwrap().contains("Atlantis"));
}

#[test]
fn export_into_missing_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no/such/dir/alps.csv");
    let err = seeded()
        .export_to_path(&path, &Palette::default())
        .unwrap_err();
    assert!(matches!(err, GeoError::Io(_)));
}

#[cfg(feature = "compact")]
#[test]
fn gz_extension_writes_gzip() {
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("alps.csv");
    let packed = dir.path().join("alps.csv.gz");

    let mut index = seeded();
    index.export_to_path(&plain, &Palette::default()).unwrap();
    index.export_to_path(&packed, &Palette::default()).unwrap();

    let bytes = fs::read(&packed).unwrap();
    assert_eq!(&bytes[..2], &[0x1f, 0x8b]);

    let mut unpacked = String::new();
    flate2::read::GzDecoder::new(&bytes[..])
        .read_to_string(&mut unpacked)
        .unwrap();
    assert_eq!(unpacked, fs::read_to_string(&plain).unwrap());
}
