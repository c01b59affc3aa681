//! In-memory `GeoStore` double shared by the integration tests.
#![allow(dead_code)]

use geopeaks_core::{GeoStore, Hit, Location, Position, RadiusQuery, Result};
use std::collections::BTreeMap;

/// Keeps members per set in name order and answers radius queries with
/// haversine distances, which is close enough to the real store for the
/// distances these tests care about.
#[derive(Default)]
pub struct MemoryStore {
    sets: BTreeMap<String, BTreeMap<String, Position>>,
    /// Members listed by `members` but without a position, as if they were
    /// removed between `ZRANGE` and `GEOPOS`.
    ghosts: Vec<(String, String)>,
    /// Command log, one entry per trait call.
    pub calls: Vec<&'static str>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ghost(mut self, set: &str, name: &str) -> Self {
        self.ghosts.push((set.to_string(), name.to_string()));
        self
    }

    pub fn len(&self, set: &str) -> usize {
        self.sets.get(set).map_or(0, BTreeMap::len)
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }
}

fn distance_km(a: Position, b: Position) -> f64 {
    haversine::distance(
        haversine::Location {
            latitude: a.latitude,
            longitude: a.longitude,
        },
        haversine::Location {
            latitude: b.latitude,
            longitude: b.longitude,
        },
        haversine::Units::Kilometers,
    )
}

impl GeoStore for MemoryStore {
    fn ping(&mut self) -> Result<()> {
        self.calls.push("PING");
        Ok(())
    }

    fn add(&mut self, set: &str, locations: &[Location]) -> Result<usize> {
        self.calls.push("GEOADD");
        let members = self.sets.entry(set.to_string()).or_default();
        let mut added = 0;
        for loc in locations {
            if members
                .insert(loc.name().to_string(), loc.position())
                .is_none()
            {
                added += 1;
            }
        }
        Ok(added)
    }

    fn position(&mut self, set: &str, member: &str) -> Result<Option<Position>> {
        self.calls.push("GEOPOS");
        Ok(self.sets.get(set).and_then(|m| m.get(member)).copied())
    }

    fn radius(&mut self, set: &str, center: Position, query: &RadiusQuery) -> Result<Vec<Hit>> {
        self.calls.push("GEORADIUS");
        let mut hits: Vec<Hit> = self
            .sets
            .get(set)
            .into_iter()
            .flatten()
            .map(|(name, pos)| Hit {
                name: name.clone(),
                distance_km: distance_km(center, *pos),
            })
            .filter(|h| h.distance_km <= query.radius_km)
            .collect();
        hits.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        if let Some(n) = query.limit {
            hits.truncate(n);
        }
        Ok(hits)
    }

    fn members(&mut self, set: &str) -> Result<Vec<String>> {
        self.calls.push("ZRANGE");
        let mut names: Vec<String> = self
            .sets
            .get(set)
            .into_iter()
            .flat_map(|m| m.keys().cloned())
            .collect();
        names.extend(
            self.ghosts
                .iter()
                .filter(|(s, _)| s == set)
                .map(|(_, n)| n.clone()),
        );
        Ok(names)
    }

    fn flush(&mut self) -> Result<()> {
        self.calls.push("FLUSHDB");
        self.sets.clear();
        Ok(())
    }
}
