// crates/geopeaks-core/src/index.rs

//! # Geo Index
//!
//! The operations the CLI exposes, each a thin wrapper over one or two
//! [`GeoStore`] calls. Exporting lives in [`crate::export`].

use crate::catalog;
use crate::error::{GeoError, Result};
use crate::model::{GeoSet, Location, Proximity, RadiusQuery};
use crate::traits::GeoStore;
use tracing::{debug, info};

/// Number of members newly added per geo-set by [`GeoIndex::seed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub cities: usize,
    pub peaks: usize,
}

impl SeedReport {
    pub fn total(&self) -> usize {
        self.cities + self.peaks
    }
}

/// Cities-and-peaks index over any [`GeoStore`].
pub struct GeoIndex<S: GeoStore> {
    store: S,
}

impl<S: GeoStore> GeoIndex<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// **Seed:** writes the compiled-in catalogue, one `GEOADD` per set.
    ///
    /// Every record is validated before the first command is sent. Seeding
    /// twice is harmless; the second run reports zero new members.
    pub fn seed(&mut self) -> Result<SeedReport> {
        catalog::validate()?;

        let report = SeedReport {
            cities: self.add(GeoSet::Cities, catalog::locations(GeoSet::Cities))?,
            peaks: self.add(GeoSet::Peaks, catalog::locations(GeoSet::Peaks))?,
        };
        info!(
            cities = report.cities,
            peaks = report.peaks,
            "seeded catalogue"
        );
        Ok(report)
    }

    /// Adds arbitrary locations to a set.
    pub fn add(&mut self, set: GeoSet, locations: &[Location]) -> Result<usize> {
        self.store.add(set.key(), locations)
    }

    /// **Lookup:** position of a city.
    ///
    /// The name is first mapped to its catalogue spelling; an unknown member
    /// is a [`GeoError::NotFound`].
    pub fn lookup(&mut self, city: &str) -> Result<Location> {
        self.locate(GeoSet::Cities, city)
    }

    /// Position of a member of any set.
    pub fn locate(&mut self, set: GeoSet, name: &str) -> Result<Location> {
        let name = catalog::canonical_name(set, name);
        if name.trim().is_empty() {
            return Err(GeoError::invalid(format!("{} name cannot be empty", set.noun())));
        }

        match self.store.position(set.key(), name)? {
            Some(pos) => {
                debug!(set = %set, name, %pos, "resolved");
                Ok(Location::at(name, pos))
            }
            None => Err(GeoError::NotFound(format!("unknown {}: {name}", set.noun()))),
        }
    }

    /// **Find:** peaks within `query.radius_km` of a city, nearest first.
    pub fn find_peaks(&mut self, city: &str, query: &RadiusQuery) -> Result<Proximity> {
        query.validate()?;
        let origin = self.lookup(city)?;
        let hits = self
            .store
            .radius(GeoSet::Peaks.key(), origin.position(), query)?;
        debug!(origin = %origin.name, hits = hits.len(), "radius query");

        Ok(Proximity {
            origin,
            radius_km: query.radius_km,
            hits,
        })
    }

    /// Every member of a set with its stored position, in store order.
    ///
    /// Members removed between listing and lookup are skipped.
    pub fn locations(&mut self, set: GeoSet) -> Result<Vec<Location>> {
        let names = self.store.members(set.key())?;
        let mut out = Vec::with_capacity(names.len());
        for name in names {
            match self.store.position(set.key(), &name)? {
                Some(pos) => out.push(Location::at(name, pos)),
                None => tracing::warn!(set = %set, %name, "member vanished before GEOPOS, skipping"),
            }
        }
        Ok(out)
    }

    /// **Flush:** deletes every key of the selected database.
    pub fn flush(&mut self) -> Result<()> {
        self.store.flush()?;
        info!("flushed database");
        Ok(())
    }
}
