// crates/geopeaks-core/src/traits.rs
use crate::error::Result;
use crate::model::{Hit, Location, Position, RadiusQuery};
use crate::text::equals_folded;

/// Store abstraction: the handful of geo commands the index needs.
///
/// Everything spatial (geohash encoding, distance, radius scans, ordering)
/// happens on the far side of this trait. Implementors only translate calls
/// into commands and replies into model types.
///
/// The production implementation is [`crate::store::RedisStore`]; tests use
/// an in-memory double.
pub trait GeoStore {
    /// Round-trips a no-op command to prove the connection works.
    fn ping(&mut self) -> Result<()>;

    /// Adds or updates members of `set`. Returns how many members were new.
    fn add(&mut self, set: &str, locations: &[Location]) -> Result<usize>;

    /// Position of `member`, or `None` when the set has no such member.
    fn position(&mut self, set: &str, member: &str) -> Result<Option<Position>>;

    /// Members of `set` within `query.radius_km` of `center`, nearest first,
    /// with their distance in kilometres.
    fn radius(&mut self, set: &str, center: Position, query: &RadiusQuery) -> Result<Vec<Hit>>;

    /// All member names of `set`, in store order.
    fn members(&mut self, set: &str) -> Result<Vec<String>>;

    /// Deletes every key of the selected database.
    fn flush(&mut self) -> Result<()>;
}

/// Name-based matching helpers for types that expose a canonical display name.
///
/// Comparisons go through [`crate::text::fold_key`], so they ignore case, accents and
/// surrounding whitespace.
///
/// # Examples
/// ```rust
/// use geopeaks_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Zürich").is_named("zurich"));
/// assert!(!Place("Monte Rosa").is_named("rosa"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        equals_folded(self.name_str(), q)
    }
}

impl NameMatch for Location {
    fn name_str(&self) -> &str {
        self.name()
    }
}
