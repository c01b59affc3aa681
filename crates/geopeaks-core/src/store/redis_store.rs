// crates/geopeaks-core/src/store/redis_store.rs
use crate::error::{GeoError, Result};
use crate::model::{Hit, Location, Position, RadiusQuery};
use crate::traits::GeoStore;
use redis::geo::{Coord, RadiusOptions, RadiusOrder, RadiusSearchResult, Unit};
use redis::{Commands, Connection, IntoConnectionInfo};
use tracing::debug;

/// [`GeoStore`] backed by a synchronous Redis connection.
///
/// Each trait method issues exactly one command: `GEOADD`, `GEOPOS`,
/// `GEORADIUS … WITHDIST ASC`, `ZRANGE 0 -1` or `FLUSHDB`.
pub struct RedisStore {
    conn: Connection,
}

impl RedisStore {
    /// Opens a connection to `url`, selects database `db` and pings it.
    ///
    /// A database index in the URL path is overridden by `db`.
    pub fn connect(url: &str, db: i64) -> Result<Self> {
        let mut info = url.into_connection_info()?;
        info.redis.db = db;
        debug!(addr = ?info.addr, db, "connecting to store");

        let client = redis::Client::open(info)?;
        let conn = client.get_connection()?;

        let mut store = Self { conn };
        store.ping()?;
        Ok(store)
    }
}

impl GeoStore for RedisStore {
    fn ping(&mut self) -> Result<()> {
        let reply: String = redis::cmd("PING").query(&mut self.conn)?;
        debug!(%reply, "PING");
        Ok(())
    }

    #[tracing::instrument(name = "geoadd", level = "debug", skip(self, locations), fields(count = locations.len()))]
    fn add(&mut self, set: &str, locations: &[Location]) -> Result<usize> {
        if locations.is_empty() {
            return Ok(0);
        }
        let members: Vec<(Coord<f64>, &str)> = locations
            .iter()
            .map(|l| (Coord::lon_lat(l.longitude, l.latitude), l.name()))
            .collect();
        let added: usize = self.conn.geo_add(set, members)?;
        Ok(added)
    }

    #[tracing::instrument(name = "geopos", level = "debug", skip(self))]
    fn position(&mut self, set: &str, member: &str) -> Result<Option<Position>> {
        let positions: Vec<Option<Coord<f64>>> = self.conn.geo_pos(set, member)?;
        Ok(positions.into_iter().next().flatten().map(|c| Position {
            longitude: c.longitude,
            latitude: c.latitude,
        }))
    }

    #[tracing::instrument(name = "georadius", level = "debug", skip(self))]
    fn radius(&mut self, set: &str, center: Position, query: &RadiusQuery) -> Result<Vec<Hit>> {
        let mut options = RadiusOptions::default()
            .with_dist()
            .order(RadiusOrder::Asc);
        if let Some(n) = query.limit {
            options = options.limit(n);
        }

        let results: Vec<RadiusSearchResult> = self.conn.geo_radius(
            set,
            center.longitude,
            center.latitude,
            query.radius_km,
            Unit::Kilometers,
            options,
        )?;

        results
            .into_iter()
            .map(|r| {
                let distance_km = r.dist.ok_or_else(|| {
                    GeoError::invalid(format!("store returned no distance for '{}'", r.name))
                })?;
                Ok(Hit {
                    name: r.name,
                    distance_km,
                })
            })
            .collect()
    }

    fn members(&mut self, set: &str) -> Result<Vec<String>> {
        let names: Vec<String> = self.conn.zrange(set, 0, -1)?;
        debug!(set, count = names.len(), "ZRANGE");
        Ok(names)
    }

    fn flush(&mut self) -> Result<()> {
        redis::cmd("FLUSHDB").query::<()>(&mut self.conn)?;
        Ok(())
    }
}
