// crates/geopeaks-core/src/store/mod.rs

//! # Store Clients
//!
//! Implementations of [`GeoStore`](crate::traits::GeoStore). Only Redis is
//! supported; the module exists so the connection plumbing stays out of the
//! index logic.

mod redis_store;

pub use redis_store::RedisStore;

use crate::config::Settings;
use crate::error::Result;

/// Connects to the store described by `settings` and checks it answers.
pub fn open(settings: &Settings) -> Result<RedisStore> {
    RedisStore::connect(&settings.redis_url, settings.db)
}
