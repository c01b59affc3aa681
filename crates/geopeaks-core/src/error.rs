// crates/geopeaks-core/src/error.rs
use thiserror::Error;

/// Errors produced by the geo index, the store client and the exporters.
#[derive(Debug, Error)]
pub enum GeoError {
    /// The store rejected a command or the connection failed.
    #[error("store error: {0}")]
    Store(#[from] redis::RedisError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A member that was asked for by name is not in its geo-set.
    #[error("{0}")]
    NotFound(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl GeoError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn invalid<S: Into<String>>(message: S) -> Self {
        Self::InvalidData(message.into())
    }
}

pub type Result<T> = std::result::Result<T, GeoError>;
