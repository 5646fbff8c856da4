//! Network-subsystem error type.

use thiserror::Error;

/// Errors produced by `gr-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The spatial index holds no nodes: the dataset failed to load or every
    /// row was filtered out.  Callers must treat this as "service not ready".
    #[error("road network index is empty")]
    Unavailable,

    #[error("dataset parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
