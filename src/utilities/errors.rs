//! Error types shared by the storage and configuration layers.

use thiserror::Error;

/// Errors raised by profile storage backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// SQLite operation failed.
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A stored JSON column could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The database file or its directory could not be prepared.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored timestamp was not valid RFC 3339.
    #[error("Invalid stored timestamp '{value}': {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The blocking task running a storage call did not complete.
    #[error("Storage task failed: {0}")]
    Task(String),
}

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `PORT` was set but is not a valid port number.
    #[error("Invalid PORT value '{0}'")]
    InvalidPort(String),

    /// `PROFILE_STORE` named an unknown backend.
    #[error("Unknown PROFILE_STORE '{0}' (expected \"memory\" or \"sqlite\")")]
    UnknownStore(String),
}
