use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the persistence client.
///
/// Domain variants carry the exact message shown to API callers.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("failed to access database file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("database file {path:?} is malformed: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode database: {0}")]
    Encode(#[source] serde_json::Error),
}
