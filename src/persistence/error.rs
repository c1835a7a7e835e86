use std::path::PathBuf;

use thiserror::Error;

/// Failures of the persisted cache file
///
/// None of these reach store callers; the writer logs them and the loader treats
/// them as "nothing persisted".
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize cache state: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Corrupt cache file {path}: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    #[error("Cache version mismatch (expected {expected}, found {found})")]
    VersionMismatch { expected: u32, found: u32 },
}

pub type Result<T> = std::result::Result<T, PersistenceError>;
