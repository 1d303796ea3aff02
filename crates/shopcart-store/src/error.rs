//! Store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or saving a document.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The document exists but could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document was read but its content is malformed.
    #[error("Malformed document {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The value could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backend is not usable (e.g. a poisoned lock).
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Whether the error came from decoding existing content.
    pub fn is_malformed(&self) -> bool {
        matches!(self, StoreError::Parse { .. })
    }
}
