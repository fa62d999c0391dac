use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading items from a source.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The data file could not be read (missing, permission denied, ...).
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file is not a valid item document.
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
