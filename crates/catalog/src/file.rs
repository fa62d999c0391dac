use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::{CatalogError, ItemCollection, ItemSource, Result};

/// Default location of the data file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "./data.json";

/// Item source that reads and parses a JSON file on every load.
#[derive(Debug, Clone)]
pub struct FileItemSource {
    path: PathBuf,
}

impl FileItemSource {
    /// Creates a source reading from `path`. The file is not touched until
    /// the first load.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileItemSource {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

#[async_trait]
impl ItemSource for FileItemSource {
    async fn load(&self) -> Result<ItemCollection> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| CatalogError::Read {
                path: self.path.clone(),
                source,
            })?;

        serde_json::from_slice(&bytes).map_err(|source| CatalogError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}
