use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{ItemCollection, ItemSource, Result};

/// In-memory item source for testing.
///
/// Clones share the same underlying collection, so a test can swap the
/// content after handing a clone to the application.
#[derive(Clone, Default)]
pub struct InMemoryItemSource {
    collection: Arc<RwLock<ItemCollection>>,
}

impl InMemoryItemSource {
    /// Creates a source serving `collection`.
    pub fn new(collection: ItemCollection) -> Self {
        Self {
            collection: Arc::new(RwLock::new(collection)),
        }
    }

    /// Replaces the served collection.
    pub async fn replace(&self, collection: ItemCollection) {
        *self.collection.write().await = collection;
    }
}

#[async_trait]
impl ItemSource for InMemoryItemSource {
    async fn load(&self) -> Result<ItemCollection> {
        Ok(self.collection.read().await.clone())
    }
}
