use async_trait::async_trait;

use crate::{ItemCollection, Result};

/// A place items are loaded from.
///
/// Implementations perform a single attempt per call and must not cache:
/// every `load` reflects the source's current content.
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// Loads the full item collection.
    async fn load(&self) -> Result<ItemCollection>;
}

/// Loads items from `source`, substituting an empty collection on failure.
///
/// Failures are logged and counted but never propagated.
pub async fn load_or_empty<S: ItemSource + ?Sized>(source: &S) -> ItemCollection {
    match source.load().await {
        Ok(collection) => {
            metrics::counter!("catalog_loads_total").increment(1);
            tracing::debug!(count = collection.len(), "loaded items");
            collection
        }
        Err(err) => {
            metrics::counter!("catalog_load_failures_total").increment(1);
            tracing::error!(error = %err, "failed to load items, serving empty collection");
            ItemCollection::empty()
        }
    }
}
