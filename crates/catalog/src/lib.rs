//! Item catalog backed by a static JSON document.
//!
//! Items are dynamically shaped JSON values; the only field the catalog
//! inspects is `category`. Sources are re-read on every load.

pub mod error;
pub mod file;
pub mod item;
pub mod memory;
pub mod source;

pub use error::{CatalogError, Result};
pub use file::{DEFAULT_DATA_FILE, FileItemSource};
pub use item::{Item, ItemCollection};
pub use memory::InMemoryItemSource;
pub use source::{ItemSource, load_or_empty};
