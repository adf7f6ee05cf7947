//! Type-safe key-value blob storage for the Voyage storefront.
//!
//! Every persisted collection (the cart, bookings, inquiries) lives under a
//! single key as one serialized JSON array. Writers always replace the whole
//! blob; there are no incremental patches.
//!
//! # Example
//!
//! ```rust
//! use voyage_store::{Collection, MemoryStore, Repository};
//!
//! let store = MemoryStore::new();
//! let names: Collection<_, String> = Collection::new(store, "names");
//!
//! names.save(&["ada".to_string()])?;
//! assert_eq!(names.load()?, vec!["ada".to_string()]);
//! # Ok::<(), voyage_store::StoreError>(())
//! ```

mod cache;
mod collection;
mod error;
mod kv;

pub use cache::Cache;
pub use collection::{Collection, Repository};
pub use error::StoreError;
pub use kv::{validate_key, FileStore, KeyValueStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, Collection, FileStore, KeyValueStore, MemoryStore, Repository, StoreError};
}
