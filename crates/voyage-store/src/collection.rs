//! Whole-collection repositories stored under a single key.

use std::marker::PhantomData;

use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use crate::{Cache, KeyValueStore, StoreError};

/// Load/save access to one ordered collection.
///
/// Business logic depends on this trait rather than on a concrete store, so
/// the backing medium can change without touching callers.
pub trait Repository<T> {
    /// Load the full collection in stored order.
    fn load(&self) -> Result<Vec<T>, StoreError>;

    /// Replace the full collection.
    fn save(&self, items: &[T]) -> Result<(), StoreError>;

    /// Read-modify-write the collection.
    ///
    /// The collection is saved only when `f` returns `Ok`; an `Err` leaves
    /// the persisted state untouched.
    fn update<R, E>(&self, f: impl FnOnce(&mut Vec<T>) -> Result<R, E>) -> Result<R, E>
    where
        E: From<StoreError>,
    {
        let mut items = self.load()?;
        let result = f(&mut items)?;
        self.save(&items)?;
        Ok(result)
    }
}

impl<T, R: Repository<T> + ?Sized> Repository<T> for &R {
    fn load(&self) -> Result<Vec<T>, StoreError> {
        (**self).load()
    }

    fn save(&self, items: &[T]) -> Result<(), StoreError> {
        (**self).save(items)
    }
}

/// A collection persisted as one JSON array under `key`.
///
/// A missing key reads as an empty collection, and so does a blob that no
/// longer parses: the corrupt value is logged and left in place until the
/// next save overwrites it.
#[derive(Debug)]
pub struct Collection<S, T> {
    cache: Cache<S>,
    key: String,
    _phantom: PhantomData<fn() -> T>,
}

impl<S: Clone, T> Clone for Collection<S, T> {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
            key: self.key.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<S: KeyValueStore, T> Collection<S, T> {
    /// Bind a collection to `key` in `store`.
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            cache: Cache::new(store),
            key: key.into(),
            _phantom: PhantomData,
        }
    }

    /// The storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Remove the key entirely.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.cache.delete(&self.key)
    }
}

impl<S, T> Repository<T> for Collection<S, T>
where
    S: KeyValueStore,
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> Result<Vec<T>, StoreError> {
        match self.cache.get::<Vec<T>>(&self.key) {
            Ok(items) => Ok(items.unwrap_or_default()),
            Err(e @ (StoreError::Serialize(_) | StoreError::Corrupt { .. })) => {
                warn!(key = %self.key, error = %e, "discarding unreadable collection");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    fn save(&self, items: &[T]) -> Result<(), StoreError> {
        self.cache.set(&self.key, items)
    }
}
