//! Persisted Store Adapter
//!
//! Injected wrapper over browser local storage. Components never touch the
//! global storage API directly; they go through a shared [`StorageBackend`]
//! handle from context, so tests substitute [`MemoryStorage`].
//!
//! Every write is a whole-key overwrite of a JSON blob. There is no
//! versioning and no cross-key atomicity; concurrent tabs are last-writer-wins.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Storage key for the in-progress composition
pub const BUILDER_STATE_KEY: &str = "backpackBuilderState";
/// Storage key for the saved-backpacks collection
pub const SAVED_BACKPACKS_KEY: &str = "savedBackpacks";
/// Storage key for the wishlist collection
pub const WISHLIST_KEY: &str = "wishlist";

/// Recoverable storage failures. Surfaced through a context signal rather
/// than swallowed into the console.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("stored value under \"{key}\" could not be read: {message}")]
    Deserialize { key: String, message: String },
    #[error("value for \"{key}\" could not be serialized: {message}")]
    Serialize { key: String, message: String },
    #[error("write to \"{key}\" failed (storage may be full)")]
    Write { key: String },
}

/// Raw string key-value contract of the adapter
pub trait StorageBackend {
    fn get_raw(&self, key: &str) -> Option<String>;
    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_raw(&self, key: &str);
}

/// Shared backend handle provided via Leptos context
pub type SharedStorage = Arc<dyn StorageBackend + Send + Sync>;

/// Load and deserialize the value under `key`.
///
/// `Ok(None)` means nothing is stored. A malformed stored value returns
/// `Err(Deserialize)` and never panics past this module; callers fall back
/// to a known-good default and surface the error.
pub fn load<T: DeserializeOwned>(
    backend: &dyn StorageBackend,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match backend.get_raw(key) {
        None => Ok(None),
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::Deserialize {
                key: key.to_string(),
                message: e.to_string(),
            }),
    }
}

/// Serialize `value` and overwrite `key` with it
pub fn save<T: Serialize>(
    backend: &dyn StorageBackend,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Serialize {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    backend.set_raw(key, &raw)
}

pub fn remove(backend: &dyn StorageBackend, key: &str) {
    backend.remove_raw(key);
}

/// Browser local storage. A unit struct so the handle stays `Send + Sync`;
/// the storage object is fetched per call (wasm is single-threaded anyway).
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl StorageBackend for LocalStorageBackend {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::Write {
                key: key.to_string(),
            })
    }

    fn remove_raw(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory backend for tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: std::sync::Mutex<std::collections::HashMap<String, String>>,
}

impl StorageBackend for MemoryStorage {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_raw(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BackpackItem, Category, Composition};

    fn item(id: &str, price: u32, quantity: u32) -> BackpackItem {
        BackpackItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            price,
            image: String::new(),
            category: Category::Books,
            subcategory: None,
            quantity,
            size: None,
            color: None,
            already_owned: false,
        }
    }

    #[test]
    fn round_trip_is_identity() {
        let backend = MemoryStorage::default();
        let mut comp = Composition::default();
        comp.child_info.name = "Lina".to_string();
        comp.child_info.grade = "middle-second-year".to_string();
        comp.items.books.push(item("book-7", 950, 3));
        comp.current_step = 5;
        comp.last_completed_step = 4;

        save(&backend, BUILDER_STATE_KEY, &comp).unwrap();
        let loaded: Composition = load(&backend, BUILDER_STATE_KEY).unwrap().unwrap();
        assert_eq!(loaded, comp);
    }

    #[test]
    fn missing_key_loads_as_none() {
        let backend = MemoryStorage::default();
        let loaded: Option<Composition> = load(&backend, BUILDER_STATE_KEY).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn malformed_value_is_an_error_not_a_panic() {
        let backend = MemoryStorage::default();
        backend.set_raw(BUILDER_STATE_KEY, "{not json").unwrap();
        let result: Result<Option<Composition>, _> = load(&backend, BUILDER_STATE_KEY);
        assert!(matches!(result, Err(StorageError::Deserialize { .. })));
    }

    #[test]
    fn shape_mismatch_is_an_error() {
        let backend = MemoryStorage::default();
        backend.set_raw(BUILDER_STATE_KEY, "[1, 2, 3]").unwrap();
        let result: Result<Option<Composition>, _> = load(&backend, BUILDER_STATE_KEY);
        assert!(matches!(result, Err(StorageError::Deserialize { .. })));
    }

    #[test]
    fn remove_clears_the_key() {
        let backend = MemoryStorage::default();
        save(&backend, WISHLIST_KEY, &vec![1, 2, 3]).unwrap();
        remove(&backend, WISHLIST_KEY);
        assert!(backend.get_raw(WISHLIST_KEY).is_none());
    }
}
