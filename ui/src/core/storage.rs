//! Local persistence helpers. A small key/value seam over `localStorage` so the
//! draft and theme code can be exercised against an in-memory store in tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
    #[error("stored value is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}

/// String key/value persistence, last write wins.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// In-memory store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// The browser's `localStorage`. Native builds fall back to a per-thread
/// memory store so views still render outside the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window
            .local_storage()
            .map_err(|err| StorageError::Access(format!("{err:?}")))?
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| StorageError::Access(format!("{err:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Access(format!("{err:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|err| StorageError::Access(format!("{err:?}")))
    }
}

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static NATIVE_FALLBACK: MemoryStore = MemoryStore::new();
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        NATIVE_FALLBACK.with(|store| store.get(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        NATIVE_FALLBACK.with(|store| store.set(key, value))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        NATIVE_FALLBACK.with(|store| store.remove(key))
    }
}

pub fn load_json<T: DeserializeOwned>(
    store: &impl KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub fn save_json<T: Serialize>(
    store: &impl KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let alias = store.clone();
        alias.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert!(alias.is_empty());
    }

    #[test]
    fn json_helpers_surface_malformed_payloads() {
        let store = MemoryStore::new();
        store.set("draft", "{not json").unwrap();
        let loaded: Result<Option<BTreeMap<String, String>>, _> = load_json(&store, "draft");
        assert!(matches!(loaded, Err(StorageError::Serde(_))));

        let mut map = BTreeMap::new();
        map.insert("name".to_string(), "Thabo".to_string());
        save_json(&store, "draft", &map).unwrap();
        let loaded: Option<BTreeMap<String, String>> = load_json(&store, "draft").unwrap();
        assert_eq!(loaded, Some(map));
    }

    #[test]
    fn missing_key_loads_as_none() {
        let store = MemoryStore::new();
        let loaded: Option<Vec<String>> = load_json(&store, "absent").unwrap();
        assert!(loaded.is_none());
    }
}
