//! Typed key/value repository over browser localStorage.
//!
//! Pages read and write their JSON blobs only through [`Repository`], so the
//! persistence backend can be swapped in one place.
//!
//! ```rust,ignore
//! let repo = local_repository();
//! let apps: Vec<Application> = repo.get_or_default(APPLICATIONS_KEY);
//! repo.set(APPLICATIONS_KEY, &apps)?;
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;
use web_sys::window;

use super::error::AppError;

/// Raw string storage
pub trait KeyValueStore {
    fn get_raw(&self, key: &str) -> Option<String>;
    fn set_raw(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str);
}

/// `window.localStorage`, or a page-lifetime [`MemoryStore`] when the
/// browser refuses storage (private mode, disabled cookies).
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

thread_local! {
    static FALLBACK: MemoryStore = MemoryStore::default();
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn read_item(storage: Option<web_sys::Storage>, key: &str) -> Option<String> {
    match storage {
        Some(storage) => storage.get_item(key).ok()?,
        None => FALLBACK.with(|m| m.get_raw(key)),
    }
}

fn write_item(storage: Option<web_sys::Storage>, key: &str, value: &str) -> Result<(), AppError> {
    match storage {
        Some(storage) => storage.set_item(key, value).map_err(|_| AppError::StorageWrite {
            key: key.to_string(),
        }),
        None => {
            log::debug!("localStorage unavailable, keeping `{}` in memory", key);
            FALLBACK.with(|m| m.set_raw(key, value))
        }
    }
}

fn remove_item(storage: Option<web_sys::Storage>, key: &str) {
    match storage {
        Some(storage) => {
            let _ = storage.remove_item(key);
        }
        None => FALLBACK.with(|m| m.remove(key)),
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_raw(&self, key: &str) -> Option<String> {
        read_item(get_local_storage(), key)
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), AppError> {
        write_item(get_local_storage(), key, value)
    }

    fn remove(&self, key: &str) {
        remove_item(get_local_storage(), key);
    }
}

/// In-memory store: the localStorage fallback, and the store used in tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// JSON-typed view over a [`KeyValueStore`]
#[derive(Debug, Default)]
pub struct Repository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Repository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Decoded value, or `None` when the key is missing or its JSON is corrupt.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("discarding corrupt local storage entry `{}`: {}", key, e);
                None
            }
        }
    }

    pub fn get_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.get(key).unwrap_or_default()
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), AppError> {
        let json = serde_json::to_string(value)?;
        self.store.set_raw(key, &json)
    }

    pub fn remove(&self, key: &str) {
        self.store.remove(key);
    }
}

/// Repository backed by the browser's localStorage
pub fn local_repository() -> Repository<BrowserStorage> {
    Repository::new(BrowserStorage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Blob {
        role: String,
        visits: u32,
    }

    #[test]
    fn test_set_then_get() {
        let repo = Repository::new(MemoryStore::default());
        let blob = Blob {
            role: "inspector".into(),
            visits: 3,
        };
        repo.set("session", &blob).unwrap();
        assert_eq!(repo.get::<Blob>("session"), Some(blob));
    }

    #[test]
    fn test_missing_key_is_none() {
        let repo = Repository::new(MemoryStore::default());
        assert_eq!(repo.get::<Blob>("nothing"), None);
        assert_eq!(repo.get_or_default::<Vec<String>>("nothing"), Vec::<String>::new());
    }

    #[test]
    fn test_corrupt_json_falls_back_to_default() {
        let store = MemoryStore::default();
        store.set_raw("session", "{not json").unwrap();
        let repo = Repository::new(store);
        assert_eq!(repo.get::<Blob>("session"), None);
        assert_eq!(repo.get_or_default::<Blob>("session"), Blob::default());
    }

    #[test]
    fn test_without_local_storage_values_persist_in_memory() {
        assert_eq!(read_item(None, "fallback_key"), None);
        write_item(None, "fallback_key", "[1,2]").unwrap();
        assert_eq!(read_item(None, "fallback_key").as_deref(), Some("[1,2]"));
        remove_item(None, "fallback_key");
        assert_eq!(read_item(None, "fallback_key"), None);
    }

    #[test]
    fn test_remove() {
        let repo = Repository::new(MemoryStore::default());
        repo.set("k", &1u32).unwrap();
        repo.remove("k");
        assert_eq!(repo.get::<u32>("k"), None);
    }
}
