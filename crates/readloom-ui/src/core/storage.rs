//! Best-effort key-value persistence over browser local storage.
//!
//! # Design
//! - Values are JSON; callers never see serialization machinery.
//! - Persistence is advisory: failures (quota, disabled storage, corrupt
//!   values) are logged and swallowed, never propagated. A caller must not
//!   assume a `set` stuck.
//! - A trait seam keeps the theme store and preference helpers testable on
//!   the host without a browser.

use gloo::console;
use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Small JSON-value store with swallow-on-failure semantics.
pub trait KeyValueStore {
    /// Persist `value` under `key`. A no-op when serialization or the
    /// underlying storage fails.
    fn set<T: Serialize>(&self, key: &str, value: &T);

    /// Read the value stored under `key`, or `None` when the key is missing
    /// or the stored value does not deserialize as `T`.
    fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T>;

    /// Read the value stored under `key`, falling back to `default` on any
    /// failure.
    fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    /// Remove the value stored under `key`, if any.
    fn remove(&self, key: &str);

    /// Remove every stored value.
    fn clear(&self);

    /// Whether a readable value exists under `key`.
    fn has(&self, key: &str) -> bool {
        self.get::<serde_json::Value>(key).is_some()
    }
}

/// Browser `localStorage` backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn set<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(err) = LocalStorage::set(key, value) {
            log_storage_error("set", key, &err.to_string());
        }
    }

    fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match LocalStorage::get::<T>(key) {
            Ok(value) => Some(value),
            Err(StorageError::KeyNotFound(_)) => None,
            Err(err) => {
                log_storage_error("get", key, &err.to_string());
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }

    fn clear(&self) {
        LocalStorage::clear();
    }
}

fn log_storage_error(operation: &'static str, key: &str, detail: &str) {
    console::error!("storage operation failed", operation, key.to_string(), detail.to_string());
}

/// In-memory backend for host-side tests and the native stub binary.
///
/// Clones share the same map, so a "fresh" consumer constructed over a clone
/// observes earlier writes the way a reloaded page observes `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn set<T: Serialize>(&self, key: &str, value: &T) {
        if let Ok(json) = serde_json::to_string(value) {
            self.entries.borrow_mut().insert(key.to_string(), json);
        }
    }

    fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let entries = self.entries.borrow();
        let raw = entries.get(key)?;
        serde_json::from_str(raw).ok()
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }

    fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyValueStore, MemoryStore};

    #[test]
    fn set_then_get_round_trips() {
        let store = MemoryStore::new();
        store.set("count", &41_u32);
        assert_eq!(store.get::<u32>("count"), Some(41));
        assert!(store.has("count"));
    }

    #[test]
    fn get_or_falls_back_on_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get_or("missing", 7_u32), 7);
        assert!(!store.has("missing"));
    }

    #[test]
    fn get_or_falls_back_on_type_mismatch() {
        let store = MemoryStore::new();
        store.set("theme", &"dark");
        assert_eq!(store.get::<u64>("theme"), None);
        assert_eq!(store.get_or("theme", 3_u64), 3);
    }

    #[test]
    fn clones_share_entries() {
        let store = MemoryStore::new();
        store.set("theme", &"light");
        let reloaded = store.clone();
        assert_eq!(reloaded.get::<String>("theme").as_deref(), Some("light"));
    }

    #[test]
    fn remove_and_clear_drop_values() {
        let store = MemoryStore::new();
        store.set("a", &1_u8);
        store.set("b", &2_u8);
        store.remove("a");
        assert!(!store.has("a"));
        assert!(store.has("b"));
        store.clear();
        assert!(!store.has("b"));
    }
}
