//! Repository layer over browser local storage. Every persisted read
//! goes through [`get_json`], which defaults on a missing or corrupt
//! value; writes always replace the full value. Single-tab usage is
//! assumed, so there is no cross-tab coordination.

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;

pub const MATCHES_KEY: &str = "duo_finder_matches";
pub const ROOMS_KEY: &str = "duo_finder_chat_rooms";
pub const MESSAGES_KEY: &str = "duo_finder_chat_messages";

/// Raw string key-value backend. The app injects one of these rather
/// than touching local storage ad hoc.
pub trait KeyValue {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory backend; the storage used by tests and by native builds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValue for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::KeyValue;
    use gloo_storage::{LocalStorage, Storage};
    use log::warn;

    /// `window.localStorage` backend.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct BrowserStore;

    impl KeyValue for BrowserStore {
        fn read(&self, key: &str) -> Option<String> {
            LocalStorage::raw().get_item(key).ok().flatten()
        }

        fn write(&self, key: &str, value: &str) {
            if let Err(err) = LocalStorage::raw().set_item(key, value) {
                warn!("Failed to persist {key}: {err:?}");
            }
        }

        fn remove(&self, key: &str) {
            if let Err(err) = LocalStorage::raw().remove_item(key) {
                warn!("Failed to remove {key}: {err:?}");
            }
        }
    }
}

/// Typed read with the default-on-missing-or-corrupt policy.
pub fn get_json<T>(store: &dyn KeyValue, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = store.read(key) else {
        return T::default();
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            warn!("Discarding corrupt state under {key}: {err}");
            T::default()
        }
    }
}

/// Typed full-value replacement write.
pub fn set_json<T: Serialize>(store: &dyn KeyValue, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => store.write(key, &raw),
        Err(err) => warn!("Failed to serialize state for {key}: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_default() {
        let store = MemoryStore::new();
        let value: Vec<String> = get_json(&store, "absent");
        assert!(value.is_empty());
    }

    #[test]
    fn corrupt_value_reads_as_default() {
        let store = MemoryStore::new();
        store.write("broken", "{not json");
        let value: HashMap<String, u32> = get_json(&store, "broken");
        assert!(value.is_empty());
    }

    #[test]
    fn writes_replace_the_full_value() {
        let store = MemoryStore::new();
        set_json(&store, "list", &vec![1u32, 2, 3]);
        set_json(&store, "list", &vec![9u32]);
        let value: Vec<u32> = get_json(&store, "list");
        assert_eq!(value, vec![9]);
    }

    #[test]
    fn remove_clears_the_entry() {
        let store = MemoryStore::new();
        set_json(&store, "list", &vec![1u32]);
        store.remove("list");
        let value: Vec<u32> = get_json(&store, "list");
        assert!(value.is_empty());
    }
}
