use web_sys::{window, Storage};
use serde::{Serialize, de::DeserializeOwned};

/// String key/value persistence.
///
/// The browser implementation writes to `localStorage`; tests use the
/// in-memory one.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove_item(&self, key: &str) -> Result<(), String>;
}

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = get_local_storage().ok_or("localStorage is not available")?;
        storage.set_item(key, value)
            .map_err(|_| format!("Could not write '{}' to localStorage", key))
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        let storage = get_local_storage().ok_or("localStorage is not available")?;
        storage.remove_item(key)
            .map_err(|_| format!("Could not remove '{}' from localStorage", key))
    }
}

pub fn save_json<S: KeyValueStore, T: Serialize>(store: &S, key: &str, value: &T) -> Result<(), String> {
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Could not serialize '{}': {}", key, e))?;
    store.set_item(key, &json)
}

pub fn load_json<S: KeyValueStore, T: DeserializeOwned>(store: &S, key: &str) -> Option<T> {
    let json = store.get_item(key)?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("⚠️ [STORAGE] Ignoring unreadable '{}': {}", key, e);
            None
        }
    }
}

#[cfg(test)]
pub use memory::MemoryStore;
