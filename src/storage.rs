//! Durable Key/Value Storage
//!
//! Browser `localStorage` behind a small trait so the session and the API
//! client can run against an in-memory map in tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Key holding the raw bearer token
pub const AUTH_TOKEN_KEY: &str = "auth_token";
/// Key holding the JSON-serialized user profile
pub const USER_KEY: &str = "user";

pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// `window.localStorage`
///
/// Looked up on every call; the handle itself is not `Send`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    pub fn is_available() -> bool {
        Self::local_storage().is_some()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        let Some(storage) = Self::local_storage() else {
            log::warn!("localStorage unavailable, dropping write to {key}");
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::error!("failed to write {key} to localStorage");
        }
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            if storage.remove_item(key).is_err() {
                log::error!("failed to remove {key} from localStorage");
            }
        }
    }
}

/// In-memory store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[cfg(test)]
    pub fn contains(&self, key: &str) -> bool {
        self.entries().contains_key(key)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.entries().insert(key.to_string(), value.to_string());
    }

    fn remove_item(&self, key: &str) {
        self.entries().remove(key);
    }
}

/// `localStorage` when the browser offers it, otherwise a throwaway map.
pub fn default_storage() -> Arc<dyn KeyValueStore> {
    if BrowserStorage::is_available() {
        Arc::new(BrowserStorage)
    } else {
        log::warn!("localStorage unavailable, session will not survive a reload");
        Arc::new(MemoryStorage::default())
    }
}
