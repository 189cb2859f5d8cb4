//! Credential store capability. The session gate, login and sign-out only talk
//! to [`CredentialStore`], so the browser's `localStorage` can be swapped for an
//! in-memory map in tests or when storage is blocked (private browsing, storage
//! quotas). Values are opaque strings; callers own their encoding.

use crate::app_lib::AppError;
use std::{collections::HashMap, sync::Mutex};

/// Key holding the raw bearer token returned by login.
pub const TOKEN_KEY: &str = "token";
/// Key holding the JSON-serialized user object returned by login.
pub const USER_KEY: &str = "user";

/// Persisted, process-wide key-value storage for credentials.
pub trait CredentialStore: Send + Sync {
    /// Returns the stored value, or `None` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    fn remove(&self, key: &str) -> Result<(), AppError>;

    /// Removes every credential key this client writes.
    fn clear(&self) -> Result<(), AppError> {
        self.remove(TOKEN_KEY)?;
        self.remove(USER_KEY)
    }
}

/// Store kept in memory for the lifetime of the page.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-filled with `entries`.
    #[cfg(test)]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Self {
            entries: Mutex::new(map),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, AppError> {
        self.entries
            .lock()
            .map_err(|_| AppError::Storage("In-memory store is poisoned.".to_string()))
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// Store backed by `window.localStorage`. It holds no handle; every call looks
/// the storage object up again, which keeps the type `Send + Sync`.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    /// Returns a store only when `localStorage` is reachable.
    pub fn detect() -> Option<Self> {
        Self::storage().ok().map(|_| Self)
    }

    fn storage() -> Result<web_sys::Storage, AppError> {
        web_sys::window()
            .ok_or_else(|| AppError::Storage("Window not found.".to_string()))?
            .local_storage()
            .map_err(|_| AppError::Storage("Local storage is blocked.".to_string()))?
            .ok_or_else(|| AppError::Storage("Local storage is unavailable.".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl CredentialStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| AppError::Storage(format!("Failed to read `{key}`.")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| AppError::Storage(format!("Failed to write `{key}`.")))
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|_| AppError::Storage(format!("Failed to remove `{key}`.")))
    }
}

#[cfg(test)]
mod tests {
    use super::{CredentialStore, MemoryStore, TOKEN_KEY, USER_KEY};

    #[test]
    fn memory_store_round_trips_values() {
        let store = MemoryStore::new();
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);

        store.set(TOKEN_KEY, "abc").unwrap();
        assert_eq!(store.get(TOKEN_KEY).unwrap(), Some("abc".to_string()));

        store.remove(TOKEN_KEY).unwrap();
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn clear_removes_token_and_user_only() {
        let store =
            MemoryStore::with_entries([(TOKEN_KEY, "abc"), (USER_KEY, "{}"), ("theme", "dark")]);

        store.clear().unwrap();

        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(store.get(USER_KEY).unwrap(), None);
        assert_eq!(store.get("theme").unwrap(), Some("dark".to_string()));
    }
}
