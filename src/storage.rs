//! Browser Storage
//!
//! `window.localStorage` as the key-value backend of the list.

use todo_core::{KeyValueStore, StorageError};

/// `localStorage` handle; `None` when the browser refuses access
pub struct BrowserStorage {
    inner: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn open() -> Self {
        let inner = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if inner.is_none() {
            log::warn!("[STORAGE] localStorage unavailable, changes will not persist");
        }
        Self { inner }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
        self.inner
            .as_ref()
            .ok_or_else(|| StorageError::Unavailable("localStorage is not accessible".to_string()))
    }
}

fn js_error(err: wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(js_error(e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // setItem either stores the whole string or throws (e.g. QuotaExceededError)
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected(js_error(e)))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Rejected(js_error(e)))
    }
}
