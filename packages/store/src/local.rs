//! # `localStorage` backend: browser-side session persistence
//!
//! [`LocalStorage`] is the [`KeyValueStorage`] used on the **web platform**. It
//! is a zero-size handle that looks up `window.localStorage` on every call;
//! the browser hands back the same `Storage` object each time.
//!
//! ## Error handling
//!
//! Reads and removals swallow errors (a missing or blocked storage reads as
//! empty). Writes report [`StorageError`] so the session store can roll back
//! a half-written record.

use crate::error::StorageError;
use crate::session::KeyValueStorage;

/// `window.localStorage`-backed KeyValueStorage.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
