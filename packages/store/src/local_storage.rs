//! # `localStorage` backend — browser-side persistence
//!
//! [`LocalStorage`] is the [`KeyValueStore`] used on the **web platform**. It reads
//! and writes the origin's `window.localStorage` through `web-sys`, so accounts and
//! the current session survive page reloads.
//!
//! ## Connection management
//!
//! `LocalStorage` is a zero-size handle that looks up `window.localStorage` on every
//! call. The browser keeps one storage area per origin, so there is nothing to cache.
//!
//! ## Error handling
//!
//! Reads degrade to `None` when storage is unreachable. Writes report
//! [`StorageError::Unavailable`] or [`StorageError::Write`] (quota exceeded) so the
//! views can show a message instead of pretending the account was saved.

use tracing::warn;
use web_sys::Storage;

use crate::error::StorageError;
use crate::session::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore for web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{e:?}"),
        })
    }

    fn remove(&self, key: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            warn!(key, error = ?e, "failed to remove localStorage entry");
        }
    }
}
