//! # `localStorage` preference store, browser-side persistence
//!
//! [`LocalStorageStore`] is the [`PreferenceStore`] used on the web platform.
//! Like the rest of the browser glue it swallows errors: a browser with
//! storage disabled (private mode, blocked cookies) behaves as if nothing was
//! ever stored, and writes are dropped.

use crate::prefs::PreferenceStore;

/// `window.localStorage`-backed PreferenceStore.
///
/// Zero-size and `Copy`; the storage handle is looked up on every call since
/// `web_sys::Storage` is not `Send` and the lookup is cheap.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(key, value);
        }
    }
}
