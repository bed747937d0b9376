//! Platform-appropriate preference store.
//!
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorageStore`]
//! - **Elsewhere**: in memory via [`store::MemoryStore`], so the theme resets on reload

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppStore = store::LocalStorageStore;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type AppStore = store::MemoryStore;

pub fn make_store() -> AppStore {
    AppStore::new()
}
