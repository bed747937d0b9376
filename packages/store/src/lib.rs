pub mod config;
pub mod models;
pub mod prefs;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use config::ClientConfig;
pub use models::Theme;
pub use prefs::{PreferenceStore, THEME_KEY};
