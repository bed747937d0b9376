//! # Preference storage
//!
//! [`PreferenceStore`] is a tiny string key/value interface modelled on the
//! browser's `localStorage`. The web build uses [`crate::LocalStorageStore`];
//! tests and native builds use [`crate::MemoryStore`].
//!
//! The theme helpers on top of it never fail: an unreadable or unrecognised
//! value is reported as "no preference", which makes the UI fall back to the
//! system color scheme.

use crate::models::Theme;

/// Storage key holding the explicit theme choice.
pub const THEME_KEY: &str = "theme";

/// Synchronous string key/value storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);

    /// The explicitly chosen theme, if one was stored and is recognised.
    fn load_theme(&self) -> Option<Theme> {
        self.get(THEME_KEY)?.parse().ok()
    }

    /// Persist an explicit theme choice.
    fn save_theme(&self, theme: Theme) {
        self.set(THEME_KEY, theme.as_str());
    }
}
