use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::prefs::PreferenceStore;

/// In-memory PreferenceStore for testing and native builds.
///
/// Clones share the same map, so a test can keep a handle and inspect what
/// the UI wrote.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still a usable map.
        self.values.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values().insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Theme;
    use crate::prefs::THEME_KEY;

    #[test]
    fn test_set_and_overwrite() {
        let store = MemoryStore::new();
        assert!(store.get("a").is_none());

        store.set("a", "1");
        assert_eq!(store.get("a").as_deref(), Some("1"));

        store.set("a", "2");
        assert_eq!(store.get("a").as_deref(), Some("2"));
    }

    #[test]
    fn test_clones_share_values() {
        let store = MemoryStore::new();
        let handle = store.clone();
        store.set("k", "v");
        assert_eq!(handle.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_theme_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.load_theme().is_none());

        store.save_theme(Theme::Dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(store.load_theme(), Some(Theme::Dark));

        store.save_theme(Theme::Light);
        assert_eq!(store.load_theme(), Some(Theme::Light));
    }

    #[test]
    fn test_unrecognised_theme_is_no_preference() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, "sepia");
        assert!(store.load_theme().is_none());
    }
}
