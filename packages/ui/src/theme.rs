//! Light/dark theme selection.
//!
//! Until the user presses the toggle, the page follows the system color
//! scheme, live. The first toggle stores an explicit choice, and from then on
//! system changes are ignored.

use store::{PreferenceStore, Theme};

/// Glyph shown on the toggle: it shows the theme you would switch to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeIcon {
    Sun,
    Moon,
}

pub struct ThemeManager<S> {
    store: S,
    theme: Theme,
}

impl<S: PreferenceStore> ThemeManager<S> {
    /// Resolve the starting theme: the stored choice, else the system one.
    /// Never writes to the store.
    pub fn new(store: S, system_prefers_dark: bool) -> Self {
        let theme = store
            .load_theme()
            .unwrap_or_else(|| Theme::from_system(system_prefers_dark));
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn icon(&self) -> ThemeIcon {
        match self.theme {
            Theme::Dark => ThemeIcon::Sun,
            Theme::Light => ThemeIcon::Moon,
        }
    }

    /// Whether the user has made an explicit choice.
    pub fn is_explicit(&self) -> bool {
        self.store.load_theme().is_some()
    }

    /// Flip and persist.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.flipped();
        self.store.save_theme(self.theme);
        tracing::debug!("theme set to {}", self.theme);
        self.theme
    }

    /// Follow a system color-scheme change unless an explicit choice exists.
    /// Returns the theme to apply, if it changed.
    pub fn system_changed(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.is_explicit() {
            return None;
        }
        let theme = Theme::from_system(prefers_dark);
        if theme == self.theme {
            return None;
        }
        self.theme = theme;
        Some(theme)
    }
}
