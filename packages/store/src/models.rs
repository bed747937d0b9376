//! # Client-side models
//!
//! The only thing the front-end keeps between page loads is the appearance
//! preference, modelled by [`Theme`]. It is stored as the plain strings
//! `"light"` / `"dark"` so that the value stays readable in the browser's
//! storage inspector.

use std::fmt;
use std::str::FromStr;

/// Light/dark appearance of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Pick the theme matching the system `prefers-color-scheme` answer.
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// The other theme.
    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value written to storage and to the `data-theme` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a stored string is neither `"light"` nor `"dark"`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {0:?}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stored_values() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert!("Dark".parse::<Theme>().is_err());
        assert!("".parse::<Theme>().is_err());
    }

    #[test]
    fn test_unknown_theme_error_message() {
        let err = "sepia".parse::<Theme>().unwrap_err();
        assert_eq!(err, UnknownTheme("sepia".to_string()));
        assert_eq!(err.to_string(), "unknown theme \"sepia\"");
    }

    #[test]
    fn test_flip_and_system() {
        assert_eq!(Theme::Light.flipped(), Theme::Dark);
        assert_eq!(Theme::Dark.flipped(), Theme::Light);
        assert_eq!(Theme::from_system(true), Theme::Dark);
        assert_eq!(Theme::from_system(false), Theme::Light);
    }
}
