//! # Client configuration — `sifra.toml`
//!
//! Defines the TOML document the web build embeds to know where the crypto API
//! lives and how the UI behaves. The file is read once at startup.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://smht.eu/sifra"
//!
//! [limits]
//! max_text_chars = 1048576
//! max_password_chars = 256
//!
//! [ui]
//! error_dismiss_ms = 5000
//! copy_feedback_ms = 2000
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config. Builder helpers (`new`, `with_limits`), TOML (de)serialisation and the canonical filename. |
//! | [`ApiConfig`] | Base URL of the remote API; endpoints are appended to it. |
//! | [`LimitsConfig`] | Input limits checked locally before any request is made. |
//! | [`UiConfig`] | Delays for the auto-dismissed error banner and the copy confirmation. |
//!
//! Every field has a default, so a missing or empty file is equivalent to the
//! production configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `sifra.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Remote API location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL without the endpoint, e.g. `https://smht.eu/sifra`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Input limits, in characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitsConfig {
    #[serde(default = "default_max_text_chars")]
    pub max_text_chars: usize,
    #[serde(default = "default_max_password_chars")]
    pub max_password_chars: usize,
}

/// UI timings in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_error_dismiss_ms")]
    pub error_dismiss_ms: u32,
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u32,
}

fn default_base_url() -> String {
    "https://smht.eu/sifra".to_string()
}

fn default_max_text_chars() -> usize {
    1_048_576
}

fn default_max_password_chars() -> usize {
    256
}

fn default_error_dismiss_ms() -> u32 {
    5000
}

fn default_copy_feedback_ms() -> u32 {
    2000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_text_chars: default_max_text_chars(),
            max_password_chars: default_max_password_chars(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            error_dismiss_ms: default_error_dismiss_ms(),
            copy_feedback_ms: default_copy_feedback_ms(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            ..Self::default()
        }
    }

    /// Builder method to set the input limits.
    pub fn with_limits(mut self, max_text_chars: usize, max_password_chars: usize) -> Self {
        self.limits = LimitsConfig {
            max_text_chars,
            max_password_chars,
        };
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "sifra.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
