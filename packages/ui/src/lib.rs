//! This crate contains the page: controller, browser glue and components.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod controller;
pub use controller::{Command, Controller, CopyIcon, Effect, Notice, ResultView};

pub mod messages;
pub mod platform;
pub mod shortcuts;
pub mod theme;

mod storage;
pub use storage::{make_store, AppStore};

mod dispatcher;
pub use dispatcher::{use_dispatcher, AppController, Dispatcher};

mod app;
pub use app::SifraApp;

mod theme_toggle;
pub use theme_toggle::ThemeToggle;

mod mode_selector;
pub use mode_selector::ModeSelector;

mod crypto_form;
pub use crypto_form::CryptoForm;

mod error_banner;
pub use error_banner::ErrorBanner;

mod result_panel;
pub use result_panel::ResultPanel;
