use dioxus::prelude::*;

use crate::controller::Command;
use crate::dispatcher::use_dispatcher;
use crate::icons::{FaMoon, FaSun};
use crate::messages::THEME_TOGGLE_LABEL;
use crate::theme::ThemeIcon;
use crate::Icon;

/// Sun/moon button in the header.
#[component]
pub fn ThemeToggle() -> Element {
    let dispatcher = use_dispatcher();
    let icon = dispatcher.state().read().theme_icon();

    let glyph = match icon {
        ThemeIcon::Sun => rsx! { Icon { icon: FaSun, width: 18, height: 18 } },
        ThemeIcon::Moon => rsx! { Icon { icon: FaMoon, width: 18, height: 18 } },
    };

    rsx! {
        button {
            id: "themeToggle",
            class: "theme-toggle",
            r#type: "button",
            title: THEME_TOGGLE_LABEL,
            "aria-label": THEME_TOGGLE_LABEL,
            onclick: move |_| dispatcher.send(Command::ToggleTheme),
            span { class: "theme-icon", {glyph} }
        }
    }
}
