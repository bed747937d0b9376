use api::Mode;
use dioxus::prelude::*;

use crate::controller::Command;
use crate::dispatcher::use_dispatcher;
use crate::icons::{FaLock, FaLockOpen};
use crate::messages::{MODE_DECRYPT, MODE_ENCRYPT};
use crate::Icon;

/// Encrypt/decrypt switch. Exactly one button is active.
#[component]
pub fn ModeSelector() -> Element {
    let dispatcher = use_dispatcher();
    let current = dispatcher.state().read().mode();

    rsx! {
        div {
            class: "mode-selector",
            role: "group",
            ModeButton { mode: Mode::Encrypt, label: MODE_ENCRYPT, active: current == Mode::Encrypt }
            ModeButton { mode: Mode::Decrypt, label: MODE_DECRYPT, active: current == Mode::Decrypt }
        }
    }
}

#[component]
fn ModeButton(mode: Mode, label: &'static str, active: bool) -> Element {
    let dispatcher = use_dispatcher();

    let glyph = match mode {
        Mode::Encrypt => rsx! { Icon { icon: FaLock, width: 14, height: 14 } },
        Mode::Decrypt => rsx! { Icon { icon: FaLockOpen, width: 14, height: 14 } },
    };

    rsx! {
        button {
            r#type: "button",
            class: if active { "mode-btn active" } else { "mode-btn" },
            "data-mode": mode.as_str(),
            "aria-pressed": if active { "true" } else { "false" },
            onclick: move |_| dispatcher.send(Command::SetMode(mode)),
            {glyph}
            span { {label} }
        }
    }
}
