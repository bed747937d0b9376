use dioxus::prelude::*;

use crate::controller::{Command, CopyIcon};
use crate::dispatcher::use_dispatcher;
use crate::icons::{FaCheck, FaCopy};
use crate::messages::{COPY_LABEL, RESULT_HEADING};
use crate::platform::RESULT_FIELD_ID;
use crate::Icon;

/// Read-only result with statistics and a copy button.
///
/// Keyed by the result id, so every new result mounts a fresh field that takes
/// focus.
#[component]
pub fn ResultPanel() -> Element {
    let dispatcher = use_dispatcher();
    let (result, copy_icon) = {
        let state = dispatcher.state();
        let state = state.read();
        (state.result().cloned(), state.copy_icon())
    };
    let Some(result) = result else {
        return rsx! {};
    };

    let glyph = match copy_icon {
        CopyIcon::Copy => rsx! { Icon { icon: FaCopy, width: 16, height: 16 } },
        CopyIcon::Copied => rsx! { Icon { icon: FaCheck, width: 16, height: 16 } },
    };

    rsx! {
        section {
            key: "{result.id}",
            id: "resultSection",
            class: "result-section show",

            div {
                class: "result-header",
                h2 { {RESULT_HEADING} }
                button {
                    id: "copyBtn",
                    class: "copy-btn",
                    r#type: "button",
                    title: COPY_LABEL,
                    "aria-label": COPY_LABEL,
                    onclick: move |_| dispatcher.send(Command::Copy),
                    span { class: "copy-icon", {glyph} }
                }
            }

            textarea {
                id: RESULT_FIELD_ID,
                class: "result-text",
                readonly: true,
                rows: 6,
                value: "{result.text}",
                onmounted: move |evt: MountedEvent| async move {
                    let _ = evt.set_focus(true).await;
                },
            }

            p { id: "resultStats", class: "result-stats", "{result.stats}" }
        }
    }
}
