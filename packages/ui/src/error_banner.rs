use dioxus::prelude::*;

use crate::dispatcher::use_dispatcher;

/// Auto-dismissed error region under the form.
#[component]
pub fn ErrorBanner() -> Element {
    let dispatcher = use_dispatcher();
    let notice = dispatcher.state().read().error().cloned();

    rsx! {
        if let Some(notice) = notice {
            div {
                id: "errorMessage",
                class: "error-message show",
                role: "alert",
                "{notice.message}"
            }
        }
    }
}
