use dioxus::prelude::*;

use crate::controller::Command;
use crate::dispatcher::use_dispatcher;
use crate::messages::{mode_copy, PASSWORD_LABEL, PASSWORD_PLACEHOLDER};

/// Text + password form. Labels follow the current mode.
#[component]
pub fn CryptoForm() -> Element {
    let dispatcher = use_dispatcher();
    let (mode, text, password, loading) = {
        let state = dispatcher.state();
        let state = state.read();
        (
            state.mode(),
            state.text().to_string(),
            state.password().to_string(),
            state.is_loading(),
        )
    };
    let copy = mode_copy(mode);

    let on_submit = {
        let dispatcher = dispatcher.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            dispatcher.send(Command::Submit);
        }
    };
    let on_text = {
        let dispatcher = dispatcher.clone();
        move |evt: FormEvent| dispatcher.send(Command::EditText(evt.value()))
    };
    let on_password = move |evt: FormEvent| dispatcher.send(Command::EditPassword(evt.value()));

    rsx! {
        form {
            id: "cryptoForm",
            class: "crypto-form",
            onsubmit: on_submit,

            div {
                class: "form-field",
                label { r#for: "textInput", {copy.text_label} }
                textarea {
                    id: "textInput",
                    rows: 6,
                    spellcheck: false,
                    placeholder: copy.text_placeholder,
                    value: text,
                    oninput: on_text,
                }
            }

            div {
                class: "form-field",
                label { r#for: "passwordInput", {PASSWORD_LABEL} }
                input {
                    id: "passwordInput",
                    r#type: "password",
                    autocomplete: "off",
                    placeholder: PASSWORD_PLACEHOLDER,
                    value: password,
                    oninput: on_password,
                }
            }

            button {
                id: "submitBtn",
                r#type: "submit",
                class: if loading { "submit-btn loading" } else { "submit-btn" },
                disabled: loading,
                "aria-busy": if loading { "true" } else { "false" },
                if loading {
                    span { class: "spinner", "aria-hidden": "true" }
                }
                span { class: "btn-text", {copy.submit_label} }
            }
        }
    }
}
