use api::HttpCryptoApi;
use dioxus::prelude::*;
use futures_util::StreamExt;
use store::ClientConfig;

use crate::controller::{Command, Controller};
use crate::dispatcher::Dispatcher;
use crate::messages::{APP_SUBTITLE, APP_TITLE};
use crate::platform;
use crate::shortcuts::Shortcut;
use crate::storage::make_store;
use crate::{CryptoForm, ErrorBanner, ModeSelector, ResultPanel, ThemeToggle};

const SIFRA_CSS: Asset = asset!("/assets/sifra.css");

/// The whole page. Owns the controller and provides the [`Dispatcher`].
#[component]
pub fn SifraApp(config: ClientConfig) -> Element {
    let state = use_signal(|| {
        Controller::new(make_store(), platform::system_prefers_dark(), config.limits)
    });
    let dispatcher = use_context_provider(|| {
        Dispatcher::new(state, HttpCryptoApi::from_config(&config.api), config.ui)
    });

    // Browser callbacks run outside the Dioxus runtime; they hand their
    // commands to this coroutine instead of touching state directly.
    let external = use_coroutine({
        let dispatcher = dispatcher.clone();
        move |mut rx: UnboundedReceiver<Command>| {
            let dispatcher = dispatcher.clone();
            async move {
                while let Some(command) = rx.next().await {
                    dispatcher.send(command);
                }
            }
        }
    });

    use_hook(move || {
        let effects = state.peek().initial_effects();
        dispatcher.run(effects);

        let tx = external.tx();
        platform::watch_system_theme(move |prefers_dark| {
            let _ = tx.unbounded_send(Command::SystemThemeChanged(prefers_dark));
        });

        let tx = external.tx();
        platform::listen_shortcuts(move |shortcut| {
            let command = match shortcut {
                Shortcut::Submit => Command::Submit,
                Shortcut::Copy => Command::Copy,
            };
            let _ = tx.unbounded_send(command);
        });
    });

    rsx! {
        document::Stylesheet { href: SIFRA_CSS }

        div {
            class: "container",

            header {
                class: "header",
                div {
                    class: "header-text",
                    h1 { {APP_TITLE} }
                    p { class: "subtitle", {APP_SUBTITLE} }
                }
                ThemeToggle {}
            }

            main {
                class: "card",
                ModeSelector {}
                CryptoForm {}
                ErrorBanner {}
                ResultPanel {}
            }
        }
    }
}
