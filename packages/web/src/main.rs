use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use store::ClientConfig;
use ui::SifraApp;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Embedded at build time; edit and rebuild to point at another API.
const CONFIG_TOML: &str = include_str!("../sifra.toml");

#[cfg(target_arch = "wasm32")]
const SERVICE_WORKER_URL: &str = "/sw.js";

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    register_service_worker();
    dioxus::launch(App);
}

fn load_config() -> ClientConfig {
    match ClientConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid {}: {e}, using defaults", ClientConfig::filename());
            ClientConfig::default()
        }
    }
}

/// Register the offline stub worker. Failures are logged, never shown.
#[cfg(target_arch = "wasm32")]
fn register_service_worker() {
    use wasm_bindgen_futures::JsFuture;

    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator = window.navigator();
    // Missing on insecure origins and in some embedded browsers.
    if !js_sys::Reflect::has(&navigator, &"serviceWorker".into()).unwrap_or(false) {
        tracing::info!("Service workers unsupported, skipping registration");
        return;
    }

    let registration = navigator.service_worker().register(SERVICE_WORKER_URL);
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(registration).await {
            Ok(registration) => tracing::info!("SW registered: {registration:?}"),
            Err(e) => tracing::warn!("SW registration failed: {e:?}"),
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn register_service_worker() {}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SifraApp { config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_config_parses() {
        let config = ClientConfig::from_toml(CONFIG_TOML).unwrap();
        assert_eq!(config, ClientConfig::default());
    }
}
