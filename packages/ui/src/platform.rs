//! Browser glue: color scheme, `data-theme`, clipboard, keyboard, timers.
//!
//! Everything here is a no-op (or reports "unavailable") off `wasm32`, so the
//! rest of the crate builds and tests natively. Lookups that fail in the
//! browser degrade the same way instead of erroring.

use store::Theme;

use crate::shortcuts::Shortcut;

/// `id` of the read-only result field, used by the selection-based copy.
pub const RESULT_FIELD_ID: &str = "resultText";

#[cfg(target_arch = "wasm32")]
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard API is not available")]
    Unavailable,
    #[error("clipboard write was rejected: {0}")]
    Rejected(String),
    #[error("selection-based copy failed")]
    FallbackFailed,
}

/// How a copy request ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// The async clipboard API failed but the selection-based copy worked.
    CopiedWithFallback,
    Failed(ClipboardError),
}

#[cfg(target_arch = "wasm32")]
fn dark_scheme_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(DARK_SCHEME_QUERY).ok()?
}

#[cfg(target_arch = "wasm32")]
pub fn system_prefers_dark() -> bool {
    dark_scheme_query().is_some_and(|query| query.matches())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn system_prefers_dark() -> bool {
    false
}

/// Call `on_change` whenever the system color scheme flips.
///
/// The listener lives for the rest of the page.
#[cfg(target_arch = "wasm32")]
pub fn watch_system_theme(mut on_change: impl FnMut(bool) + 'static) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let Some(query) = dark_scheme_query() else {
        tracing::warn!("matchMedia unavailable, not following system theme");
        return;
    };
    let listener = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
        move |evt: web_sys::MediaQueryListEvent| on_change(evt.matches()),
    );
    if query
        .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
        .is_ok()
    {
        listener.forget();
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn watch_system_theme(_on_change: impl FnMut(bool) + 'static) {}

/// Call `on_shortcut` for Ctrl/Cmd shortcuts pressed anywhere on the page,
/// suppressing the browser's own handling of them.
#[cfg(target_arch = "wasm32")]
pub fn listen_shortcuts(mut on_shortcut: impl FnMut(Shortcut) + 'static) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let listener = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
        move |evt: web_sys::KeyboardEvent| {
            let shortcut =
                crate::shortcuts::shortcut_for(&evt.key(), evt.ctrl_key(), evt.meta_key());
            if let Some(shortcut) = shortcut {
                evt.prevent_default();
                on_shortcut(shortcut);
            }
        },
    );
    if document
        .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
        .is_ok()
    {
        listener.forget();
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn listen_shortcuts(_on_shortcut: impl FnMut(Shortcut) + 'static) {}

/// Set `data-theme` on the root element.
#[cfg(target_arch = "wasm32")]
pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_theme(theme: Theme) {
    tracing::trace!("apply_theme({theme}) outside the browser");
}

#[cfg(target_arch = "wasm32")]
async fn write_clipboard(text: &str) -> Result<(), ClipboardError> {
    use wasm_bindgen::{JsCast, JsValue};

    let navigator = web_sys::window()
        .ok_or(ClipboardError::Unavailable)?
        .navigator();
    // Looked up dynamically: older browsers and insecure origins lack it.
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|_| ClipboardError::Unavailable)?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(ClipboardError::Unavailable);
    }
    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
        .ok_or(ClipboardError::Unavailable)?;

    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| ClipboardError::Rejected(format!("{e:?}")))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| ClipboardError::Unavailable)?;
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| ClipboardError::Rejected(format!("{e:?}")))?;
    Ok(())
}

/// Select the result field and `execCommand("copy")`.
#[cfg(target_arch = "wasm32")]
fn selection_copy(element_id: &str) -> Result<(), ClipboardError> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ClipboardError::FallbackFailed)?;
    let field = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
        .ok_or(ClipboardError::FallbackFailed)?;
    field.select();

    let document: web_sys::HtmlDocument = document
        .dyn_into()
        .map_err(|_| ClipboardError::FallbackFailed)?;
    match document.exec_command("copy") {
        Ok(true) => Ok(()),
        _ => Err(ClipboardError::FallbackFailed),
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn copy_text(text: &str, element_id: &str) -> CopyOutcome {
    match write_clipboard(text).await {
        Ok(()) => CopyOutcome::Copied,
        Err(e) => {
            tracing::warn!("{e}, falling back to selection copy");
            match selection_copy(element_id) {
                Ok(()) => CopyOutcome::CopiedWithFallback,
                Err(e) => CopyOutcome::Failed(e),
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn copy_text(_text: &str, _element_id: &str) -> CopyOutcome {
    CopyOutcome::Failed(ClipboardError::Unavailable)
}

pub async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}
