//! Browser-side effects used by the profile farm view, plus small formatting
//! helpers.
//!
//! - **Feedback**: transient toast notifications.
//! - **Navigation**: leaving the page for another route, or reloading it.
//! - **Deep links**: reading the URL fragment that selects a tab.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// How long a toast stays on screen.
const TOAST_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

impl ToastKind {
    fn background(self) -> &'static str {
        match self {
            ToastKind::Info => "rgba(0, 0, 0, 0.8)",
            ToastKind::Error => "rgba(183, 28, 28, 0.92)",
        }
    }
}

/// Shows `message` at the bottom of the screen for a few seconds.
pub fn show_toast(message: &str, kind: ToastKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    toast.set_attribute("role", "status").ok();
    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    for (property, value) in [
        ("position", "fixed"),
        ("bottom", "20px"),
        ("left", "50%"),
        ("transform", "translateX(-50%)"),
        ("background", kind.background()),
        ("color", "#fff"),
        ("padding", "10px 20px"),
        ("border-radius", "4px"),
        ("z-index", "10000"),
        ("font-family", "Arial, sans-serif"),
    ] {
        style.set_property(property, value).ok();
    }

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
            html_toast.remove();
        });
    }
}

/// Leaves the profile view for `path` (add farm, edit farm, privacy, add event).
pub fn navigate_to(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(path) {
            gloo_console::error!(format!("No se pudo navegar a {}: {:?}", path, e));
        }
    }
}

/// Re-fetches and re-renders the hosting page from scratch.
pub fn reload_view() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            gloo_console::error!(format!("No se pudo recargar la vista: {:?}", e));
        }
    }
}

/// The current URL fragment (`#farm0plot1`), if any.
pub fn current_fragment() -> Option<String> {
    web_sys::window()?
        .location()
        .hash()
        .ok()
        .filter(|hash| !hash.is_empty())
}

/// Formats an area in km², rounded to two decimals without trailing zeros.
pub fn format_surface(surface: f64) -> String {
    let rounded = (surface * 100.0).round() / 100.0;
    format!("{} km²", rounded)
}

#[cfg(test)]
mod tests {
    use super::format_surface;

    #[test]
    fn surfaces_render_in_square_kilometres() {
        assert_eq!(format_surface(3.0), "3 km²");
        assert_eq!(format_surface(12.5), "12.5 km²");
        assert_eq!(format_surface(0.1 + 0.2), "0.3 km²");
        assert_eq!(format_surface(1.005_1), "1.01 km²");
    }
}
