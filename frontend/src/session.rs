//! The signed-in identity, as handed over by the authentication flow.
//!
//! Authentication itself happens elsewhere; it lands on this app with the
//! user's WebID in the `webId` query parameter. Switching profile rewrites
//! that parameter in place so a reload keeps showing the same user.

use common::model::identity::Identity;
use url::form_urlencoded;
use wasm_bindgen::JsValue;

pub const WEB_ID_PARAM: &str = "webId";

/// Extracts the identity from a query string such as `?webId=...&lang=es`.
pub fn identity_from_query(search: &str) -> Option<Identity> {
    let query = search.strip_prefix('?').unwrap_or(search);
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == WEB_ID_PARAM)
        .map(|(_, value)| value.trim().to_string())
        .filter(|web_id| !web_id.is_empty())
        .map(Identity::new)
}

/// Query string (with leading `?`) that selects `identity`, or empty.
pub fn query_for(identity: Option<&Identity>) -> String {
    match identity {
        Some(identity) => format!(
            "?{}",
            form_urlencoded::Serializer::new(String::new())
                .append_pair(WEB_ID_PARAM, &identity.web_id)
                .finish()
        ),
        None => String::new(),
    }
}

pub fn current_identity() -> Option<Identity> {
    let search = web_sys::window()?.location().search().ok()?;
    identity_from_query(&search)
}

/// Rewrites the page URL to point at `identity` without reloading. The
/// fragment is dropped: tab indices belong to the previous profile.
pub fn remember(identity: Option<&Identity>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let path = window.location().pathname().unwrap_or_else(|_| "/".to_string());
    let url = format!("{}{}", path, query_for(identity));
    match window.history() {
        Ok(history) => {
            if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&url)) {
                gloo_console::warn!(format!("No se pudo actualizar la URL: {:?}", e));
            }
        }
        Err(e) => gloo_console::warn!(format!("Historial no disponible: {:?}", e)),
    }
}
