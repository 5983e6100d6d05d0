use serde::{Deserialize, Serialize};

/// Opaque handle of the authenticated user whose profile is being viewed.
///
/// Two identities are the same user when their `web_id` values are equal; the
/// profile view re-fetches its farm tree whenever this value changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub web_id: String,
}

impl Identity {
    pub fn new(web_id: impl Into<String>) -> Self {
        Self {
            web_id: web_id.into(),
        }
    }
}
