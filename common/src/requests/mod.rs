use serde::{Deserialize, Serialize};

use crate::model::identity::Identity;

/// Query string carried by every profile-store request (`?webId=...`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileQuery {
    #[serde(rename = "webId")]
    pub web_id: String,
}

impl ProfileQuery {
    pub fn identity(&self) -> Option<Identity> {
        let web_id = self.web_id.trim();
        if web_id.is_empty() {
            None
        } else {
            Some(Identity::new(web_id))
        }
    }
}
