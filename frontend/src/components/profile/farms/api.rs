//! Calls to the remote profile store. Transport and HTTP failures are folded
//! into [`ProfileFarmsError`] so callers only ever see one error type.

use common::model::farm::Farm;
use common::model::identity::Identity;
use gloo_net::http::{Request, Response};
use url::{ParseError, Url};

use super::error::ProfileFarmsError;
use crate::session::WEB_ID_PARAM;

const API_PATH: &str = "/api/profile/farms";

/// Only used to borrow `Url`'s path-segment encoding; never requested.
const ENCODING_BASE: &str = "http://localhost";

/// Fetches the full farm → plot → event tree of `identity`.
pub async fn fetch_profile_farms(identity: &Identity) -> Result<Vec<Farm>, ProfileFarmsError> {
    let response = Request::get(API_PATH)
        .query([(WEB_ID_PARAM, identity.web_id.as_str())])
        .send()
        .await
        .map_err(|e| ProfileFarmsError::Retrieval(e.to_string()))?;

    if !response.ok() {
        return Err(ProfileFarmsError::Retrieval(describe_failure(&response).await));
    }

    response
        .json::<Vec<Farm>>()
        .await
        .map_err(|e| ProfileFarmsError::Retrieval(e.to_string()))
}

/// Deletes the farm `farm_id` (a bare identifier, no separators) of `identity`.
pub async fn delete_farm(identity: &Identity, farm_id: &str) -> Result<(), ProfileFarmsError> {
    let path = farm_path(farm_id).map_err(|e| ProfileFarmsError::Deletion(e.to_string()))?;
    let response = Request::delete(&path)
        .query([(WEB_ID_PARAM, identity.web_id.as_str())])
        .send()
        .await
        .map_err(|e| ProfileFarmsError::Deletion(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(ProfileFarmsError::Deletion(describe_failure(&response).await))
    }
}

/// `API_PATH/{farm_id}` with `farm_id` percent-encoded as one path segment.
fn farm_path(farm_id: &str) -> Result<String, ParseError> {
    let mut url = Url::parse(ENCODING_BASE)?;
    url.path_segments_mut()
        .map_err(|()| ParseError::RelativeUrlWithCannotBeABaseBase)?
        .clear()
        .extend(API_PATH.split('/').filter(|segment| !segment.is_empty()))
        .push(farm_id);
    Ok(url.path().to_string())
}

async fn describe_failure(response: &Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) if !body.trim().is_empty() => format!("HTTP {}: {}", status, body.trim()),
        _ => format!("HTTP {} {}", status, response.status_text()),
    }
}

#[cfg(test)]
mod tests {
    use super::farm_path;

    #[test]
    fn farm_id_is_encoded_as_a_single_path_segment() {
        assert_eq!(farm_path("abc123").unwrap(), "/api/profile/farms/abc123");
        assert_eq!(
            farm_path("campo norte?x#y").unwrap(),
            "/api/profile/farms/campo%20norte%3Fx%23y"
        );
        assert_eq!(farm_path("a/b").unwrap(), "/api/profile/farms/a%2Fb");
    }
}
