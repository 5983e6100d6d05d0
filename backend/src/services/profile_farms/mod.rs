//! # Profile Farms Service Module
//!
//! HTTP surface of the profile store consumed by the profile view. Every
//! route is scoped to one identity through the `webId` query parameter.
//!
//! ## Sub-modules:
//! - `get`: returns the farm → plot → event tree of an identity.
//! - `save`: creates or replaces one farm with its whole subtree.
//! - `delete`: removes a farm by its bare identifier.
//! - `document_uri`: the `/<bare id>` shape every stored URI must have.

mod delete;
mod document_uri;
mod get;
mod save;

#[cfg(test)]
mod tests;

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;

/// The base path for all profile farm endpoints.
const API_PATH: &str = "/api/profile/farms";

/// Configures and returns the Actix `Scope` for the profile farm routes.
///
/// *   **`GET ?webId=`**: the ordered farm tree of the identity (`get::process`).
/// *   **`POST ?webId=`**: saves the `Farm` in the JSON body (`save::process`).
///     Records without a `documentUri` get a fresh `/<uuid>` one; any other
///     URI must be `/<bare id>` (`400`) and must not belong to another record
///     (`409`).
/// *   **`DELETE /{farm_id}?webId=`**: deletes the farm whose `documentUri`
///     is `/{farm_id}` (`delete::process`). Answers
///     `204 No Content`, or `404` when the identity owns no such farm.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(get::process))
        .route("", post().to(save::process))
        .route("/{farm_id}", delete().to(delete::process))
}
