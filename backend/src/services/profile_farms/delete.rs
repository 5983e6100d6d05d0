//! # Farm Deletion
//!
//! Backs `DELETE /api/profile/farms/{farm_id}?webId=...`. The client sends the
//! bare identifier (the farm's `documentUri` without its leading `/`). Saved
//! URIs are always `/` plus a bare id, so the match is exact.

use actix_web::{web, HttpResponse};
use common::model::identity::Identity;
use common::requests::ProfileQuery;
use log::info;
use rusqlite::params;

use super::document_uri;
use crate::db::ProfileStore;
use crate::errors::StoreError;

pub async fn process(
    farm_id: web::Path<String>,
    query: web::Query<ProfileQuery>,
    store: web::Data<ProfileStore>,
) -> Result<HttpResponse, StoreError> {
    let identity = query.identity().ok_or(StoreError::InvalidIdentity)?;
    let farm_id = farm_id.into_inner();
    let store = store.get_ref().clone();
    let deleted_id = farm_id.clone();
    web::block(move || delete_farm(&store, &identity, &deleted_id)).await??;
    info!("Deleted farm {} for {}", farm_id, query.web_id);
    Ok(HttpResponse::NoContent().finish())
}

/// Deletes the farm identified by `farm_id` together with its plots and events.
pub fn delete_farm(store: &ProfileStore, identity: &Identity, farm_id: &str) -> Result<(), StoreError> {
    if !document_uri::is_bare_id(farm_id) {
        return Err(StoreError::InvalidFarmId(farm_id.to_string()));
    }

    let conn = store.open()?;
    let deleted = conn.execute(
        "DELETE FROM farms WHERE web_id = ?1 AND document_uri = ?2",
        params![identity.web_id, document_uri::from_bare_id(farm_id)],
    )?;

    if deleted == 0 {
        return Err(StoreError::FarmNotFound(farm_id.to_string()));
    }
    Ok(())
}
