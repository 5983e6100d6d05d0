use actix_web::{web, HttpResponse};
use common::model::farm::Farm;
use common::model::identity::Identity;
use common::requests::ProfileQuery;
use log::info;
use rusqlite::{params, OptionalExtension, Transaction};
use uuid::Uuid;

use super::document_uri;
use crate::db::ProfileStore;
use crate::errors::StoreError;

pub async fn process(
    query: web::Query<ProfileQuery>,
    payload: web::Json<Farm>,
    store: web::Data<ProfileStore>,
) -> Result<HttpResponse, StoreError> {
    let identity = query.identity().ok_or(StoreError::InvalidIdentity)?;
    let store = store.get_ref().clone();
    let farm = payload.into_inner();
    let saved = web::block(move || save_farm(&store, &identity, farm)).await??;
    info!("Saved farm {} for {}", saved.document_uri, query.web_id);
    Ok(HttpResponse::Ok().json(saved))
}

fn new_document_uri() -> String {
    format!("/{}", Uuid::new_v4())
}

fn ensure_document_uri(uri: &mut String) -> Result<(), StoreError> {
    if uri.trim().is_empty() {
        *uri = new_document_uri();
    }
    document_uri::validate(uri)
}

/// Fails when `uri` is still present in `table` once the farm's own subtree
/// has been removed, i.e. it belongs to another farm or identity, or is
/// repeated inside the saved farm.
fn ensure_unused(tx: &Transaction, table: &str, uri: &str) -> Result<(), StoreError> {
    let taken = tx
        .query_row(
            &format!("SELECT 1 FROM {} WHERE document_uri = ?1", table),
            params![uri],
            |_| Ok(()),
        )
        .optional()?;
    match taken {
        Some(()) => Err(StoreError::DocumentUriConflict(uri.to_string())),
        None => Ok(()),
    }
}

/// Inserts or replaces `farm` and its subtree for `identity`.
///
/// A farm that already exists keeps its position in the identity's list;
/// its plots and events are replaced wholesale. Saving over a farm that
/// belongs to another identity is rejected as not found; reusing a plot or
/// event URI of another record is a conflict.
pub fn save_farm(store: &ProfileStore, identity: &Identity, mut farm: Farm) -> Result<Farm, StoreError> {
    ensure_document_uri(&mut farm.document_uri)?;
    for plot in &mut farm.plots {
        ensure_document_uri(&mut plot.document_uri)?;
        for event in &mut plot.events {
            ensure_document_uri(&mut event.document_uri)?;
        }
    }

    let mut conn = store.open()?;
    let tx = conn.transaction()?;

    let existing: Option<(String, i64)> = tx
        .query_row(
            "SELECT web_id, position FROM farms WHERE document_uri = ?1",
            params![farm.document_uri],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    let position = match existing {
        Some((owner, _)) if owner != identity.web_id => {
            return Err(StoreError::FarmNotFound(farm.document_uri));
        }
        Some((_, position)) => position,
        None => tx.query_row(
            "SELECT COALESCE(MAX(position) + 1, 0) FROM farms WHERE web_id = ?1",
            params![identity.web_id],
            |row| row.get(0),
        )?,
    };

    tx.execute(
        "DELETE FROM farms WHERE document_uri = ?1",
        params![farm.document_uri],
    )?;
    tx.execute(
        "INSERT INTO farms (document_uri, web_id, name, surface, owner_first_name, owner_last_name, position)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            farm.document_uri,
            identity.web_id,
            farm.name,
            farm.surface,
            farm.owner.first_name,
            farm.owner.last_name,
            position
        ],
    )?;

    for (plot_index, plot) in farm.plots.iter().enumerate() {
        ensure_unused(&tx, "plots", &plot.document_uri)?;
        tx.execute(
            "INSERT INTO plots (document_uri, farm_uri, name, surface, position)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                plot.document_uri,
                farm.document_uri,
                plot.name,
                plot.surface,
                plot_index as i64
            ],
        )?;
        for (event_index, event) in plot.events.iter().enumerate() {
            ensure_unused(&tx, "events", &event.document_uri)?;
            tx.execute(
                "INSERT INTO events (document_uri, plot_uri, date, event_type, description, position)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    event.document_uri,
                    plot.document_uri,
                    event.date,
                    event.event_type,
                    event.description,
                    event_index as i64
                ],
            )?;
        }
    }

    tx.commit()?;
    Ok(farm)
}
