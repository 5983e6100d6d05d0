//! # Profile Farm Retrieval
//!
//! Backs `GET /api/profile/farms?webId=...`. Farms come back in the order in
//! which they were first saved; plots and events keep the order they had in
//! the saved payload.

use actix_web::{web, HttpResponse};
use common::model::farm::{Event, Farm, Owner, Plot};
use common::model::identity::Identity;
use common::requests::ProfileQuery;
use rusqlite::{params, Connection};

use crate::db::ProfileStore;
use crate::errors::StoreError;

pub async fn process(
    query: web::Query<ProfileQuery>,
    store: web::Data<ProfileStore>,
) -> Result<HttpResponse, StoreError> {
    let identity = query.identity().ok_or(StoreError::InvalidIdentity)?;
    let store = store.get_ref().clone();
    let farms = web::block(move || get_profile_farms(&store, &identity)).await??;
    Ok(HttpResponse::Ok().json(farms))
}

/// Loads the full farm tree owned by `identity`.
pub fn get_profile_farms(store: &ProfileStore, identity: &Identity) -> Result<Vec<Farm>, StoreError> {
    let conn = store.open()?;

    let mut stmt = conn.prepare(
        "SELECT document_uri, name, surface, owner_first_name, owner_last_name
         FROM farms WHERE web_id = ?1 ORDER BY position",
    )?;
    let farms = stmt
        .query_map(params![identity.web_id], |row| {
            Ok(Farm {
                document_uri: row.get(0)?,
                name: row.get(1)?,
                surface: row.get(2)?,
                owner: Owner {
                    first_name: row.get(3)?,
                    last_name: row.get(4)?,
                },
                plots: Vec::new(),
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    farms
        .into_iter()
        .map(|mut farm| {
            farm.plots = load_plots(&conn, &farm.document_uri)?;
            Ok(farm)
        })
        .collect()
}

fn load_plots(conn: &Connection, farm_uri: &str) -> Result<Vec<Plot>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT document_uri, name, surface FROM plots WHERE farm_uri = ?1 ORDER BY position",
    )?;
    let plots = stmt
        .query_map(params![farm_uri], |row| {
            Ok(Plot {
                document_uri: row.get(0)?,
                name: row.get(1)?,
                surface: row.get(2)?,
                events: Vec::new(),
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    plots
        .into_iter()
        .map(|mut plot| {
            plot.events = load_events(conn, &plot.document_uri)?;
            Ok(plot)
        })
        .collect()
}

fn load_events(conn: &Connection, plot_uri: &str) -> Result<Vec<Event>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT document_uri, date, event_type, description
         FROM events WHERE plot_uri = ?1 ORDER BY position",
    )?;
    let events = stmt
        .query_map(params![plot_uri], |row| {
            Ok(Event {
                document_uri: row.get(0)?,
                date: row.get(1)?,
                event_type: row.get(2)?,
                description: row.get(3)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(events)
}
