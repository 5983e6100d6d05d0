//! SQLite persistence for the profile store.
//!
//! Farms belong to an identity (`web_id`) and keep the order in which they
//! were first saved through `position`. Plots and events hang off their parent
//! with `ON DELETE CASCADE`, so removing a farm removes its whole subtree.

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::errors::StoreError;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS farms (
    document_uri     TEXT PRIMARY KEY,
    web_id           TEXT NOT NULL,
    name             TEXT NOT NULL,
    surface          REAL NOT NULL,
    owner_first_name TEXT NOT NULL,
    owner_last_name  TEXT NOT NULL,
    position         INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS farms_by_web_id ON farms (web_id, position);

CREATE TABLE IF NOT EXISTS plots (
    document_uri TEXT PRIMARY KEY,
    farm_uri     TEXT NOT NULL REFERENCES farms (document_uri) ON DELETE CASCADE,
    name         TEXT NOT NULL,
    surface      REAL NOT NULL,
    position     INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS events (
    document_uri TEXT PRIMARY KEY,
    plot_uri     TEXT NOT NULL REFERENCES plots (document_uri) ON DELETE CASCADE,
    date         TEXT NOT NULL,
    event_type   TEXT NOT NULL,
    description  TEXT NOT NULL,
    position     INTEGER NOT NULL
);
"#;

/// Handle on the SQLite file. Cheap to clone; every request opens its own
/// connection inside a blocking task.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    db_path: PathBuf,
}

impl ProfileStore {
    pub fn new(db_path: impl AsRef<Path>) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
        }
    }

    pub fn open(&self) -> Result<Connection, StoreError> {
        let conn = Connection::open(&self.db_path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(conn)
    }

    pub fn init_schema(&self) -> Result<(), StoreError> {
        let conn = self.open()?;
        conn.execute_batch(SCHEMA)?;
        Ok(())
    }
}
