mod queries;

use std::fs;
use std::path::PathBuf;

use love_letter_application::{ApplicationError, PhotoStore};
use love_letter_domain::{PhotoRecord, SlotId};
use rusqlite::Connection;
use tracing::warn;

use crate::migrations::MIGRATIONS;

/// Durable slot store backed by a single SQLite file. Records are kept
/// as the JSON document layout under their namespaced slot key.
#[derive(Debug, Clone)]
pub struct SqlitePhotoStore {
    path: PathBuf,
}

impl SqlitePhotoStore {
    pub fn new(path: String) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }

    fn open_connection(&self) -> Result<Connection, ApplicationError> {
        Connection::open(&self.path)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }
}

impl PhotoStore for SqlitePhotoStore {
    fn initialize(&self) -> Result<(), ApplicationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "store path must not be empty".to_string(),
            ));
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|error| ApplicationError::Io(error.to_string()))?;
            }
        }

        let conn = self.open_connection()?;
        conn.execute_batch("PRAGMA foreign_keys=ON; PRAGMA journal_mode=WAL;")
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;

        for migration in MIGRATIONS {
            conn.execute_batch(migration)
                .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        }

        Ok(())
    }

    fn save(&self, slot_id: &SlotId, record: &PhotoRecord) -> Result<(), ApplicationError> {
        let record_json = serde_json::to_string(record)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        let conn = self.open_connection()?;
        queries::upsert_slot(
            &conn,
            &slot_id.storage_key(),
            &record_json,
            &record.uploaded_at,
        )
        .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }

    fn load(&self, slot_id: &SlotId) -> Result<Option<PhotoRecord>, ApplicationError> {
        let conn = self.open_connection()?;
        let found = queries::find_slot(&conn, &slot_id.storage_key())
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;

        let Some(record_json) = found else {
            return Ok(None);
        };

        // An unparseable record is absence, never an error past this
        // boundary.
        match serde_json::from_str::<PhotoRecord>(&record_json) {
            Ok(record) => Ok(Some(record)),
            Err(error) => {
                warn!(slot = %slot_id, %error, "stored record is corrupt, treating as absent");
                Ok(None)
            }
        }
    }

    fn remove(&self, slot_id: &SlotId) -> Result<(), ApplicationError> {
        let conn = self.open_connection()?;
        queries::delete_slot(&conn, &slot_id.storage_key())
            .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }
}
