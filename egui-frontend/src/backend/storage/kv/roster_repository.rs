//! Roster persistence over the key-value store.
//!
//! The whole roster is one JSON document under a fixed key. A stored
//! document that no longer parses is treated the same as no document at
//! all, so a corrupted store degrades to the default roster instead of
//! taking the application down.

use anyhow::Result;
use log::{debug, warn};
use std::sync::Arc;

use super::connection::KvConnection;
use crate::backend::domain::models::roster::Roster;
use crate::backend::storage::traits::RosterStorage;

/// Fixed key the whole roster is stored under.
const ROSTER_KEY: &str = "sensor_roster";

#[derive(Clone)]
pub struct RosterRepository {
    connection: Arc<KvConnection>,
}

impl RosterRepository {
    pub fn new(connection: Arc<KvConnection>) -> Self {
        Self { connection }
    }
}

impl RosterStorage for RosterRepository {
    fn load_roster(&self) -> Result<Option<Roster>> {
        let Some(raw) = self.connection.get(ROSTER_KEY)? else {
            debug!("No roster stored under '{}'", ROSTER_KEY);
            return Ok(None);
        };

        match serde_json::from_str::<Roster>(&raw) {
            Ok(roster) => {
                debug!("Loaded roster with {} individuals", roster.len());
                Ok(Some(roster))
            }
            Err(e) => {
                warn!("Stored roster is unreadable, falling back to defaults: {}", e);
                Ok(None)
            }
        }
    }

    fn save_roster(&self, roster: &Roster) -> Result<()> {
        let document = serde_json::to_string(roster)?;
        self.connection.put(ROSTER_KEY, &document)?;
        debug!("Saved roster with {} individuals", roster.len());
        Ok(())
    }
}
