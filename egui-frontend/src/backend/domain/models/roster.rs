//! Domain models for the tracked-individual roster.
//!
//! The roster is the unit of persistence: every save and load moves the
//! whole collection, never a single record. Each individual exclusively
//! owns its sensor state and notification settings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Violation of the sensor state machine. Start is only valid while idle,
/// reset only while a sensor is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SensorLifecycleError {
    #[error("a sensor is already running; reset it before starting a new one")]
    AlreadyRunning,
    #[error("no sensor is currently running")]
    NotRunning,
}

/// Wear state of a single sensor. `started_at` is absent while no sensor
/// is active; when present it is never in the future.
///
/// Start times are persisted as integer milliseconds since the Unix epoch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorState {
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub started_at: Option<DateTime<Utc>>,
}

impl SensorState {
    pub fn is_active(&self) -> bool {
        self.started_at.is_some()
    }

    /// Record a sensor start at `now`. Fails if a sensor is already running.
    pub fn start(&mut self, now: DateTime<Utc>) -> Result<(), SensorLifecycleError> {
        if self.started_at.is_some() {
            return Err(SensorLifecycleError::AlreadyRunning);
        }
        self.started_at = Some(now);
        Ok(())
    }

    /// Clear the running sensor. Fails if no sensor is running.
    pub fn reset(&mut self) -> Result<(), SensorLifecycleError> {
        if self.started_at.is_none() {
            return Err(SensorLifecycleError::NotRunning);
        }
        self.started_at = None;
        Ok(())
    }
}

/// Per-individual notification preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// How many days before final expiry the user wants to be warned
    pub days_before: u32,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self { days_before: 1 }
    }
}

/// One person whose sensor wear is tracked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedIndividual {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub sensor: SensorState,
    #[serde(default)]
    pub notification_settings: NotificationSettings,
}

impl TrackedIndividual {
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            sensor: SensorState::default(),
            notification_settings: NotificationSettings::default(),
        }
    }

    /// Generate a positional id for a default-roster individual
    pub fn generate_id(position: usize) -> String {
        format!("individual::{}", position + 1)
    }
}

/// The full collection of tracked individuals.
///
/// Serialized transparently as a record list, so the stored document is a
/// plain JSON array of individuals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    pub individuals: Vec<TrackedIndividual>,
}

impl Roster {
    /// Build a fresh roster, one idle individual per name, with positional ids.
    pub fn from_names(names: &[String]) -> Self {
        let individuals = names
            .iter()
            .enumerate()
            .map(|(position, name)| {
                TrackedIndividual::new(TrackedIndividual::generate_id(position), name.clone())
            })
            .collect();
        Self { individuals }
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn get(&self, individual_id: &str) -> Option<&TrackedIndividual> {
        self.individuals.iter().find(|i| i.id == individual_id)
    }

    pub fn get_mut(&mut self, individual_id: &str) -> Option<&mut TrackedIndividual> {
        self.individuals.iter_mut().find(|i| i.id == individual_id)
    }
}
