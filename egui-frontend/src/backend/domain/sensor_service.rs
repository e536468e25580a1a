//! # Sensor Service
//!
//! Lifecycle transitions for tracked individuals' sensors.
//!
//! The roster is owned by the application controller and passed in by
//! mutable reference; this service never holds ambient state of its own.
//! Every state-changing action persists the full roster synchronously
//! before returning, so the UI always refreshes from saved state.

use anyhow::{anyhow, Result};
use log::info;
use std::sync::Arc;

use crate::backend::domain::clock::{Clock, SystemClock};
use crate::backend::domain::commands::sensor::{
    ToggleOutcome, ToggleSensorCommand, ToggleSensorResult,
};
use crate::backend::domain::models::roster::Roster;
use crate::backend::storage::kv::{KvConnection, RosterRepository};
use crate::backend::storage::traits::RosterStorage;
use crate::backend::TrackerConfig;

/// Decision gate consulted before wiping a running sensor.
///
/// Injected so the lifecycle logic stays free of UI concerns; the egui
/// surface realizes it as a confirmation modal, tests as a closure.
pub trait ResetConfirmation {
    fn confirm_reset(&self, individual_name: &str) -> bool;
}

impl<F> ResetConfirmation for F
where
    F: Fn(&str) -> bool,
{
    fn confirm_reset(&self, individual_name: &str) -> bool {
        self(individual_name)
    }
}

/// Service managing sensor lifecycle transitions.
#[derive(Clone)]
pub struct SensorService {
    roster_repository: RosterRepository,
    clock: Arc<dyn Clock>,
}

impl SensorService {
    pub fn new(connection: Arc<KvConnection>) -> Self {
        Self::with_clock(connection, Arc::new(SystemClock))
    }

    /// Create a service with an explicit time source (tests pin "now" here).
    pub fn with_clock(connection: Arc<KvConnection>, clock: Arc<dyn Clock>) -> Self {
        Self {
            roster_repository: RosterRepository::new(connection),
            clock,
        }
    }

    /// Load the persisted roster, falling back to the configured default
    /// roster when nothing usable is stored.
    pub fn load_roster(&self, config: &TrackerConfig) -> Result<Roster> {
        match self.roster_repository.load_roster()? {
            Some(roster) if !roster.is_empty() => {
                info!("Loaded roster with {} individuals", roster.len());
                Ok(roster)
            }
            _ => {
                info!(
                    "No stored roster, starting fresh with {} individuals",
                    config.individual_names.len()
                );
                Ok(Roster::from_names(&config.individual_names))
            }
        }
    }

    /// The single user-facing sensor action.
    ///
    /// Idle sensors start at the clock's current instant. Running sensors
    /// are reset only when the confirmation gate says yes; a declined reset
    /// changes and persists nothing.
    pub fn toggle_sensor(
        &self,
        roster: &mut Roster,
        command: ToggleSensorCommand,
        confirmation: &dyn ResetConfirmation,
    ) -> Result<ToggleSensorResult> {
        let now = self.clock.now();
        let individual = roster
            .get_mut(&command.individual_id)
            .ok_or_else(|| anyhow!("Unknown individual: {}", command.individual_id))?;

        let outcome = if individual.sensor.is_active() {
            if confirmation.confirm_reset(&individual.name) {
                individual.sensor.reset()?;
                info!("Reset sensor for {}", individual.name);
                ToggleOutcome::ResetPerformed
            } else {
                info!("Reset declined for {}", individual.name);
                ToggleOutcome::ResetDeclined
            }
        } else {
            individual.sensor.start(now)?;
            info!("Started sensor for {} at {}", individual.name, now);
            ToggleOutcome::Started
        };

        let individual = individual.clone();
        if outcome != ToggleOutcome::ResetDeclined {
            self.roster_repository.save_roster(roster)?;
        }

        Ok(ToggleSensorResult {
            outcome,
            individual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use tempfile::TempDir;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn test_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
    }

    fn setup_test() -> (SensorService, Roster, Arc<KvConnection>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let connection = Arc::new(KvConnection::new(temp_dir.path()).unwrap());
        let service =
            SensorService::with_clock(connection.clone(), Arc::new(FixedClock(test_instant())));
        let roster = service.load_roster(&TrackerConfig::default()).unwrap();
        (service, roster, connection, temp_dir)
    }

    fn reload(connection: &Arc<KvConnection>) -> Option<Roster> {
        RosterRepository::new(connection.clone())
            .load_roster()
            .unwrap()
    }

    #[test]
    fn test_toggle_on_idle_starts_and_persists() {
        let (service, mut roster, connection, _temp_dir) = setup_test();

        let result = service
            .toggle_sensor(
                &mut roster,
                ToggleSensorCommand {
                    individual_id: "individual::1".to_string(),
                },
                &|_: &str| panic!("confirmation gate must not fire on start"),
            )
            .unwrap();

        assert_eq!(result.outcome, ToggleOutcome::Started);
        assert_eq!(result.individual.sensor.started_at, Some(test_instant()));

        let stored = reload(&connection).unwrap();
        assert_eq!(
            stored.get("individual::1").unwrap().sensor.started_at,
            Some(test_instant())
        );
    }

    #[test]
    fn test_declined_reset_changes_nothing() {
        let (service, mut roster, connection, _temp_dir) = setup_test();
        let command = ToggleSensorCommand {
            individual_id: "individual::1".to_string(),
        };

        service
            .toggle_sensor(&mut roster, command.clone(), &|_: &str| true)
            .unwrap();
        let result = service
            .toggle_sensor(&mut roster, command, &|_: &str| false)
            .unwrap();

        assert_eq!(result.outcome, ToggleOutcome::ResetDeclined);
        assert!(result.individual.sensor.is_active());

        let stored = reload(&connection).unwrap();
        assert_eq!(
            stored.get("individual::1").unwrap().sensor.started_at,
            Some(test_instant())
        );
    }

    #[test]
    fn test_confirmed_reset_clears_and_persists() {
        let (service, mut roster, connection, _temp_dir) = setup_test();
        let command = ToggleSensorCommand {
            individual_id: "individual::2".to_string(),
        };

        service
            .toggle_sensor(&mut roster, command.clone(), &|_: &str| true)
            .unwrap();
        let result = service
            .toggle_sensor(&mut roster, command, &|_: &str| true)
            .unwrap();

        assert_eq!(result.outcome, ToggleOutcome::ResetPerformed);
        assert!(!result.individual.sensor.is_active());

        let stored = reload(&connection).unwrap();
        assert!(!stored.get("individual::2").unwrap().sensor.is_active());
    }

    #[test]
    fn test_confirmation_receives_the_individual_name() {
        let (service, mut roster, _connection, _temp_dir) = setup_test();
        let command = ToggleSensorCommand {
            individual_id: "individual::1".to_string(),
        };

        service
            .toggle_sensor(&mut roster, command.clone(), &|_: &str| true)
            .unwrap();
        service
            .toggle_sensor(&mut roster, command, &|name: &str| {
                assert_eq!(name, "First child");
                false
            })
            .unwrap();
    }

    #[test]
    fn test_toggle_unknown_individual_is_an_error() {
        let (service, mut roster, _connection, _temp_dir) = setup_test();
        let result = service.toggle_sensor(
            &mut roster,
            ToggleSensorCommand {
                individual_id: "individual::99".to_string(),
            },
            &|_: &str| true,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_roster_defaults_then_round_trips() {
        let (service, mut roster, connection, _temp_dir) = setup_test();

        // Nothing stored yet: the configured default roster
        assert_eq!(roster.len(), 2);
        assert!(reload(&connection).is_none());

        service
            .toggle_sensor(
                &mut roster,
                ToggleSensorCommand {
                    individual_id: "individual::1".to_string(),
                },
                &|_: &str| true,
            )
            .unwrap();

        // A restarted service sees exactly what was saved
        let reloaded = service.load_roster(&TrackerConfig::default()).unwrap();
        assert_eq!(reloaded, roster);
    }
}
