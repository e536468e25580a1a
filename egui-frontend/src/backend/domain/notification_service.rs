//! # Notification Service
//!
//! Per-individual notification lead-time settings, plus the one-shot
//! startup probe of the platform notification channel. The tracker never
//! delivers notifications itself; the probe only records availability.

use anyhow::{anyhow, Result};
use log::{info, warn};
use std::sync::Arc;

use crate::backend::domain::commands::notification::{
    UpdateNotificationSettingsCommand, UpdateNotificationSettingsResult,
};
use crate::backend::domain::models::roster::Roster;
use crate::backend::storage::kv::{KvConnection, RosterRepository};
use crate::backend::storage::traits::RosterStorage;

#[derive(Clone)]
pub struct NotificationService {
    roster_repository: RosterRepository,
}

impl NotificationService {
    pub fn new(connection: Arc<KvConnection>) -> Self {
        Self {
            roster_repository: RosterRepository::new(connection),
        }
    }

    /// Save a new notification lead time for one individual.
    ///
    /// The raw field text is parsed here; anything that is not a whole
    /// non-negative number of days is rejected and neither the in-memory
    /// roster nor the stored one is touched. A successful save persists
    /// the full roster before returning.
    pub fn update_notification_settings(
        &self,
        roster: &mut Roster,
        command: UpdateNotificationSettingsCommand,
    ) -> Result<UpdateNotificationSettingsResult> {
        let days_before: u32 = command.days_before.trim().parse().map_err(|_| {
            anyhow!(
                "Notification lead time must be a whole number of days, got '{}'",
                command.days_before
            )
        })?;

        let individual = roster
            .get_mut(&command.individual_id)
            .ok_or_else(|| anyhow!("Unknown individual: {}", command.individual_id))?;

        individual.notification_settings.days_before = days_before;
        let individual = individual.clone();
        self.roster_repository.save_roster(roster)?;

        info!(
            "Saved notification settings for {}: {} day(s) before expiry",
            individual.name, days_before
        );

        Ok(UpdateNotificationSettingsResult {
            success_message: format!("Notification settings saved for {}", individual.name),
            individual,
        })
    }

    /// Probe the platform notification channel once at startup.
    ///
    /// Nothing downstream depends on the outcome; it is only logged so a
    /// missing notifier is visible in the logs instead of silently absent.
    pub fn request_permission(&self) {
        match probe_desktop_notifier() {
            Ok(()) => info!("Desktop notification channel available"),
            Err(e) => warn!("Desktop notifications unavailable: {}", e),
        }
    }
}

#[cfg(target_os = "macos")]
fn probe_desktop_notifier() -> Result<()> {
    std::process::Command::new("osascript")
        .args(["-e", "return"])
        .output()?;
    Ok(())
}

#[cfg(target_os = "linux")]
fn probe_desktop_notifier() -> Result<()> {
    std::process::Command::new("notify-send")
        .arg("--version")
        .output()?;
    Ok(())
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
fn probe_desktop_notifier() -> Result<()> {
    Err(anyhow!("no notification channel on this platform"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::roster::Roster;
    use crate::backend::storage::traits::RosterStorage;
    use tempfile::TempDir;

    fn setup_test() -> (NotificationService, Roster, Arc<KvConnection>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let connection = Arc::new(KvConnection::new(temp_dir.path()).unwrap());
        let service = NotificationService::new(connection.clone());
        let names = vec!["First child".to_string(), "Second child".to_string()];
        let roster = Roster::from_names(&names);
        (service, roster, connection, temp_dir)
    }

    fn stored_roster(connection: &Arc<KvConnection>) -> Option<Roster> {
        RosterRepository::new(connection.clone())
            .load_roster()
            .unwrap()
    }

    #[test]
    fn test_valid_lead_time_saves_and_persists() {
        let (service, mut roster, connection, _temp_dir) = setup_test();

        let result = service
            .update_notification_settings(
                &mut roster,
                UpdateNotificationSettingsCommand {
                    individual_id: "individual::1".to_string(),
                    days_before: " 3 ".to_string(),
                },
            )
            .unwrap();

        assert_eq!(result.individual.notification_settings.days_before, 3);
        assert!(result.success_message.contains("First child"));

        let stored = stored_roster(&connection).unwrap();
        assert_eq!(
            stored
                .get("individual::1")
                .unwrap()
                .notification_settings
                .days_before,
            3
        );
    }

    #[test]
    fn test_non_numeric_lead_time_is_rejected_without_side_effects() {
        let (service, mut roster, connection, _temp_dir) = setup_test();

        for bad_input in ["", "abc", "1.5", "-2"] {
            let result = service.update_notification_settings(
                &mut roster,
                UpdateNotificationSettingsCommand {
                    individual_id: "individual::1".to_string(),
                    days_before: bad_input.to_string(),
                },
            );
            assert!(result.is_err(), "input '{}' should be rejected", bad_input);
        }

        // Prior value untouched, nothing written to storage
        assert_eq!(
            roster
                .get("individual::1")
                .unwrap()
                .notification_settings
                .days_before,
            1
        );
        assert!(stored_roster(&connection).is_none());
    }

    #[test]
    fn test_zero_days_is_a_valid_lead_time() {
        let (service, mut roster, _connection, _temp_dir) = setup_test();

        let result = service
            .update_notification_settings(
                &mut roster,
                UpdateNotificationSettingsCommand {
                    individual_id: "individual::2".to_string(),
                    days_before: "0".to_string(),
                },
            )
            .unwrap();

        assert_eq!(result.individual.notification_settings.days_before, 0);
    }

    #[test]
    fn test_unknown_individual_is_an_error() {
        let (service, mut roster, _connection, _temp_dir) = setup_test();

        let result = service.update_notification_settings(
            &mut roster,
            UpdateNotificationSettingsCommand {
                individual_id: "individual::99".to_string(),
                days_before: "2".to_string(),
            },
        );
        assert!(result.is_err());
    }
}
