//! # App State Module
//!
//! Central application state for the sensor tracker.
//!
//! The roster lives here, owned by the app and passed by reference into
//! services and the refresh mapping, never reached through globals. UI
//! state (messages, open modals, form fields) sits alongside it so every
//! component reads and writes one place.

use anyhow::Result;
use log::info;

use crate::backend::domain::commands::notification::UpdateNotificationSettingsCommand;
use crate::backend::domain::commands::sensor::{ToggleOutcome, ToggleSensorCommand};
use crate::backend::domain::models::roster::Roster;
use crate::backend::{Backend, TrackerConfig};

/// A reset waiting on the user's yes/no in the confirmation modal.
#[derive(Debug, Clone)]
pub struct PendingReset {
    pub individual_id: String,
    pub individual_name: String,
}

/// Form state for the notification-settings modal.
#[derive(Debug, Clone)]
pub struct SettingsModalState {
    pub individual_id: String,
    pub individual_name: String,
    pub days_before_input: String,
    pub validation_error: Option<String>,
}

/// Main application struct for the egui sensor tracker.
pub struct SensorTrackerApp {
    pub backend: Backend,
    pub roster: Roster,

    // UI state
    pub error_message: Option<String>,
    pub success_message: Option<String>,

    // Modal states
    pub pending_reset: Option<PendingReset>,
    pub settings_modal: Option<SettingsModalState>,
}

impl SensorTrackerApp {
    /// Create the app over the platform data directory.
    pub fn new() -> Result<Self> {
        let backend = Backend::new(TrackerConfig::default())?;
        Self::with_backend(backend)
    }

    /// Create the app over an existing backend (tests inject one here).
    pub fn with_backend(backend: Backend) -> Result<Self> {
        let roster = backend.sensor_service.load_roster(&backend.config)?;
        info!("Tracking {} individuals", roster.len());

        // One-shot availability probe; nothing depends on the outcome
        backend.notification_service.request_permission();

        Ok(Self {
            backend,
            roster,
            error_message: None,
            success_message: None,
            pending_reset: None,
            settings_modal: None,
        })
    }

    /// Clear any error or success messages.
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }

    /// The toggle button on a sensor card was pressed.
    ///
    /// Idle sensors start right away; running sensors first go through the
    /// confirmation modal, which calls back into [`Self::confirm_pending_reset`].
    pub fn handle_toggle_clicked(&mut self, individual_id: &str) {
        self.clear_messages();

        let Some(individual) = self.roster.get(individual_id) else {
            // Card views derive from the roster, so this indicates a bug
            self.error_message = Some(format!("Unknown individual: {}", individual_id));
            return;
        };

        if individual.sensor.is_active() {
            self.pending_reset = Some(PendingReset {
                individual_id: individual.id.clone(),
                individual_name: individual.name.clone(),
            });
            return;
        }

        let command = ToggleSensorCommand {
            individual_id: individual_id.to_string(),
        };
        // The gate is never consulted on the start path
        match self
            .backend
            .sensor_service
            .toggle_sensor(&mut self.roster, command, &|_: &str| false)
        {
            Ok(result) => {
                self.success_message =
                    Some(format!("Sensor started for {}", result.individual.name));
            }
            Err(e) => self.error_message = Some(format!("Could not start sensor: {}", e)),
        }
    }

    /// The user confirmed the pending reset in the modal.
    pub fn confirm_pending_reset(&mut self) {
        let Some(pending) = self.pending_reset.take() else {
            return;
        };

        let command = ToggleSensorCommand {
            individual_id: pending.individual_id,
        };
        match self
            .backend
            .sensor_service
            .toggle_sensor(&mut self.roster, command, &|_: &str| true)
        {
            Ok(result) => {
                debug_assert_eq!(result.outcome, ToggleOutcome::ResetPerformed);
                self.success_message = Some(format!("Sensor reset for {}", result.individual.name));
            }
            Err(e) => self.error_message = Some(format!("Could not reset sensor: {}", e)),
        }
    }

    /// The user declined the pending reset; nothing changes.
    pub fn cancel_pending_reset(&mut self) {
        self.pending_reset = None;
    }

    /// Open the notification-settings modal pre-filled with the stored value.
    pub fn open_notification_settings(&mut self, individual_id: &str) {
        self.clear_messages();

        let Some(individual) = self.roster.get(individual_id) else {
            self.error_message = Some(format!("Unknown individual: {}", individual_id));
            return;
        };

        self.settings_modal = Some(SettingsModalState {
            individual_id: individual.id.clone(),
            individual_name: individual.name.clone(),
            days_before_input: individual.notification_settings.days_before.to_string(),
            validation_error: None,
        });
    }

    /// Save the settings modal's current input.
    ///
    /// Invalid input keeps the modal open with an inline validation error
    /// and persists nothing; valid input saves, closes the modal, and
    /// surfaces the service's confirmation message.
    pub fn save_notification_settings(&mut self) {
        let Some(modal) = self.settings_modal.as_mut() else {
            return;
        };

        let command = UpdateNotificationSettingsCommand {
            individual_id: modal.individual_id.clone(),
            days_before: modal.days_before_input.clone(),
        };
        match self
            .backend
            .notification_service
            .update_notification_settings(&mut self.roster, command)
        {
            Ok(result) => {
                self.success_message = Some(result.success_message);
                self.settings_modal = None;
            }
            Err(e) => modal.validation_error = Some(e.to_string()),
        }
    }

    pub fn close_notification_settings(&mut self) {
        self.settings_modal = None;
    }
}
