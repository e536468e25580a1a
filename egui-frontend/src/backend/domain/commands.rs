//! Domain-level command and result types.
//!
//! These structs are used by services inside the domain layer. The UI maps
//! widget interactions onto these commands and renders the results; it
//! never mutates domain state directly.

pub mod sensor {
    use crate::backend::domain::models::roster::TrackedIndividual;

    /// The single user-facing sensor action: start while idle, reset
    /// (behind a confirmation gate) while running.
    #[derive(Debug, Clone)]
    pub struct ToggleSensorCommand {
        pub individual_id: String,
    }

    /// What a toggle actually did.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ToggleOutcome {
        Started,
        ResetPerformed,
        /// The confirmation gate said no; nothing changed
        ResetDeclined,
    }

    /// Result of a toggle, carrying a snapshot of the individual after the
    /// action (unchanged when the reset was declined).
    #[derive(Debug, Clone)]
    pub struct ToggleSensorResult {
        pub outcome: ToggleOutcome,
        pub individual: TrackedIndividual,
    }
}

pub mod notification {
    use crate::backend::domain::models::roster::TrackedIndividual;

    /// Input for saving notification settings. `days_before` arrives as the
    /// raw field text; parsing and validation happen in the service.
    #[derive(Debug, Clone)]
    pub struct UpdateNotificationSettingsCommand {
        pub individual_id: String,
        pub days_before: String,
    }

    /// Result of a successful settings save.
    #[derive(Debug, Clone)]
    pub struct UpdateNotificationSettingsResult {
        pub individual: TrackedIndividual,
        pub success_message: String,
    }
}
