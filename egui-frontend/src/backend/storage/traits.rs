//! Storage abstraction traits, so the domain layer can work with any
//! backing store without modification.

use anyhow::Result;

use crate::backend::domain::models::roster::Roster;

/// Interface for roster storage operations.
///
/// The roster is always moved whole: implementations never update a single
/// individual in place.
pub trait RosterStorage: Send + Sync {
    /// Load the persisted roster. `None` means nothing usable is stored
    /// (missing or unreadable); the caller decides on defaults.
    fn load_roster(&self) -> Result<Option<Roster>>;

    /// Persist the full roster.
    fn save_roster(&self, roster: &Roster) -> Result<()>;
}
