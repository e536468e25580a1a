use serde::{Deserialize, Serialize};
use std::fmt;

/// Wear status of a sensor, as classified against the current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SensorStatus {
    /// No sensor is currently running
    Idle,
    /// A sensor is running with comfortable time left
    Active,
    /// A sensor is running but final expiry is less than a day away
    ExpiringSoon,
    /// The grace period has run out; the sensor must be replaced
    Expired,
}

impl SensorStatus {
    /// Short label for the status badge on a sensor card.
    pub fn badge_label(&self) -> &'static str {
        match self {
            SensorStatus::Idle => "Waiting",
            SensorStatus::Active | SensorStatus::ExpiringSoon => "In progress",
            SensorStatus::Expired => "Expired",
        }
    }

    /// Whether a sensor is currently being worn (expired sensors are still
    /// on the body until replaced).
    pub fn is_running(&self) -> bool {
        !matches!(self, SensorStatus::Idle)
    }
}

impl fmt::Display for SensorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SensorStatus::Idle => "idle",
            SensorStatus::Active => "active",
            SensorStatus::ExpiringSoon => "expiring-soon",
            SensorStatus::Expired => "expired",
        };
        write!(f, "{}", name)
    }
}

/// Everything a rendering surface needs to draw one individual's sensor card.
///
/// All time values arrive pre-formatted; idle sensors carry unset labels
/// (`-` for instants) rather than empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorCardView {
    /// Stable id of the tracked individual this card belongs to
    pub individual_id: String,
    /// Display name of the tracked individual
    pub name: String,
    pub status: SensorStatus,
    /// Remaining wear time, e.g. "3d 4h 12m"
    pub remaining_label: String,
    /// When the current sensor was started
    pub start_label: String,
    /// Manufacturer-rated end of the wear window
    pub official_end_label: String,
    /// End of the grace period
    pub final_end_label: String,
    /// Selects the warning accent for the remaining-time label
    pub is_expiring_soon: bool,
    /// Caption for the start/reset toggle button
    pub toggle_label: String,
    /// Notification lead time configured for this individual, in days
    pub days_before: u32,
}
