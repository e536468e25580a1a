//! # Sensor Lifecycle Engine
//!
//! Classifies a sensor against the current time and derives its wear
//! boundaries. Everything here is a pure function of the sensor state and
//! the supplied instant: callable every tick, idempotent, and it never
//! mutates the state it reads. The caller decides what "now" means, which
//! is how tests simulate time without waiting.

use chrono::{DateTime, Duration, Utc};
use shared::SensorStatus;

use crate::backend::domain::models::roster::SensorState;

/// Manufacturer-rated wear time before official expiry (10 days).
pub const OFFICIAL_WEAR_MS: i64 = 10 * 24 * 60 * 60 * 1000;

/// Allowed extra wear window after official expiry (12 hours).
pub const GRACE_PERIOD_MS: i64 = 12 * 60 * 60 * 1000;

/// Remaining time under which a running sensor counts as expiring soon.
pub const EXPIRING_SOON_MS: i64 = 24 * 60 * 60 * 1000;

/// Snapshot of a sensor's position in its wear lifecycle.
///
/// Boundary fields are `None` exactly when the sensor is idle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub status: SensorStatus,
    pub started_at: Option<DateTime<Utc>>,
    /// End of the manufacturer-rated wear window
    pub official_end: Option<DateTime<Utc>>,
    /// End of the grace period; the sensor is expired past this point
    pub final_end: Option<DateTime<Utc>>,
    /// Time left until `final_end`, negative once expired
    pub remaining: Option<Duration>,
}

impl Classification {
    fn idle() -> Self {
        Self {
            status: SensorStatus::Idle,
            started_at: None,
            official_end: None,
            final_end: None,
            remaining: None,
        }
    }
}

/// Classify `sensor` as of `now`.
pub fn classify(sensor: &SensorState, now: DateTime<Utc>) -> Classification {
    let Some(started_at) = sensor.started_at else {
        return Classification::idle();
    };

    let official_end = started_at + Duration::milliseconds(OFFICIAL_WEAR_MS);
    let final_end = official_end + Duration::milliseconds(GRACE_PERIOD_MS);
    let remaining = final_end - now;

    let status = if remaining <= Duration::zero() {
        SensorStatus::Expired
    } else if remaining < Duration::milliseconds(EXPIRING_SOON_MS) {
        SensorStatus::ExpiringSoon
    } else {
        SensorStatus::Active
    };

    Classification {
        status,
        started_at: Some(started_at),
        official_end: Some(official_end),
        final_end: Some(final_end),
        remaining: Some(remaining),
    }
}
