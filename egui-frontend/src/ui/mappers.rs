//! Mapping from domain state to the card views the rendering surface
//! consumes. This is the body of the refresh tick: classify every
//! individual's sensor, format the boundaries, and hand the UI plain
//! strings.

use chrono::{DateTime, Local, Utc};
use shared::{SensorCardView, SensorStatus};

use crate::backend::domain::models::roster::{Roster, TrackedIndividual};
use crate::backend::domain::{lifecycle, time_format};

/// Shown for boundary instants that do not exist yet.
const UNSET_INSTANT_LABEL: &str = "-";
/// Remaining-time placeholder while no sensor is running.
const IDLE_REMAINING_LABEL: &str = "--d --h --m";
/// Remaining-time label once the grace period has run out.
const EXPIRED_REMAINING_LABEL: &str = "Expired";

const START_BUTTON_LABEL: &str = "Start sensor";
const RESET_BUTTON_LABEL: &str = "Replace / reset sensor";

/// Build one card view per tracked individual, as of `now`.
pub fn card_views(roster: &Roster, now: DateTime<Utc>) -> Vec<SensorCardView> {
    roster
        .individuals
        .iter()
        .map(|individual| card_view(individual, now))
        .collect()
}

pub fn card_view(individual: &TrackedIndividual, now: DateTime<Utc>) -> SensorCardView {
    let classification = lifecycle::classify(&individual.sensor, now);

    let remaining_label = match classification.status {
        SensorStatus::Idle => IDLE_REMAINING_LABEL.to_string(),
        SensorStatus::Expired => EXPIRED_REMAINING_LABEL.to_string(),
        _ => classification
            .remaining
            .map(time_format::format_remaining)
            .unwrap_or_else(|| IDLE_REMAINING_LABEL.to_string()),
    };

    let toggle_label = if classification.status.is_running() {
        RESET_BUTTON_LABEL
    } else {
        START_BUTTON_LABEL
    };

    SensorCardView {
        individual_id: individual.id.clone(),
        name: individual.name.clone(),
        status: classification.status,
        remaining_label,
        start_label: instant_label(classification.started_at),
        official_end_label: instant_label(classification.official_end),
        final_end_label: instant_label(classification.final_end),
        is_expiring_soon: classification.status == SensorStatus::ExpiringSoon,
        toggle_label: toggle_label.to_string(),
        days_before: individual.notification_settings.days_before,
    }
}

fn instant_label(instant: Option<DateTime<Utc>>) -> String {
    instant
        .map(|t| time_format::format_instant(&t.with_timezone(&Local)))
        .unwrap_or_else(|| UNSET_INSTANT_LABEL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn test_roster() -> Roster {
        let names = vec!["First child".to_string(), "Second child".to_string()];
        Roster::from_names(&names)
    }

    fn start_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_idle_card_has_unset_labels() {
        let roster = test_roster();
        let views = card_views(&roster, start_instant());

        assert_eq!(views.len(), 2);
        let view = &views[0];
        assert_eq!(view.status, SensorStatus::Idle);
        assert_eq!(view.remaining_label, "--d --h --m");
        assert_eq!(view.start_label, "-");
        assert_eq!(view.official_end_label, "-");
        assert_eq!(view.final_end_label, "-");
        assert!(!view.is_expiring_soon);
        assert_eq!(view.toggle_label, "Start sensor");
    }

    #[test]
    fn test_active_card_fills_every_label() {
        let mut roster = test_roster();
        roster.individuals[0].sensor.started_at = Some(start_instant());

        let view = card_view(&roster.individuals[0], start_instant() + Duration::days(1));
        assert_eq!(view.status, SensorStatus::Active);
        assert_eq!(view.remaining_label, "9d 12h 0m");
        assert_ne!(view.start_label, "-");
        assert_ne!(view.official_end_label, "-");
        assert_ne!(view.final_end_label, "-");
        assert_eq!(view.toggle_label, "Replace / reset sensor");
    }

    #[test]
    fn test_expiring_soon_sets_the_warning_flag() {
        let mut roster = test_roster();
        roster.individuals[0].sensor.started_at = Some(start_instant());

        let now = start_instant() + Duration::days(10) - Duration::hours(1);
        let view = card_view(&roster.individuals[0], now);
        assert_eq!(view.status, SensorStatus::ExpiringSoon);
        assert!(view.is_expiring_soon);
        assert_eq!(view.remaining_label, "13h 0m");
    }

    #[test]
    fn test_expired_card_shows_expired_instead_of_negative_time() {
        let mut roster = test_roster();
        roster.individuals[0].sensor.started_at = Some(start_instant());

        let now = start_instant() + Duration::days(11);
        let view = card_view(&roster.individuals[0], now);
        assert_eq!(view.status, SensorStatus::Expired);
        assert_eq!(view.remaining_label, "Expired");
        // Boundary labels stay visible so the user can see how long ago it ran out
        assert_ne!(view.final_end_label, "-");
    }

    #[test]
    fn test_card_carries_notification_lead_time() {
        let mut roster = test_roster();
        roster.individuals[1].notification_settings.days_before = 3;

        let view = card_view(&roster.individuals[1], start_instant());
        assert_eq!(view.days_before, 3);
    }
}
