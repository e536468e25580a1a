//! Display formatting for durations and absolute instants.
//!
//! Labels use a fixed English scheme. `format_instant` keeps the field
//! order month, day, weekday, meridiem, hour, minute regardless of locale.

use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike};

/// Shown when no wear time is left.
const ZERO_LABEL: &str = "0m";

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Render a remaining duration as a days/hours/minutes breakdown.
///
/// Non-positive input collapses to the zero label rather than a negative
/// duration. The days component appears only when non-zero; the hours
/// component appears whenever days do, so day-scale values always read
/// "Nd Nh Nm"; minutes are always present.
pub fn format_remaining(remaining: Duration) -> String {
    let total_seconds = remaining.num_seconds();
    if total_seconds <= 0 {
        return ZERO_LABEL.to_string();
    }

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if hours > 0 || days > 0 {
        parts.push(format!("{}h", hours));
    }
    parts.push(format!("{}m", minutes));
    parts.join(" ")
}

/// Render an absolute instant as "M/D (Wd) AM|PM h:mm" in the instant's
/// own timezone. Callers convert to local time at the presentation edge.
pub fn format_instant<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    let weekday = WEEKDAYS[instant.weekday().num_days_from_sunday() as usize];
    let (is_pm, hour) = instant.hour12();
    let meridiem = if is_pm { "PM" } else { "AM" };
    format!(
        "{}/{} ({}) {} {}:{:02}",
        instant.month(),
        instant.day(),
        weekday,
        meridiem,
        hour,
        instant.minute()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_zero_and_negative_remaining_use_zero_label() {
        assert_eq!(format_remaining(Duration::zero()), "0m");
        assert_eq!(format_remaining(Duration::hours(-1)), "0m");
        assert_eq!(format_remaining(Duration::milliseconds(-1)), "0m");
    }

    #[test]
    fn test_twenty_five_hours_shows_day_hour_and_minute() {
        // 90_000_000 ms = 25h = 1d 1h 0m
        assert_eq!(format_remaining(Duration::milliseconds(90_000_000)), "1d 1h 0m");
    }

    #[test]
    fn test_under_a_minute_rounds_down_to_zero_minutes() {
        assert_eq!(format_remaining(Duration::milliseconds(59_000)), "0m");
    }

    #[test]
    fn test_hours_shown_without_days() {
        assert_eq!(format_remaining(Duration::minutes(150)), "2h 30m");
    }

    #[test]
    fn test_day_scale_keeps_zero_hours_component() {
        assert_eq!(
            format_remaining(Duration::days(2) + Duration::minutes(5)),
            "2d 0h 5m"
        );
    }

    #[test]
    fn test_minutes_only() {
        assert_eq!(format_remaining(Duration::minutes(42)), "42m");
    }

    #[test]
    fn test_instant_field_order_and_padding() {
        let instant = Utc.with_ymd_and_hms(2025, 6, 15, 14, 5, 0).unwrap();
        assert_eq!(format_instant(&instant), "6/15 (Sun) PM 2:05");
    }

    #[test]
    fn test_instant_morning_hours() {
        let instant = Utc.with_ymd_and_hms(2025, 6, 2, 9, 30, 0).unwrap();
        assert_eq!(format_instant(&instant), "6/2 (Mon) AM 9:30");
    }

    #[test]
    fn test_instant_midnight_renders_as_twelve() {
        let instant = Utc.with_ymd_and_hms(2025, 6, 2, 0, 7, 0).unwrap();
        assert_eq!(format_instant(&instant), "6/2 (Mon) AM 12:07");
    }

    #[test]
    fn test_instant_noon_is_pm_twelve() {
        let instant = Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap();
        assert_eq!(format_instant(&instant), "6/2 (Mon) PM 12:00");
    }
}
