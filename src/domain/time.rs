//! Wall clock formatting for timeline entries

use chrono::{TimeZone, Timelike};

/// Placeholder for timestamps chrono cannot represent
pub const INVALID_TIME: &str = "--:--:--";

/// Format a millisecond epoch timestamp as `HH:MM:SS` in `zone`.
pub fn format_time<Tz: TimeZone>(timestamp_ms: i64, zone: &Tz) -> String {
    match zone.timestamp_millis_opt(timestamp_ms).earliest() {
        Some(date) => format!(
            "{:02}:{:02}:{:02}",
            date.hour(),
            date.minute(),
            date.second()
        ),
        None => INVALID_TIME.to_string(),
    }
}
