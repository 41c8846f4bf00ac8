//! Display formatting helpers for the renderer

use chrono::{DateTime, Timelike};
use chrono_tz::Tz;

/// Format an hour of day (0..=23) as 12-hour "H AM/PM".
/// 0 -> "12 AM", 12 -> "12 PM", 13 -> "1 PM".
pub fn format_hour_12(hour: u32) -> String {
    let (display, suffix) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!("{display} {suffix}")
}

/// Format a duration in minutes as "2h 5m", "3h", or "45m"
pub fn format_duration_text(minutes: i64) -> String {
    let minutes = minutes.max(0);
    let hours = minutes / 60;
    let rest = minutes % 60;
    if hours > 0 && rest > 0 {
        format!("{hours}h {rest}m")
    } else if hours > 0 {
        format!("{hours}h")
    } else {
        format!("{rest}m")
    }
}

/// Format a local clock time as "9:05 AM"
pub fn format_clock_time(local: DateTime<Tz>) -> String {
    let hour12 = match local.hour() % 12 {
        0 => 12,
        h => h,
    };
    let suffix = if local.hour() < 12 { "AM" } else { "PM" };
    format!("{hour12}:{:02} {suffix}", local.minute())
}

/// Format a local clock range as "9:00 AM - 9:20 AM"
pub fn format_time_range(start: DateTime<Tz>, end: DateTime<Tz>) -> String {
    format!("{} - {}", format_clock_time(start), format_clock_time(end))
}
