//! Shared builders for the integration suite

use chrono::{DateTime, TimeZone, Utc};
use daygrid_domain::SessionRecord;

/// 2024-10-<day> at the given UTC wall time.
pub fn at(day: u32, hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 10, day, hour, minute, second)
        .single()
        .unwrap()
}

/// Completed session on 2024-10-24, minutes given as hour/minute pairs.
pub fn session(start: (u32, u32), end: (u32, u32), app: &str) -> SessionRecord {
    SessionRecord::completed(
        at(24, start.0, start.1, 0),
        at(24, end.0, end.1, 0),
        Some(app.to_string()),
    )
}

/// Completed session that ends on the following day.
pub fn overnight_session(start: (u32, u32), end: (u32, u32), app: &str) -> SessionRecord {
    SessionRecord::completed(
        at(24, start.0, start.1, 0),
        at(25, end.0, end.1, 0),
        Some(app.to_string()),
    )
}
