//! Time bucketing: wall-clock timestamps to minutes relative to a day start

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::warn;

use daygrid_domain::constants::{MINUTES_PER_DAY, MINUTES_PER_HOUR};
use daygrid_domain::{DayScale, RelativeSession, SessionRecord};

/// Local midnight of the reference date in `tz`, or of `now` if absent.
///
/// DST gaps that swallow midnight resolve to the earliest valid local
/// instant of the day.
pub fn day_start(reference_date: Option<NaiveDate>, now: DateTime<Utc>, tz: Tz) -> DateTime<Utc> {
    let date = reference_date.unwrap_or_else(|| now.with_timezone(&tz).date_naive());
    let midnight = date.and_time(NaiveTime::MIN);

    tz.from_local_datetime(&midnight)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(midnight + Duration::hours(1))).earliest())
        .map_or_else(|| Utc.from_utc_datetime(&midnight), |local| local.with_timezone(&Utc))
}

/// Annotate a session with minutes relative to `day_start`.
///
/// Returns `None` when the record should be dropped: non-positive span, or
/// the whole session ends before the day starts. A negative relative start
/// is clamped to 0; that signals upstream data inconsistency, never a fatal
/// condition.
pub fn relativize(
    record: &SessionRecord,
    day_start: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Option<RelativeSession> {
    let start = record.start_time();
    let end = record.end_time_or(now);
    let span_seconds = (end - start).num_seconds();
    if span_seconds <= 0 {
        return None;
    }

    let mut start_minutes = (start - day_start).num_minutes();
    let end_minutes = (end - day_start).num_minutes();

    if start_minutes < 0 {
        warn!(start_minutes, label = record.label(), "clamping negative relative start");
        start_minutes = 0;
    }

    // Retains a session that merely straddles the day start; fully
    // out-of-day sessions are dropped
    if end_minutes <= start_minutes {
        return None;
    }

    Some(RelativeSession {
        start_minutes,
        end_minutes,
        label: record.label().to_string(),
        span_seconds,
    })
}

/// Vertical scale of the day column in minutes.
///
/// `Fixed` is a strict 24h day; `Elastic` grows to the ceiling hour of the
/// latest observed end once a live or late session runs past midnight.
pub fn total_minutes(scale: DayScale, sessions: &[RelativeSession]) -> i64 {
    match scale {
        DayScale::Fixed => MINUTES_PER_DAY,
        DayScale::Elastic => {
            let max_end = sessions.iter().map(|s| s.end_minutes).max().unwrap_or(0);
            let ceiled =
                (max_end + MINUTES_PER_HOUR - 1).div_euclid(MINUTES_PER_HOUR) * MINUTES_PER_HOUR;
            ceiled.max(MINUTES_PER_DAY)
        }
    }
}
