//! Stats aggregation over raw sessions
//!
//! Aggregates run off the raw (and live) session records, not off merged
//! blocks, to keep per-second accuracy. The two contracts accept
//! independently-supplied record sets since callers feed them differently
//! filtered views of the same day.

use ahash::AHashMap;
use chrono::{DateTime, Duration, Timelike, Utc};
use chrono_tz::Tz;

use daygrid_domain::constants::SECONDS_PER_HOUR;
use daygrid_domain::{dedupe_live_overlap, AppShare, AppUsageStats, FocusStats, SessionRecord};

use crate::utils::format::format_hour_12;

/// Total focused seconds plus the busiest local clock hour.
///
/// Sessions are split into per-calendar-hour segments in `tz` before
/// accumulating, so a session spanning 23:40-00:20 credits 20 minutes to
/// hour 23 and 20 minutes to hour 0.
pub fn aggregate_focus_stats(
    records: &[SessionRecord],
    now: DateTime<Utc>,
    tz: Tz,
) -> FocusStats {
    let records = dedupe_live_overlap(records);
    let mut total_seconds = 0i64;
    let mut histogram = [0i64; 24];

    for record in &records {
        let secs = record.duration_secs(now);
        if secs <= 0 {
            continue;
        }
        total_seconds += secs;

        let end = record.end_time_or(now);
        let mut cursor = record.start_time();
        while cursor < end {
            let local = cursor.with_timezone(&tz);
            let into_hour = i64::from(local.minute() * 60 + local.second());
            let step = (SECONDS_PER_HOUR - into_hour).min((end - cursor).num_seconds());
            if step <= 0 {
                // Sub-second remainder; nothing left to attribute
                break;
            }
            histogram[local.hour() as usize] += step;
            cursor += Duration::seconds(step);
        }
    }

    FocusStats { total_seconds, peak_hour: peak_hour(&histogram) }
}

/// Hour with the strictly greatest accumulated seconds; earlier hours win
/// exact ties. `None` when nothing accumulated
fn peak_hour(histogram: &[i64; 24]) -> Option<String> {
    let mut best: Option<(usize, i64)> = None;
    for (hour, &secs) in histogram.iter().enumerate() {
        if secs <= 0 {
            continue;
        }
        match best {
            Some((_, best_secs)) if secs > best_secs => best = Some((hour, secs)),
            None => best = Some((hour, secs)),
            _ => {}
        }
    }
    best.map(|(hour, _)| format_hour_12(hour as u32))
}

/// Per-app seconds, sorted descending with insertion order preserved on
/// ties. Unnamed sessions fall under the generic focus-session label
pub fn aggregate_app_totals(records: &[SessionRecord], now: DateTime<Utc>) -> AppUsageStats {
    let records = dedupe_live_overlap(records);
    let mut apps: Vec<AppShare> = Vec::new();
    let mut index: AHashMap<String, usize> = AHashMap::new();
    let mut total_seconds = 0i64;

    for record in &records {
        let secs = record.duration_secs(now);
        if secs <= 0 {
            continue;
        }
        total_seconds += secs;

        let label = record.label();
        if let Some(&position) = index.get(label) {
            apps[position].seconds += secs;
        } else {
            index.insert(label.to_string(), apps.len());
            apps.push(AppShare { name: label.to_string(), seconds: secs });
        }
    }

    // Stable sort keeps first-seen order on equal durations
    apps.sort_by(|a, b| b.seconds.cmp(&a.seconds));

    AppUsageStats { total_seconds, apps }
}
