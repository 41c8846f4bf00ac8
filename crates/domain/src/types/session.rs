//! Session records supplied by the activity data provider
//!
//! A session is a contiguous period of observed activity in one foreground
//! application. Whether a session is still running is encoded in the type
//! itself, so downstream code never needs identity comparisons or
//! start-timestamp proximity heuristics to decide when to substitute "now"
//! for an end time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::FALLBACK_APP_LABEL;

/// A finished activity period with both endpoints persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedSession {
    /// When the session started
    pub start_time: DateTime<Utc>,

    /// When the session ended. Upstream data is best-effort; `end_time`
    /// earlier than `start_time` is possible and filtered by the engine
    pub end_time: DateTime<Utc>,

    /// Foreground process/app name (None for untagged focus sessions)
    pub app_name: Option<String>,
}

/// An activity period still in progress; its end is always "now"
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveSession {
    /// When the session started
    pub start_time: DateTime<Utc>,

    /// Foreground process/app name (None for untagged focus sessions)
    pub app_name: Option<String>,
}

/// A session record: completed or still running
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SessionRecord {
    /// Both endpoints persisted
    Completed(CompletedSession),
    /// End time is not persisted; callers substitute "now"
    Live(LiveSession),
}

impl SessionRecord {
    /// Convenience constructor for a completed record
    pub fn completed(
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        app_name: Option<String>,
    ) -> Self {
        Self::Completed(CompletedSession { start_time, end_time, app_name })
    }

    /// Convenience constructor for a live record
    pub fn live(start_time: DateTime<Utc>, app_name: Option<String>) -> Self {
        Self::Live(LiveSession { start_time, app_name })
    }

    /// Start timestamp of the record
    pub fn start_time(&self) -> DateTime<Utc> {
        match self {
            Self::Completed(s) => s.start_time,
            Self::Live(s) => s.start_time,
        }
    }

    /// End timestamp, substituting `now` for live records
    pub fn end_time_or(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Self::Completed(s) => s.end_time,
            Self::Live(_) => now,
        }
    }

    /// Elapsed seconds, substituting `now` for live records.
    /// May be negative for inconsistent upstream data; callers filter.
    pub fn duration_secs(&self, now: DateTime<Utc>) -> i64 {
        (self.end_time_or(now) - self.start_time()).num_seconds()
    }

    /// App name if one was recorded
    pub fn app_name(&self) -> Option<&str> {
        match self {
            Self::Completed(s) => s.app_name.as_deref(),
            Self::Live(s) => s.app_name.as_deref(),
        }
    }

    /// Display label, falling back to the generic focus-session label
    pub fn label(&self) -> &str {
        self.app_name().unwrap_or(FALLBACK_APP_LABEL)
    }

    /// Whether the record is still in progress
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }
}

/// Drop completed records that duplicate a live record.
///
/// Providers sometimes persist a live session as completed before the UI
/// learns it ended; both copies then arrive with near-equal starts. A
/// completed record starting within `LIVE_START_TOLERANCE_SECS` of any live
/// record's start is treated as that duplicate and removed.
pub fn dedupe_live_overlap(records: &[SessionRecord]) -> Vec<SessionRecord> {
    use crate::constants::LIVE_START_TOLERANCE_SECS;

    let live_starts: Vec<chrono::DateTime<Utc>> =
        records.iter().filter(|r| r.is_live()).map(SessionRecord::start_time).collect();

    records
        .iter()
        .filter(|record| {
            if record.is_live() {
                return true;
            }
            !live_starts.iter().any(|live| {
                (record.start_time() - *live).num_seconds().abs() <= LIVE_START_TOLERANCE_SECS
            })
        })
        .cloned()
        .collect()
}
