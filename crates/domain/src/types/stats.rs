//! Statistics types for the day view summaries
//!
//! Aggregates are computed from raw sessions, not merged blocks, to keep
//! per-second accuracy.

use serde::{Deserialize, Serialize};

/// Seconds attributed to one app, for breakdown lists and tooltips
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppShare {
    /// Display name of the app
    pub name: String,

    /// Accumulated seconds
    pub seconds: i64,
}

/// Total focused time plus the busiest clock hour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusStats {
    /// Sum of session durations in seconds
    pub total_seconds: i64,

    /// Busiest hour formatted "H AM/PM" (None when nothing accumulated)
    pub peak_hour: Option<String>,
}

impl Default for FocusStats {
    fn default() -> Self {
        Self { total_seconds: 0, peak_hour: None }
    }
}

/// Per-app usage totals, sorted by seconds descending
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUsageStats {
    /// Sum of session durations in seconds
    pub total_seconds: i64,

    /// Per-app totals, descending, stable on ties
    pub apps: Vec<AppShare>,
}
