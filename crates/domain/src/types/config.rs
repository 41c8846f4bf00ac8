//! Layout configuration supplied by the settings provider
//!
//! One engine parameterized by `MergeMode`, not a copy of the pipeline per
//! UI surface. Configuration is read-only per computation and carries no
//! validation: the engine's job is temporal arithmetic, not input policy.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_GAP_MERGE_THRESHOLD_SECS, DEFAULT_GRID_SNAP_MINUTES, DEFAULT_LABEL_EXCEPTION_SECS,
    DEFAULT_NIGHT_BOUNDARY_HOUR,
};

/// Merge policy for turning raw sessions into visual blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum MergeMode {
    /// Exact endpoints; same-label gap merging with a cross-label second pass
    #[serde(rename_all = "camelCase")]
    Continuous {
        /// Maximum gap bridged by a merge (default 300 = 5 min)
        gap_threshold_secs: i64,
        /// In summary view, a different-label block at least this long
        /// refuses to merge (default 900 = 15 min)
        label_exception_secs: i64,
    },

    /// Endpoints snapped to a minute grid, label-agnostic merging
    #[serde(rename_all = "camelCase")]
    GridSnap {
        /// Maximum gap bridged by the pre-merge (default 300 = 5 min)
        gap_threshold_secs: i64,
        /// Grid resolution in minutes (default 15)
        snap_minutes: i64,
    },
}

impl MergeMode {
    /// Continuous policy with default thresholds
    pub fn continuous() -> Self {
        Self::Continuous {
            gap_threshold_secs: DEFAULT_GAP_MERGE_THRESHOLD_SECS,
            label_exception_secs: DEFAULT_LABEL_EXCEPTION_SECS,
        }
    }

    /// Grid-snap policy with default thresholds
    pub fn grid_snap() -> Self {
        Self::GridSnap {
            gap_threshold_secs: DEFAULT_GAP_MERGE_THRESHOLD_SECS,
            snap_minutes: DEFAULT_GRID_SNAP_MINUTES,
        }
    }
}

impl Default for MergeMode {
    fn default() -> Self {
        Self::continuous()
    }
}

/// Vertical scale of the day column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DayScale {
    /// Strict 24h day; blocks past midnight are split and wrapped
    #[default]
    Fixed,
    /// Day grows to the ceiling hour of the latest observed end
    Elastic,
}

/// Track assignment strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrackMode {
    /// Greedy packing onto the minimum number of tracks
    #[default]
    Detail,
    /// Everything on track 0, full width
    Summary,
    /// Two half-width columns driven by per-block sides
    Split,
}

/// Configuration for one layout computation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Merge policy and its thresholds
    pub merge_mode: MergeMode,

    /// Summary view merges across labels and flattens tracks
    pub summary_view: bool,

    /// Hour at which night begins. Values >= 24 mean "into the next day":
    /// 26 puts night at 02:00-05:00
    pub night_boundary_hour: u32,

    /// Fixed 1440-minute day or elastic past-midnight day
    pub day_scale: DayScale,

    /// Timezone defining the day start and hour buckets
    pub timezone: Tz,

    /// Apps excluded from night coloring (filtering itself happens in the
    /// renderer, outside this engine)
    pub ignored_apps: Vec<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            merge_mode: MergeMode::default(),
            summary_view: false,
            night_boundary_hour: DEFAULT_NIGHT_BOUNDARY_HOUR, // 24: night is 00:00-05:00
            day_scale: DayScale::Fixed,
            timezone: chrono_tz::UTC,
            ignored_apps: Vec::new(),
        }
    }
}

impl LayoutConfig {
    /// Track mode implied by this configuration for a single-set day view
    pub fn track_mode(&self) -> TrackMode {
        if self.summary_view {
            TrackMode::Summary
        } else {
            TrackMode::Detail
        }
    }

    /// Whether the app is on the ignored list
    pub fn is_ignored(&self, app: &str) -> bool {
        self.ignored_apps.iter().any(|a| a == app)
    }
}
