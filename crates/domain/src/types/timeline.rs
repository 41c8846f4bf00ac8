//! Derived timeline types produced by the layout engine
//!
//! All of these are recomputed from scratch on every engine invocation;
//! none carries persisted or incrementally-updated state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::FALLBACK_APP_LABEL;
use crate::types::stats::AppShare;

/// A session annotated with minutes relative to the reference day start
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelativeSession {
    /// Minutes between the session start and the day start (floor, >= 0)
    pub start_minutes: i64,

    /// Minutes between the session end and the day start (floor)
    pub end_minutes: i64,

    /// Display label (app name or the generic fallback)
    pub label: String,

    /// Actual session seconds, used for label distributions. This is the
    /// observed activity time, not the minute-rounded span
    pub span_seconds: i64,
}

impl RelativeSession {
    /// Minute-resolution duration of the session
    pub fn duration_minutes(&self) -> i64 {
        self.end_minutes - self.start_minutes
    }
}

/// Seconds attributed to one label within a distribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSeconds {
    /// Display label
    pub name: String,
    /// Accumulated session seconds
    pub seconds: i64,
}

/// Insertion-ordered label -> seconds distribution
///
/// The dominant label is recomputed by linear scan rather than a running-max
/// field: grid snapping can reorder dominance after a full re-merge, and a
/// scan over a handful of labels cannot desync.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabelDistribution {
    entries: Vec<LabelSeconds>,
}

impl LabelDistribution {
    /// Empty distribution
    pub fn new() -> Self {
        Self::default()
    }

    /// Distribution seeded with a single label
    pub fn with(label: &str, seconds: i64) -> Self {
        let mut dist = Self::new();
        dist.add(label, seconds);
        dist
    }

    /// Add seconds to a label, creating it on first sight.
    /// Insertion order is preserved so ties stay deterministic.
    pub fn add(&mut self, label: &str, seconds: i64) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.name == label) {
            entry.seconds += seconds;
        } else {
            self.entries.push(LabelSeconds { name: label.to_string(), seconds });
        }
    }

    /// Fold another distribution into this one additively
    pub fn merge(&mut self, other: &Self) {
        for entry in &other.entries {
            self.add(&entry.name, entry.seconds);
        }
    }

    /// Label with the strictly greatest accumulated seconds.
    /// Earlier-inserted labels win exact ties (strict `>` comparison).
    pub fn dominant(&self) -> Option<&str> {
        let mut best: Option<&LabelSeconds> = None;
        for entry in &self.entries {
            match best {
                Some(b) if entry.seconds > b.seconds => best = Some(entry),
                None => best = Some(entry),
                _ => {}
            }
        }
        best.map(|e| e.name.as_str())
    }

    /// Sum of all accumulated seconds
    pub fn total_seconds(&self) -> i64 {
        self.entries.iter().map(|e| e.seconds).sum()
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[LabelSeconds] {
        &self.entries
    }

    /// Entries sorted by seconds descending, stable on ties
    pub fn sorted_desc(&self) -> Vec<LabelSeconds> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.seconds.cmp(&a.seconds));
        sorted
    }

    /// Whether any label has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Which half of a split view a block belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    /// Left half (primary day / actual sessions)
    Left,
    /// Right half (second day / planned sessions)
    Right,
}

/// One or more merged sessions rendered as a single visual block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergedBlock {
    /// Unique identifier for the block
    pub id: String,

    /// Block start in minutes from the day start
    pub start_minutes: i64,

    /// Block end in minutes from the day start
    pub end_minutes: i64,

    /// Seconds contributed per label. Sums to the contributing session
    /// seconds, not the gap-filled block span
    pub labels: LabelDistribution,

    /// Side override for split views, set before track assignment
    pub forced_side: Option<Side>,
}

impl MergedBlock {
    /// New block spanning the given minutes with an initial distribution
    pub fn new(start_minutes: i64, end_minutes: i64, labels: LabelDistribution) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            start_minutes,
            end_minutes,
            labels,
            forced_side: None,
        }
    }

    /// Visual span of the block in minutes
    pub fn duration_minutes(&self) -> i64 {
        self.end_minutes - self.start_minutes
    }

    /// Dominant label, falling back to the generic focus-session label
    pub fn dominant_label(&self) -> &str {
        self.labels.dominant().unwrap_or(FALLBACK_APP_LABEL)
    }
}

/// A merged block with its assigned horizontal track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedBlock {
    /// The underlying merged block
    pub block: MergedBlock,

    /// Zero-based track index; width math uses `track_count` unless a side
    /// is resolved
    pub track_index: usize,

    /// Resolved side; present only when the block set is in split layout
    pub side: Option<Side>,
}

/// Result of track assignment over one block set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackLayout {
    /// Blocks in chronological order with track indices
    pub blocks: Vec<TrackedBlock>,

    /// Number of tracks opened (1 when a side split is active)
    pub track_count: usize,
}

/// Final renderable projection of one block. Pure presentation record;
/// never mutated after creation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutBlock {
    /// Vertical offset as a percentage of the day column
    pub top_percent: f64,

    /// Height as a percentage of the day column
    pub height_percent: f64,

    /// Horizontal offset as a percentage of the day column
    pub left_percent: f64,

    /// Width as a percentage of the day column
    pub width_percent: f64,

    /// Dominant label, used as the block title
    pub title: String,

    /// Human-readable range, e.g. "9:00 AM - 9:20 AM"
    pub time_range_text: String,

    /// Human-readable duration, e.g. "1h 20m"
    pub duration_text: String,

    /// Visual span in minutes
    pub duration_minutes: i64,

    /// Whether the block starts in configured night hours
    pub is_night_time: bool,

    /// Per-label breakdown for tooltips, sorted by seconds descending
    pub app_breakdown: Vec<AppShare>,

    /// Split-view side, when active
    pub side: Option<Side>,
}

/// Complete layout for one day view
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayLayout {
    /// Renderable blocks in chronological order
    pub blocks: Vec<LayoutBlock>,

    /// Vertical scale of the day column in minutes (1440, or more for an
    /// elastic day that ran past midnight)
    pub total_minutes: i64,

    /// Number of horizontal tracks
    pub track_count: usize,
}
