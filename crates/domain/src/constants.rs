//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! engine.

// Merge thresholds
pub const DEFAULT_GAP_MERGE_THRESHOLD_SECS: i64 = 300; // 5 minutes
pub const DEFAULT_LABEL_EXCEPTION_SECS: i64 = 900; // 15 minutes
pub const BRIEF_INTERRUPTION_SECS: i64 = 120; // blocks shorter than this fold into neighbors
pub const DEFAULT_GRID_SNAP_MINUTES: i64 = 15;

// Minimum visual block height so merged blocks stay visible
pub const MIN_CONTINUOUS_BLOCK_MINUTES: i64 = 5;

// Day geometry
pub const MINUTES_PER_DAY: i64 = 1440;
pub const MINUTES_PER_HOUR: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 3600;

// Night classification
pub const DEFAULT_NIGHT_BOUNDARY_HOUR: u32 = 24; // night covers 00:00-05:00
pub const NIGHT_MORNING_END_HOUR: u32 = 5;

// Live session handling
// A completed record starting this close to a live record's start is the
// same session, just-persisted (tolerance depends on upstream write timing)
pub const LIVE_START_TOLERANCE_SECS: i64 = 1;

// Label fallback when a session has no process name
pub const FALLBACK_APP_LABEL: &str = "Focus Session";
