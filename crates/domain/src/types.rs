//! Domain types and models

pub mod config;
pub mod session;
pub mod stats;
pub mod timeline;

// Re-export the commonly used types for convenience
pub use config::{DayScale, LayoutConfig, MergeMode, TrackMode};
pub use session::{dedupe_live_overlap, CompletedSession, LiveSession, SessionRecord};
pub use stats::{AppShare, AppUsageStats, FocusStats};
pub use timeline::{
    DayLayout, LabelDistribution, LabelSeconds, LayoutBlock, MergedBlock, RelativeSession, Side,
    TrackLayout, TrackedBlock,
};
