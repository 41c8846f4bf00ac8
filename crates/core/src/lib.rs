//! # DayGrid Core
//!
//! Pure layout and aggregation engine - no infrastructure dependencies.
//!
//! This crate contains:
//! - The session-to-timeline pipeline (bucketing, merging, track packing,
//!   night classification, layout mapping)
//! - Stats aggregation over raw sessions (focus totals, peak hour, per-app
//!   usage)
//! - Display formatting helpers for the renderer
//!
//! ## Architecture Principles
//! - Only depends on `daygrid-domain`
//! - No database, HTTP, or platform code
//! - Every entry point is a pure, synchronous function of its inputs;
//!   safe to re-invoke at arbitrary cadence while a live session ticks

pub mod stats;
pub mod timeline;
pub mod utils;

// Re-export specific items to avoid ambiguity
pub use stats::{aggregate_app_totals, aggregate_focus_stats};
pub use timeline::engine::TimelineEngine;
pub use timeline::merge::merge_sessions;
pub use timeline::night::is_night_time;
pub use timeline::tracks::assign_tracks;
// Re-export utilities
pub use utils::format;
