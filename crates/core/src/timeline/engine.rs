//! Timeline engine - orchestrates the full layout pipeline

use chrono::{DateTime, NaiveDate, Utc};
use daygrid_domain::{
    dedupe_live_overlap, DayLayout, LayoutConfig, MergedBlock, RelativeSession, Result,
    SessionRecord, Side, TrackMode,
};
use tracing::debug;

use super::{bucketer, layout, merge, tracks};

/// Layout engine for one configured day view.
///
/// Every build is a pure function of its arguments: no caching, no hidden
/// state. Callers re-invoke it on a timer while a live session exists to
/// advance the "now" cursor, at whatever cadence they like.
pub struct TimelineEngine {
    config: LayoutConfig,
}

impl TimelineEngine {
    /// Create an engine with the given configuration
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Build the layout for a single day view.
    ///
    /// `reference_date` selects the day column; it defaults to the day
    /// containing `now` in the configured timezone.
    pub fn build_day(
        &self,
        records: &[SessionRecord],
        reference_date: Option<NaiveDate>,
        now: DateTime<Utc>,
    ) -> Result<DayLayout> {
        let day_start = bucketer::day_start(reference_date, now, self.config.timezone);
        let sessions = self.relativize_sorted(records, day_start, now);
        let total_minutes = bucketer::total_minutes(self.config.day_scale, &sessions);

        let blocks =
            merge::merge_sessions(&sessions, &self.config.merge_mode, self.config.summary_view);
        let track_layout = tracks::assign_tracks(blocks, self.config.track_mode());
        let layout_blocks =
            layout::map_blocks(&track_layout, &self.config, day_start, total_minutes);

        debug!(
            records = records.len(),
            blocks = layout_blocks.len(),
            track_count = track_layout.track_count,
            "built day layout"
        );

        Ok(DayLayout {
            blocks: layout_blocks,
            total_minutes,
            track_count: track_layout.track_count,
        })
    }

    /// Build a split layout: two session sets side by side in half-width
    /// columns (day vs. day, or planned vs. actual).
    ///
    /// Each set is merged independently so blocks never merge across the
    /// split; the right set is side-tagged and the left set defaults per
    /// the split rule.
    pub fn build_split_day(
        &self,
        left: &[SessionRecord],
        right: &[SessionRecord],
        reference_date: Option<NaiveDate>,
        now: DateTime<Utc>,
    ) -> Result<DayLayout> {
        let day_start = bucketer::day_start(reference_date, now, self.config.timezone);

        let left_sessions = self.relativize_sorted(left, day_start, now);
        let right_sessions = self.relativize_sorted(right, day_start, now);

        let mut all_sessions = left_sessions.clone();
        all_sessions.extend(right_sessions.iter().cloned());
        let total_minutes = bucketer::total_minutes(self.config.day_scale, &all_sessions);

        let mut blocks = self.merge_side(&left_sessions, None);
        blocks.extend(self.merge_side(&right_sessions, Some(Side::Right)));

        let track_layout = tracks::assign_tracks(blocks, TrackMode::Split);
        let layout_blocks =
            layout::map_blocks(&track_layout, &self.config, day_start, total_minutes);

        debug!(
            left = left.len(),
            right = right.len(),
            blocks = layout_blocks.len(),
            "built split day layout"
        );

        Ok(DayLayout {
            blocks: layout_blocks,
            total_minutes,
            track_count: track_layout.track_count,
        })
    }

    fn relativize_sorted(
        &self,
        records: &[SessionRecord],
        day_start: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Vec<RelativeSession> {
        let records = dedupe_live_overlap(records);
        let mut sessions: Vec<RelativeSession> = records
            .iter()
            .filter_map(|record| bucketer::relativize(record, day_start, now))
            .collect();
        sessions.sort_by_key(|s| s.start_minutes);
        sessions
    }

    fn merge_side(
        &self,
        sessions: &[RelativeSession],
        side: Option<Side>,
    ) -> Vec<MergedBlock> {
        let mut blocks =
            merge::merge_sessions(sessions, &self.config.merge_mode, self.config.summary_view);
        if side.is_some() {
            for block in &mut blocks {
                block.forced_side = side;
            }
        }
        blocks
    }
}

impl Default for TimelineEngine {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}
