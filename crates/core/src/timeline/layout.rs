//! Final projection from tracked blocks to renderable layout records

use chrono::{DateTime, Duration, Utc};
use daygrid_domain::constants::{MINUTES_PER_DAY, MINUTES_PER_HOUR};
use daygrid_domain::{
    AppShare, DayScale, LayoutBlock, LayoutConfig, Side, TrackLayout, TrackedBlock,
};

use crate::timeline::night::is_night_time;
use crate::utils::format::{format_duration_text, format_time_range};

/// Map tracked blocks to normalized layout records.
///
/// In a fixed-scale day, a block crossing minute 1440 is emitted as two
/// records: the tail wraps to the top of the column and keeps its real
/// clock time for display and night classification.
pub fn map_blocks(
    tracks: &TrackLayout,
    config: &LayoutConfig,
    day_start: DateTime<Utc>,
    total_minutes: i64,
) -> Vec<LayoutBlock> {
    let mut blocks = Vec::with_capacity(tracks.blocks.len());

    for tracked in &tracks.blocks {
        for piece in split_pieces(tracked, config.day_scale) {
            blocks.push(map_piece(tracked, &piece, tracks.track_count, config, day_start, total_minutes));
        }
    }

    blocks
}

/// One displayable span of a block: real clock minutes plus the column
/// position they are drawn at (differs only for a wrapped tail)
struct Piece {
    clock_start: i64,
    clock_end: i64,
    display_start: i64,
    display_end: i64,
}

fn split_pieces(tracked: &TrackedBlock, scale: DayScale) -> Vec<Piece> {
    let start = tracked.block.start_minutes;
    let end = tracked.block.end_minutes;

    if scale == DayScale::Fixed && end > MINUTES_PER_DAY {
        if start < MINUTES_PER_DAY {
            return vec![
                Piece {
                    clock_start: start,
                    clock_end: MINUTES_PER_DAY,
                    display_start: start,
                    display_end: MINUTES_PER_DAY,
                },
                Piece {
                    clock_start: MINUTES_PER_DAY,
                    clock_end: end,
                    display_start: 0,
                    display_end: end - MINUTES_PER_DAY,
                },
            ];
        }
        // Entirely on the next day: wrap the whole block
        return vec![Piece {
            clock_start: start,
            clock_end: end,
            display_start: start - MINUTES_PER_DAY,
            display_end: end - MINUTES_PER_DAY,
        }];
    }

    vec![Piece { clock_start: start, clock_end: end, display_start: start, display_end: end }]
}

fn map_piece(
    tracked: &TrackedBlock,
    piece: &Piece,
    track_count: usize,
    config: &LayoutConfig,
    day_start: DateTime<Utc>,
    total_minutes: i64,
) -> LayoutBlock {
    let total = total_minutes.max(1) as f64;
    let top_percent = piece.display_start as f64 / total * 100.0;
    let height_percent = (piece.display_end - piece.display_start) as f64 / total * 100.0;

    // Side assignment replaces fractional track math with a fixed 50/50
    let (left_percent, width_percent) = match tracked.side {
        Some(Side::Left) => (0.0, 50.0),
        Some(Side::Right) => (50.0, 50.0),
        None => {
            let width = 100.0 / track_count.max(1) as f64;
            (tracked.track_index as f64 * width, width)
        }
    };

    let title = tracked.block.dominant_label().to_string();
    let start_hour = ((piece.clock_start / MINUTES_PER_HOUR) % 24).unsigned_abs() as u32;
    let is_night_time = !config.is_ignored(&title)
        && is_night_time(start_hour, config.night_boundary_hour);

    let tz = config.timezone;
    let start_local = (day_start + Duration::minutes(piece.clock_start)).with_timezone(&tz);
    let end_local = (day_start + Duration::minutes(piece.clock_end)).with_timezone(&tz);

    let app_breakdown: Vec<AppShare> = tracked
        .block
        .labels
        .sorted_desc()
        .into_iter()
        .map(|entry| AppShare { name: entry.name, seconds: entry.seconds })
        .collect();

    LayoutBlock {
        top_percent,
        height_percent,
        left_percent,
        width_percent,
        title,
        time_range_text: format_time_range(start_local, end_local),
        duration_text: format_duration_text(piece.display_end - piece.display_start),
        duration_minutes: piece.display_end - piece.display_start,
        is_night_time,
        app_breakdown,
        side: tracked.side,
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use daygrid_domain::{LabelDistribution, MergedBlock, TrackMode};

    use crate::timeline::tracks::assign_tracks;

    use super::*;

    fn day_start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 24, 0, 0, 0).single().unwrap()
    }

    fn block(start_minutes: i64, end_minutes: i64, label: &str) -> MergedBlock {
        MergedBlock::new(
            start_minutes,
            end_minutes,
            LabelDistribution::with(label, (end_minutes - start_minutes) * 60),
        )
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    #[test]
    fn single_block_maps_to_percentages_and_text() {
        let tracks = assign_tracks(vec![block(540, 560, "Editor")], TrackMode::Detail);
        let laid = map_blocks(&tracks, &LayoutConfig::default(), day_start(), 1440);

        assert_eq!(laid.len(), 1);
        let b = &laid[0];
        assert_close(b.top_percent, 540.0 / 1440.0 * 100.0);
        assert_close(b.height_percent, 20.0 / 1440.0 * 100.0);
        assert_close(b.left_percent, 0.0);
        assert_close(b.width_percent, 100.0);
        assert_eq!(b.title, "Editor");
        assert_eq!(b.time_range_text, "9:00 AM - 9:20 AM");
        assert_eq!(b.duration_text, "20m");
        assert_eq!(b.duration_minutes, 20);
        assert!(!b.is_night_time);
    }

    #[test]
    fn overlapping_blocks_split_the_width_by_track() {
        let tracks =
            assign_tracks(vec![block(540, 600, "Editor"), block(550, 610, "Browser")], TrackMode::Detail);
        let laid = map_blocks(&tracks, &LayoutConfig::default(), day_start(), 1440);

        assert_close(laid[0].width_percent, 50.0);
        assert_close(laid[0].left_percent, 0.0);
        assert_close(laid[1].width_percent, 50.0);
        assert_close(laid[1].left_percent, 50.0);
    }

    #[test]
    fn sides_override_track_math_with_fixed_halves() {
        let mut right = block(540, 600, "Planned");
        right.forced_side = Some(Side::Right);
        let tracks = assign_tracks(vec![block(540, 600, "Editor"), right], TrackMode::Split);
        let laid = map_blocks(&tracks, &LayoutConfig::default(), day_start(), 1440);

        let left = laid.iter().find(|b| b.side == Some(Side::Left)).unwrap();
        let right = laid.iter().find(|b| b.side == Some(Side::Right)).unwrap();
        assert_close(left.left_percent, 0.0);
        assert_close(left.width_percent, 50.0);
        assert_close(right.left_percent, 50.0);
        assert_close(right.width_percent, 50.0);
    }

    #[test]
    fn fixed_scale_wraps_midnight_crossing_blocks() {
        // 23:50 - 00:30 next day
        let tracks = assign_tracks(vec![block(1430, 1470, "Editor")], TrackMode::Detail);
        let laid = map_blocks(&tracks, &LayoutConfig::default(), day_start(), 1440);

        assert_eq!(laid.len(), 2);
        assert_eq!(laid[0].duration_minutes, 10);
        assert_close(laid[0].top_percent, 1430.0 / 1440.0 * 100.0);
        assert_eq!(laid[1].duration_minutes, 30);
        assert_close(laid[1].top_percent, 0.0);
        // The wrapped tail starts at 00:00: night under the default boundary
        assert!(laid[1].is_night_time);
        assert!(!laid[0].is_night_time);
        assert_eq!(laid[1].time_range_text, "12:00 AM - 12:30 AM");
    }

    #[test]
    fn elastic_scale_keeps_late_blocks_whole() {
        let config = LayoutConfig { day_scale: DayScale::Elastic, ..LayoutConfig::default() };
        let tracks = assign_tracks(vec![block(1430, 1470, "Editor")], TrackMode::Detail);
        let laid = map_blocks(&tracks, &config, day_start(), 1500);

        assert_eq!(laid.len(), 1);
        assert_eq!(laid[0].duration_minutes, 40);
        assert_close(laid[0].top_percent, 1430.0 / 1500.0 * 100.0);
    }

    #[test]
    fn ignored_apps_are_never_night() {
        let config = LayoutConfig {
            ignored_apps: vec!["Screensaver".into()],
            ..LayoutConfig::default()
        };
        // 01:00, night under boundary 24 for anything not ignored
        let tracks = assign_tracks(vec![block(60, 120, "Screensaver")], TrackMode::Detail);
        let laid = map_blocks(&tracks, &config, day_start(), 1440);
        assert!(!laid[0].is_night_time);

        let tracks = assign_tracks(vec![block(60, 120, "Editor")], TrackMode::Detail);
        let laid = map_blocks(&tracks, &config, day_start(), 1440);
        assert!(laid[0].is_night_time);
    }

    #[test]
    fn breakdown_is_sorted_descending() {
        let mut labels = LabelDistribution::with("Editor", 300);
        labels.add("Browser", 900);
        let block = MergedBlock::new(540, 560, labels);
        let tracks = assign_tracks(vec![block], TrackMode::Detail);
        let laid = map_blocks(&tracks, &LayoutConfig::default(), day_start(), 1440);

        let names: Vec<&str> = laid[0].app_breakdown.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Browser", "Editor"]);
        // Title follows the dominant label
        assert_eq!(laid[0].title, "Browser");
    }
}
