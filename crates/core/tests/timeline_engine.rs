//! End-to-end pipeline tests: raw session records in, render-ready layout out.

mod support;

use chrono::NaiveDate;
use daygrid_core::{aggregate_app_totals, aggregate_focus_stats, TimelineEngine};
use daygrid_domain::{DayScale, LayoutConfig, MergeMode, SessionRecord};

use support::{at, overnight_session, session};

fn day() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2024, 10, 24)
}

fn noon_next_day() -> chrono::DateTime<chrono::Utc> {
    at(25, 12, 0, 0)
}

#[test]
fn close_sessions_of_one_app_become_one_block() {
    // AC: gaps of 5 minutes or less between same-app sessions disappear
    let engine = TimelineEngine::new(LayoutConfig::default());
    let records = vec![
        session((9, 0), (9, 20), "Editor"),
        session((9, 24), (9, 50), "Editor"),
    ];

    let layout = engine.build_day(&records, day(), noon_next_day()).unwrap();

    assert_eq!(layout.blocks.len(), 1);
    assert_eq!(layout.blocks[0].duration_minutes, 50);
    assert_eq!(layout.blocks[0].title, "Editor");
}

#[test]
fn breakdown_counts_contributed_seconds_not_block_span() {
    // A folded 2-minute Browser interruption keeps its own 120 seconds;
    // the Editor share stays at its real 38 minutes even though the block
    // spans 40
    let config = LayoutConfig { summary_view: true, ..LayoutConfig::default() };
    let engine = TimelineEngine::new(config);
    let records = vec![
        session((9, 0), (9, 20), "Editor"),
        session((9, 20), (9, 22), "Browser"),
        session((9, 22), (9, 40), "Editor"),
    ];

    let layout = engine.build_day(&records, day(), noon_next_day()).unwrap();

    assert_eq!(layout.blocks.len(), 1);
    let block = &layout.blocks[0];
    assert_eq!(block.duration_minutes, 40);

    let total: i64 = block.app_breakdown.iter().map(|a| a.seconds).sum();
    assert_eq!(total, 40 * 60);
    assert_eq!(block.app_breakdown[0].name, "Editor");
    assert_eq!(block.app_breakdown[0].seconds, 38 * 60);
    assert_eq!(block.app_breakdown[1].seconds, 120);
}

#[test]
fn long_foreign_session_stays_its_own_block_in_summary_view() {
    let config = LayoutConfig { summary_view: true, ..LayoutConfig::default() };
    let engine = TimelineEngine::new(config);
    let records = vec![
        session((9, 0), (9, 30), "Editor"),
        // 20 minutes of Browser exceeds the 15-minute exception
        session((9, 30), (9, 50), "Browser"),
        session((9, 50), (10, 10), "Editor"),
    ];

    let layout = engine.build_day(&records, day(), noon_next_day()).unwrap();

    assert_eq!(layout.blocks.len(), 3);
    assert_eq!(layout.blocks[1].title, "Browser");
}

#[test]
fn grid_snap_produces_quarter_hour_edges() {
    let config = LayoutConfig {
        merge_mode: MergeMode::grid_snap(),
        ..LayoutConfig::default()
    };
    let engine = TimelineEngine::new(config);
    let records = vec![session((9, 7), (9, 26), "Editor")];

    let layout = engine.build_day(&records, day(), noon_next_day()).unwrap();

    assert_eq!(layout.blocks.len(), 1);
    // 547 snaps to 540, 566 snaps to 570
    assert_eq!(layout.blocks[0].duration_minutes, 30);
    let top = layout.blocks[0].top_percent;
    assert!((top - 540.0 / 1440.0 * 100.0).abs() < 1e-9);
}

#[test]
fn overlapping_apps_occupy_separate_tracks() {
    let engine = TimelineEngine::new(LayoutConfig::default());
    let records = vec![
        session((9, 0), (10, 0), "Editor"),
        session((9, 30), (10, 30), "Browser"),
    ];

    let layout = engine.build_day(&records, day(), noon_next_day()).unwrap();

    assert_eq!(layout.track_count, 2);
    let mut lefts: Vec<f64> = layout.blocks.iter().map(|b| b.left_percent).collect();
    lefts.sort_by(f64::total_cmp);
    assert!((lefts[0] - 0.0).abs() < 1e-9);
    assert!((lefts[1] - 50.0).abs() < 1e-9);
}

#[test]
fn summary_view_stacks_everything_on_one_track() {
    let config = LayoutConfig { summary_view: true, ..LayoutConfig::default() };
    let engine = TimelineEngine::new(config);
    let records = vec![
        session((9, 0), (10, 0), "Editor"),
        session((9, 30), (10, 30), "Browser"),
    ];

    let layout = engine.build_day(&records, day(), noon_next_day()).unwrap();

    assert_eq!(layout.track_count, 1);
    for block in &layout.blocks {
        assert!((block.width_percent - 100.0).abs() < 1e-9);
    }
}

#[test]
fn fixed_scale_wraps_past_midnight() {
    let engine = TimelineEngine::new(LayoutConfig::default());
    let records = vec![overnight_session((23, 30), (0, 30), "Editor")];

    let layout = engine.build_day(&records, day(), noon_next_day()).unwrap();

    assert_eq!(layout.total_minutes, 1440);
    assert_eq!(layout.blocks.len(), 2);
    let wrapped = layout
        .blocks
        .iter()
        .find(|b| b.top_percent.abs() < 1e-9)
        .unwrap();
    assert_eq!(wrapped.time_range_text, "12:00 AM - 12:30 AM");
    assert!(wrapped.is_night_time);
}

#[test]
fn elastic_scale_extends_instead_of_wrapping() {
    let config = LayoutConfig { day_scale: DayScale::Elastic, ..LayoutConfig::default() };
    let engine = TimelineEngine::new(config);
    let records = vec![overnight_session((23, 30), (0, 30), "Editor")];

    let layout = engine.build_day(&records, day(), noon_next_day()).unwrap();

    assert_eq!(layout.total_minutes, 1500);
    assert_eq!(layout.blocks.len(), 1);
    assert_eq!(layout.blocks[0].duration_minutes, 60);
}

#[test]
fn default_boundary_marks_early_morning_as_night() {
    let engine = TimelineEngine::new(LayoutConfig::default());
    let records = vec![
        session((2, 0), (3, 0), "Editor"),
        session((10, 0), (11, 0), "Editor"),
    ];

    let layout = engine.build_day(&records, day(), noon_next_day()).unwrap();

    let night: Vec<bool> = layout.blocks.iter().map(|b| b.is_night_time).collect();
    assert_eq!(night, [true, false]);
}

#[test]
fn evening_boundary_marks_late_blocks_as_night() {
    let config = LayoutConfig { night_boundary_hour: 22, ..LayoutConfig::default() };
    let engine = TimelineEngine::new(config);
    let records = vec![
        session((21, 0), (21, 30), "Editor"),
        session((22, 30), (23, 0), "Editor"),
    ];

    let layout = engine.build_day(&records, day(), noon_next_day()).unwrap();

    let night: Vec<bool> = layout.blocks.iter().map(|b| b.is_night_time).collect();
    assert_eq!(night, [false, true]);
}

#[test]
fn live_session_advances_with_now() {
    let engine = TimelineEngine::new(LayoutConfig::default());
    let records = vec![SessionRecord::live(at(24, 10, 0, 0), Some("Editor".into()))];

    let earlier = engine.build_day(&records, day(), at(24, 10, 5, 0)).unwrap();
    let later = engine.build_day(&records, day(), at(24, 10, 30, 0)).unwrap();

    assert_eq!(earlier.blocks[0].duration_minutes, 5);
    assert_eq!(later.blocks[0].duration_minutes, 30);
}

#[test]
fn repeated_builds_are_identical_apart_from_ids() {
    let engine = TimelineEngine::new(LayoutConfig::default());
    let records = vec![
        session((9, 0), (9, 45), "Editor"),
        session((9, 46), (10, 0), "Browser"),
        session((14, 0), (15, 0), "Editor"),
    ];
    let now = noon_next_day();

    let first = engine.build_day(&records, day(), now).unwrap();
    let second = engine.build_day(&records, day(), now).unwrap();

    assert_eq!(first.total_minutes, second.total_minutes);
    assert_eq!(first.track_count, second.track_count);
    assert_eq!(first.blocks.len(), second.blocks.len());
    for (a, b) in first.blocks.iter().zip(&second.blocks) {
        assert_eq!(a.title, b.title);
        assert_eq!(a.duration_minutes, b.duration_minutes);
        assert_eq!(a.time_range_text, b.time_range_text);
    }
}

#[test]
fn input_order_does_not_change_the_layout() {
    let engine = TimelineEngine::new(LayoutConfig::default());
    let forward = vec![
        session((9, 0), (9, 30), "Editor"),
        session((11, 0), (11, 30), "Browser"),
        session((13, 0), (13, 30), "Terminal"),
    ];
    let mut reversed = forward.clone();
    reversed.reverse();
    let now = noon_next_day();

    let a = engine.build_day(&forward, day(), now).unwrap();
    let b = engine.build_day(&reversed, day(), now).unwrap();

    let titles_a: Vec<&str> = a.blocks.iter().map(|x| x.title.as_str()).collect();
    let titles_b: Vec<&str> = b.blocks.iter().map(|x| x.title.as_str()).collect();
    assert_eq!(titles_a, titles_b);
}

#[test]
fn split_day_halves_the_column() {
    let engine = TimelineEngine::new(LayoutConfig::default());
    let left = vec![session((9, 0), (10, 0), "Editor")];
    let right = vec![session((9, 0), (10, 0), "Browser")];

    let layout = engine
        .build_split_day(&left, &right, day(), noon_next_day())
        .unwrap();

    assert_eq!(layout.blocks.len(), 2);
    for block in &layout.blocks {
        assert!((block.width_percent - 50.0).abs() < 1e-9);
    }
    let editor = layout.blocks.iter().find(|b| b.title == "Editor").unwrap();
    let browser = layout.blocks.iter().find(|b| b.title == "Browser").unwrap();
    assert!((editor.left_percent - 0.0).abs() < 1e-9);
    assert!((browser.left_percent - 50.0).abs() < 1e-9);
}

#[test]
fn stats_agree_with_the_layout_on_a_plain_day() {
    let records = vec![
        session((9, 0), (10, 0), "Editor"),
        session((10, 0), (10, 30), "Browser"),
    ];
    let now = noon_next_day();

    let focus = aggregate_focus_stats(&records, now, chrono_tz::UTC);
    assert_eq!(focus.total_seconds, 90 * 60);
    assert_eq!(focus.peak_hour.as_deref(), Some("9 AM"));

    let usage = aggregate_app_totals(&records, now);
    assert_eq!(usage.total_seconds, 90 * 60);
    assert_eq!(usage.apps[0].name, "Editor");
}

#[test]
fn ignored_apps_are_never_night_tinted() {
    let config = LayoutConfig {
        ignored_apps: vec!["Screensaver".into()],
        ..LayoutConfig::default()
    };
    let engine = TimelineEngine::new(config);
    let records = vec![
        session((2, 0), (3, 0), "Screensaver"),
        session((3, 30), (4, 0), "Editor"),
    ];

    let layout = engine.build_day(&records, day(), noon_next_day()).unwrap();

    let saver = layout.blocks.iter().find(|b| b.title == "Screensaver").unwrap();
    let editor = layout.blocks.iter().find(|b| b.title == "Editor").unwrap();
    assert!(!saver.is_night_time);
    assert!(editor.is_night_time);
}
