//! Night-time classification of block start hours
//!
//! The two boundary branches are deliberately asymmetric: early-morning
//! hours count as night only when the boundary reaches past midnight
//! (>= 24). With a same-day boundary they are day.

use daygrid_domain::constants::NIGHT_MORNING_END_HOUR;

/// Whether a block starting at `start_hour` (0..=23) falls in night hours
/// for the configured boundary.
///
/// Boundary >= 24 puts night at `[boundary - 24, 5)` the following morning;
/// boundary < 24 puts night at `[boundary, 24)` same-day only.
pub fn is_night_time(start_hour: u32, night_boundary_hour: u32) -> bool {
    if night_boundary_hour >= 24 {
        let morning_start = night_boundary_hour - 24;
        start_hour >= morning_start && start_hour < NIGHT_MORNING_END_HOUR
    } else {
        start_hour >= night_boundary_hour
    }
}
