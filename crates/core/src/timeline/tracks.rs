//! Greedy track packing for merged blocks
//!
//! Processing blocks in start order and placing each on the first track
//! whose last end is at or before the block's start is the classical greedy
//! interval-coloring scheme; it opens exactly as many tracks as the maximum
//! number of simultaneously overlapping blocks.

use daygrid_domain::{MergedBlock, Side, TrackLayout, TrackMode, TrackedBlock};
use tracing::debug;

/// Assign blocks to horizontal tracks under the given mode.
///
/// Side resolution is a side-channel independent of track index: once any
/// block carries a forced `Right`, every untagged block resolves to `Left`
/// and the layout mapper renders two fixed 50% columns instead of
/// fractional tracks.
pub fn assign_tracks(blocks: Vec<MergedBlock>, mode: TrackMode) -> TrackLayout {
    let mut sorted = blocks;
    sorted.sort_by_key(|b| b.start_minutes);

    let split_active = sorted.iter().any(|b| b.forced_side == Some(Side::Right));

    let (tracked, track_count) = match mode {
        TrackMode::Summary => {
            // Flatten overlaps: every block full width on track 0
            let tracked = sorted
                .into_iter()
                .map(|block| TrackedBlock { block, track_index: 0, side: None })
                .collect();
            (tracked, 1)
        }
        TrackMode::Detail | TrackMode::Split => {
            let mut track_ends: Vec<i64> = Vec::new();
            let tracked = sorted
                .into_iter()
                .map(|block| {
                    let track_index = match track_ends
                        .iter()
                        .position(|&end| end <= block.start_minutes)
                    {
                        Some(index) => {
                            track_ends[index] = block.end_minutes;
                            index
                        }
                        None => {
                            track_ends.push(block.end_minutes);
                            track_ends.len() - 1
                        }
                    };
                    let side = if split_active {
                        Some(block.forced_side.unwrap_or(Side::Left))
                    } else {
                        None
                    };
                    TrackedBlock { block, track_index, side }
                })
                .collect();
            (tracked, track_ends.len().max(1))
        }
    };

    debug!(track_count, split_active, "assigned blocks to tracks");
    TrackLayout { blocks: tracked, track_count }
}
