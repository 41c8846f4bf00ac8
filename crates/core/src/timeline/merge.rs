//! Session merging: raw relative sessions into human-meaningful blocks
//!
//! Two policies share this module. The continuous policy keeps exact
//! endpoints and merges in two passes (same-label pre-merge, then a
//! cross-label pass with summary-view rules). The grid-snap policy merges
//! label-agnostically, snaps endpoints to a minute grid, and re-merges
//! whatever the snapping pushed together.
//!
//! Precondition: callers sort input ascending by `start_minutes`. A
//! defensive re-sort is performed anyway since unsorted input would corrupt
//! every gap computation downstream.

use daygrid_domain::constants::{BRIEF_INTERRUPTION_SECS, MIN_CONTINUOUS_BLOCK_MINUTES};
use daygrid_domain::{LabelDistribution, MergeMode, MergedBlock, RelativeSession};
use tracing::debug;

/// Merge sorted sessions into visual blocks under the given policy
pub fn merge_sessions(
    sessions: &[RelativeSession],
    mode: &MergeMode,
    summary_view: bool,
) -> Vec<MergedBlock> {
    if sessions.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<RelativeSession> = sessions.to_vec();
    sorted.sort_by_key(|s| s.start_minutes);

    let blocks = match *mode {
        MergeMode::Continuous { gap_threshold_secs, label_exception_secs } => {
            let pre = premerge_same_label(&sorted, gap_threshold_secs);
            let merged =
                cross_label_pass(pre, gap_threshold_secs, label_exception_secs, summary_view);
            enforce_min_span(merged, MIN_CONTINUOUS_BLOCK_MINUTES)
        }
        MergeMode::GridSnap { gap_threshold_secs, snap_minutes } => {
            let pre = premerge_any_label(&sorted, gap_threshold_secs);
            let snapped = snap_blocks(pre, snap_minutes);
            post_snap_merge(snapped)
        }
    };

    debug!(sessions = sorted.len(), blocks = blocks.len(), "merged sessions into blocks");
    blocks
}

/// Pass 1 of the continuous policy: extend the current block while the next
/// session has the same label and the gap is within the threshold
fn premerge_same_label(sessions: &[RelativeSession], gap_threshold_secs: i64) -> Vec<MergedBlock> {
    let mut blocks: Vec<MergedBlock> = Vec::new();

    for session in sessions {
        if let Some(current) = blocks.last_mut() {
            let gap_secs = (session.start_minutes - current.end_minutes) * 60;
            let same_label = current.dominant_label() == session.label;

            if same_label && gap_secs <= gap_threshold_secs {
                current.end_minutes = current.end_minutes.max(session.end_minutes);
                current.labels.add(&session.label, session.span_seconds);
                continue;
            }
        }

        blocks.push(MergedBlock::new(
            session.start_minutes,
            session.end_minutes,
            LabelDistribution::with(&session.label, session.span_seconds),
        ));
    }

    blocks
}

/// Pass 2 of the continuous policy: merge adjacent blocks across labels.
///
/// Summary view merges freely unless the incoming block is both a different
/// label and substantial (>= the exception threshold). Detail view only
/// folds brief interruptions (< 120s) into the surrounding block.
fn cross_label_pass(
    blocks: Vec<MergedBlock>,
    gap_threshold_secs: i64,
    label_exception_secs: i64,
    summary_view: bool,
) -> Vec<MergedBlock> {
    let mut merged: Vec<MergedBlock> = Vec::new();

    for block in blocks {
        if let Some(current) = merged.last_mut() {
            let gap_secs = (block.start_minutes - current.end_minutes) * 60;
            let own_secs = block.duration_minutes() * 60;
            let different_label = current.dominant_label() != block.dominant_label();

            let rule = if summary_view {
                !(different_label && own_secs >= label_exception_secs)
            } else {
                own_secs < BRIEF_INTERRUPTION_SECS
            };

            if gap_secs <= gap_threshold_secs && rule {
                current.end_minutes = current.end_minutes.max(block.end_minutes);
                current.labels.merge(&block.labels);
                continue;
            }
        }

        merged.push(block);
    }

    merged
}

/// Grid-snap pre-merge: label-agnostic, strict gap comparison
fn premerge_any_label(sessions: &[RelativeSession], gap_threshold_secs: i64) -> Vec<MergedBlock> {
    let mut blocks: Vec<MergedBlock> = Vec::new();

    for session in sessions {
        if let Some(current) = blocks.last_mut() {
            let gap_secs = (session.start_minutes - current.end_minutes) * 60;
            if gap_secs < gap_threshold_secs {
                current.end_minutes = current.end_minutes.max(session.end_minutes);
                current.labels.add(&session.label, session.span_seconds);
                continue;
            }
        }

        blocks.push(MergedBlock::new(
            session.start_minutes,
            session.end_minutes,
            LabelDistribution::with(&session.label, session.span_seconds),
        ));
    }

    blocks
}

/// Snap both endpoints to the nearest grid line, discarding blocks that
/// collapse to zero width
fn snap_blocks(blocks: Vec<MergedBlock>, snap_minutes: i64) -> Vec<MergedBlock> {
    blocks
        .into_iter()
        .filter_map(|mut block| {
            block.start_minutes = snap_nearest(block.start_minutes, snap_minutes);
            block.end_minutes = snap_nearest(block.end_minutes, snap_minutes);
            (block.end_minutes > block.start_minutes).then_some(block)
        })
        .collect()
}

/// Nearest multiple of `snap`, midpoints rounding up
fn snap_nearest(minutes: i64, snap: i64) -> i64 {
    if snap <= 0 {
        return minutes;
    }
    (minutes + snap / 2).div_euclid(snap) * snap
}

/// Merge snapped blocks that now touch or overlap, regardless of label.
/// Dominance is recomputed from the full distribution, which
/// `LabelDistribution::dominant` already does by linear scan.
fn post_snap_merge(blocks: Vec<MergedBlock>) -> Vec<MergedBlock> {
    let mut merged: Vec<MergedBlock> = Vec::new();

    for block in blocks {
        if let Some(current) = merged.last_mut() {
            if current.end_minutes >= block.start_minutes {
                current.end_minutes = current.end_minutes.max(block.end_minutes);
                current.labels.merge(&block.labels);
                continue;
            }
        }
        merged.push(block);
    }

    merged
}

/// Widen blocks below the policy's minimum visual size so they stay visible
fn enforce_min_span(blocks: Vec<MergedBlock>, min_minutes: i64) -> Vec<MergedBlock> {
    blocks
        .into_iter()
        .map(|mut block| {
            if block.duration_minutes() < min_minutes {
                block.end_minutes = block.start_minutes + min_minutes;
            }
            block
        })
        .collect()
}
