//! Session-to-timeline layout pipeline

pub mod bucketer;
pub mod engine;
pub mod layout;
pub mod merge;
pub mod night;
pub mod tracks;

pub use engine::TimelineEngine;
