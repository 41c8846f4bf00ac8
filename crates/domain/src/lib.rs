//! # DayGrid Domain
//!
//! Business domain types and models for the DayGrid timeline engine.
//!
//! This crate contains:
//! - Session records and derived timeline types (blocks, layouts)
//! - Domain error types and Result definitions
//! - Layout configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other DayGrid crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
