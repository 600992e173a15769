//! # Analytics Feature
//!
//! Best-effort command usage notifications.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.4.0
//! - **Toggleable**: true

pub mod usage_tracker;

pub use usage_tracker::{CommandEvent, CommandOutcome, UsageTracker};
