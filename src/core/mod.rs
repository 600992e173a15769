//! # Core Module
//!
//! Configuration and Discord response utilities.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod config;
pub mod response;

pub use config::Config;
pub use response::{chunk_for_message, chunk_text, MESSAGE_LIMIT};
