//! # Features Layer
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

pub mod analytics;
pub mod appointments;
pub mod catalog;

pub use analytics::{CommandEvent, CommandOutcome, UsageTracker};
pub use appointments::{AppointmentError, AppointmentService, Appointments, CountdownCalculator};
pub use catalog::{CatalogEntry, CatalogError, MessageCatalog};

/// Bot version from Cargo.toml
pub fn get_bot_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
