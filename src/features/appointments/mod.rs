//! # Appointments Feature
//!
//! Single stored appointment with a countdown to it.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Reply layer for /set and /falta, configurable clock offset
//! - 1.0.0: Initial JSON-backed appointment store and countdown

pub mod appointment;
pub mod countdown;
pub mod error;
pub mod replies;
pub mod store;

pub use appointment::{parse_appointment, Appointments, INPUT_FORMAT, STORED_FORMAT};
pub use countdown::{CountdownCalculator, CountdownResult, DEFAULT_CLOCK_OFFSET_HOURS};
pub use error::AppointmentError;
pub use replies::{render_countdown, AppointmentService};
pub use store::{AppointmentStore, InMemoryStore, JsonFileStore};
