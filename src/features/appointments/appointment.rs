//! Appointment parsing and the single-slot facade over a store
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.2.0: Reject year 0000
//! - 1.1.0: Collapse whitespace runs before matching (chat clients split arguments)
//! - 1.0.0: Initial strict `YYYY-MM-DD HH:MM` parser

use chrono::{Datelike, NaiveDateTime, Timelike};
use regex::Regex;
use std::sync::{Arc, OnceLock};

use super::error::AppointmentError;
use super::store::AppointmentStore;

/// Format accepted from users
pub const INPUT_FORMAT: &str = "%Y-%m-%d %H:%M";
/// Format used when persisting and echoing a stored appointment
pub const STORED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn input_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    // chrono alone accepts single-digit fields and signed years
    SHAPE.get_or_init(|| {
        Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}$")
            .expect("appointment pattern is valid")
    })
}

/// Parse user input into a minute-precision timestamp (seconds forced to zero)
pub fn parse_appointment(raw: &str) -> Result<NaiveDateTime, AppointmentError> {
    let normalized = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let format_error = || AppointmentError::Format {
        input: normalized.clone(),
    };

    if !input_shape().is_match(&normalized) {
        return Err(format_error());
    }

    let parsed =
        NaiveDateTime::parse_from_str(&normalized, INPUT_FORMAT).map_err(|_| format_error())?;
    // Calendar years start at 0001
    if parsed.year() < 1 {
        return Err(format_error());
    }

    parsed
        .with_second(0)
        .and_then(|dt| dt.with_nanosecond(0))
        .ok_or_else(format_error)
}

/// Single-slot appointment storage: `set` overwrites, `get` reads back
#[derive(Clone)]
pub struct Appointments {
    store: Arc<dyn AppointmentStore>,
}

impl Appointments {
    pub fn new(store: Arc<dyn AppointmentStore>) -> Self {
        Self { store }
    }

    /// Parse `raw` and persist it, replacing any previous appointment.
    ///
    /// Malformed input returns [`AppointmentError::Format`] before the store
    /// is touched.
    pub async fn set(&self, raw: &str) -> Result<NaiveDateTime, AppointmentError> {
        let scheduled_at = parse_appointment(raw)?;
        self.store.save(scheduled_at).await?;
        Ok(scheduled_at)
    }

    pub async fn get(&self) -> Result<Option<NaiveDateTime>, AppointmentError> {
        self.store.load().await
    }
}
