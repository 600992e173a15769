//! Reply text for the two appointment commands
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.1.0: Replies in Spanish, matching the command names
//! - 1.0.0: Initial `set_appointment` / `get_countdown` replies

use chrono::{Local, NaiveDateTime};

use super::appointment::{Appointments, STORED_FORMAT};
use super::countdown::{CountdownCalculator, CountdownResult};
use super::error::AppointmentError;

pub const USAGE_HINT: &str = "Usa el formato: `/set YYYY-MM-DD HH:MM`";
pub const FORMAT_HINT: &str = "❌ Formato incorrecto. Usa: `/set 2025-06-15 20:00`";
pub const NO_APPOINTMENT: &str = "No hay ninguna cita guardada. Usa `/set` para añadir una.";
pub const ELAPSED: &str = "💖 ¡La cita ya pasó o es ahora mismo! Divertíos";

/// Appointment store plus countdown, exposed as string-in/string-out operations.
///
/// Format problems become corrective replies. Storage failures come back as
/// `Err` so the dispatcher can report them as an operational error.
#[derive(Clone)]
pub struct AppointmentService {
    appointments: Appointments,
    calculator: CountdownCalculator,
}

impl AppointmentService {
    pub fn new(appointments: Appointments, calculator: CountdownCalculator) -> Self {
        Self {
            appointments,
            calculator,
        }
    }

    pub async fn set_appointment(&self, text: &str) -> Result<String, AppointmentError> {
        if text.trim().is_empty() {
            return Ok(USAGE_HINT.to_string());
        }

        match self.appointments.set(text).await {
            Ok(scheduled_at) => Ok(format!(
                "📅 Cita guardada para: **{}**",
                scheduled_at.format(STORED_FORMAT)
            )),
            Err(e) if e.is_format() => Ok(FORMAT_HINT.to_string()),
            Err(e) => Err(e),
        }
    }

    pub async fn get_countdown(&self) -> Result<String, AppointmentError> {
        self.get_countdown_at(Local::now().naive_local()).await
    }

    /// Countdown against an explicit clock reading
    pub async fn get_countdown_at(&self, now: NaiveDateTime) -> Result<String, AppointmentError> {
        let appointment = self.appointments.get().await?;
        Ok(render_countdown(&self.calculator.remaining(now, appointment)))
    }
}

pub fn render_countdown(result: &CountdownResult) -> String {
    match *result {
        CountdownResult::NoAppointment => NO_APPOINTMENT.to_string(),
        CountdownResult::Elapsed => ELAPSED.to_string(),
        CountdownResult::Remaining {
            days,
            hours,
            minutes,
            seconds,
        } => format!(
            "⏳ Faltan {} {}, {} {}, {} {} y {} {} para la cita.",
            days,
            unit(days, "día"),
            hours,
            unit(hours, "hora"),
            minutes,
            unit(minutes, "minuto"),
            seconds,
            unit(seconds, "segundo"),
        ),
    }
}

fn unit(count: i64, singular: &str) -> String {
    if count == 1 {
        singular.to_string()
    } else {
        format!("{singular}s")
    }
}
