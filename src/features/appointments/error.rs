//! Appointment error taxonomy

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppointmentError {
    /// User input did not match `YYYY-MM-DD HH:MM`. Nothing was stored.
    #[error("Invalid appointment `{input}`: expected YYYY-MM-DD HH:MM")]
    Format { input: String },
    #[error("Appointment storage failed: {0}")]
    Storage(#[from] std::io::Error),
    /// The persisted slot exists but cannot be read back as a timestamp.
    #[error("Stored appointment is corrupted: {0}")]
    Corrupted(String),
}

impl AppointmentError {
    /// True when the failure is the user's input rather than the store
    pub fn is_format(&self) -> bool {
        matches!(self, AppointmentError::Format { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_is_distinct_from_storage() {
        let format = AppointmentError::Format {
            input: "15/06/2025 20:00".to_string(),
        };
        let storage = AppointmentError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only",
        ));

        assert!(format.is_format());
        assert!(!storage.is_format());
        assert!(!AppointmentError::Corrupted("bad".into()).is_format());
        assert!(format.to_string().contains("YYYY-MM-DD HH:MM"));
    }
}
