//! Appointment persistence backends
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Atomic temp-file + rename writes, lock owned by the JSON backend
//! - 1.0.0: Initial JSON file and in-memory backends

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use super::appointment::STORED_FORMAT;
use super::error::AppointmentError;

/// Storage for the single appointment slot
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    /// Read the slot. `Ok(None)` means no appointment was ever saved.
    async fn load(&self) -> Result<Option<NaiveDateTime>, AppointmentError>;

    /// Overwrite the slot
    async fn save(&self, scheduled_at: NaiveDateTime) -> Result<(), AppointmentError>;
}

/// On-disk layout: `{"scheduled_at": "YYYY-MM-DD HH:MM:SS"}`
#[derive(Debug, Serialize, Deserialize)]
struct AppointmentRecord {
    #[serde(with = "stored_timestamp")]
    scheduled_at: NaiveDateTime,
}

mod stored_timestamp {
    use super::STORED_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(STORED_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, STORED_FORMAT).map_err(serde::de::Error::custom)
    }
}

/// JSON file backend.
///
/// Loads and saves are serialized through one async mutex, and saves go
/// through a sibling `.tmp` file renamed over the target, so a load never
/// sees a half-written record.
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut tmp = OsString::from(self.path.as_os_str());
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

#[async_trait]
impl AppointmentStore for JsonFileStore {
    async fn load(&self) -> Result<Option<NaiveDateTime>, AppointmentError> {
        let _guard = self.lock.lock().await;

        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        let record: AppointmentRecord = serde_json::from_str(&content)
            .map_err(|e| AppointmentError::Corrupted(format!("{}: {e}", self.path.display())))?;

        Ok(Some(record.scheduled_at))
    }

    async fn save(&self, scheduled_at: NaiveDateTime) -> Result<(), AppointmentError> {
        let _guard = self.lock.lock().await;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let payload = serde_json::to_string_pretty(&AppointmentRecord { scheduled_at })
            .map_err(std::io::Error::from)?;

        let tmp = self.temp_path();
        fs::write(&tmp, payload).await?;
        fs::rename(&tmp, &self.path).await?;

        Ok(())
    }
}

/// Process-local backend, lost on restart
#[derive(Default)]
pub struct InMemoryStore {
    slot: Mutex<Option<NaiveDateTime>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AppointmentStore for InMemoryStore {
    async fn load(&self) -> Result<Option<NaiveDateTime>, AppointmentError> {
        Ok(*self.slot.lock().await)
    }

    async fn save(&self, scheduled_at: NaiveDateTime) -> Result<(), AppointmentError> {
        *self.slot.lock().await = Some(scheduled_at);
        Ok(())
    }
}
