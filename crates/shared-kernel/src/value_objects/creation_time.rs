// crates/shared-kernel/src/value_objects/creation_time.rs
use std::{fmt, fs::Metadata};

use chrono::{DateTime, Datelike, Local, Timelike};
use serde::{Deserialize, Serialize};

/// Timestamp shown in the "Fecha Creación" and "Fecha Incorporación" columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct CreationTime(DateTime<Local>);

impl CreationTime {
    pub fn new(timestamp: DateTime<Local>) -> Self {
        Self(timestamp)
    }

    pub fn now() -> Self {
        Self(Local::now())
    }

    /// Birth time when the platform records one, otherwise the modification time.
    pub fn from_metadata(meta: &Metadata) -> Option<Self> {
        meta.created()
            .or_else(|_| meta.modified())
            .ok()
            .map(|t| Self(DateTime::<Local>::from(t)))
    }

    /// `D/MM/YYYY H:MM a. m.` on a 12-hour clock; noon and midnight render as 12.
    pub fn to_label(&self) -> String {
        let (is_pm, hour) = self.0.hour12();
        let meridiem = if is_pm { "p. m." } else { "a. m." };
        format!(
            "{}/{:02}/{} {}:{:02} {}",
            self.0.day(),
            self.0.month(),
            self.0.year(),
            hour,
            self.0.minute(),
            meridiem
        )
    }
}

impl From<DateTime<Local>> for CreationTime {
    fn from(timestamp: DateTime<Local>) -> Self {
        Self::new(timestamp)
    }
}

impl fmt::Display for CreationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_label())
    }
}
