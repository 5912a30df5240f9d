use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";
pub const DEFAULT_STATUS: &str = "Present";

/// One check-in event. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// Attendance stream, e.g. `student` or `teacher`
    #[serde(rename = "type")]
    pub kind: String,
    /// Subject id exactly as the caller passed it
    pub id: String,
    /// Display name snapshot taken at write time
    #[serde(default)]
    pub name: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub status: String,
}

impl AttendanceEntry {
    pub fn new(
        kind: impl Into<String>,
        id: impl Into<String>,
        name: impl Into<String>,
        at: NaiveDateTime,
        status: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
            name: name.into(),
            date: at.format(DATE_FORMAT).to_string(),
            time: at.format(TIME_FORMAT).to_string(),
            status: status.into(),
        }
    }
}
