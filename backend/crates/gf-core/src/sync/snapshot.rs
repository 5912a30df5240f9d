use crate::{AttendanceEntry, ScheduleEntry, User};

use serde::{Deserialize, Serialize};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Complete export/import payload for every demo collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Schema version for compatibility checks (current: 1)
    pub schema_version: u32,

    /// RFC3339 timestamp when data was exported
    pub exported_at: String,

    /// Source identifier (e.g., "gf-cli")
    pub exported_by: String,

    pub users: Vec<User>,

    /// Newest first, same order as the persisted log
    pub attendance: Vec<AttendanceEntry>,

    #[serde(default)]
    pub schedules: Vec<ScheduleEntry>,
}
