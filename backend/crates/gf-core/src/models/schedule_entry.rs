use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A timetable slot: who teaches what, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: Uuid,
    pub class_id: String,
    pub subject: String,
    pub teacher_id: String,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}

impl ScheduleEntry {
    pub fn new(
        class_id: impl Into<String>,
        subject: impl Into<String>,
        teacher_id: impl Into<String>,
        day: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            class_id: class_id.into(),
            subject: subject.into(),
            teacher_id: teacher_id.into(),
            day: day.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }
}
