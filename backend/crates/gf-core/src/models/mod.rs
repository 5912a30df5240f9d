pub mod attendance_entry;
pub mod inline_kind;
pub mod schedule_entry;
pub mod storage_change;
pub mod toast_level;
pub mod user;
