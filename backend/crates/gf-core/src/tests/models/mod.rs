mod attendance_entry;
mod inline_kind;
mod storage_change;
mod toast_level;
mod user;
