pub mod error;
pub mod models;
pub mod sync;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::attendance_entry::{AttendanceEntry, DATE_FORMAT, DEFAULT_STATUS, TIME_FORMAT};
pub use models::inline_kind::InlineKind;
pub use models::schedule_entry::ScheduleEntry;
pub use models::storage_change::{ChangeKind, Collection, StorageChange};
pub use models::toast_level::{ToastLevel, ToastPalette};
pub use models::user::User;
pub use sync::import_counts::ImportCounts;
pub use sync::snapshot::{CURRENT_SCHEMA_VERSION, Snapshot};
pub use validation::{ids_match, sanitize_id, sanitize_name};
