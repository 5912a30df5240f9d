pub mod attendance_log;
pub mod blob;
pub mod change_notifier;
pub mod clock;
pub mod demo_storage;
pub mod diagnostics;
pub mod error;
pub mod file_store;
pub mod key_value_store;
pub mod memory_store;
pub mod schedule_book;
pub mod user_directory;

#[cfg(test)]
mod tests;

pub use attendance_log::AttendanceLog;
pub use change_notifier::{ChangeNotifier, DEFAULT_CHANNEL_CAPACITY};
pub use clock::{Clock, FixedClock, LocalClock};
pub use demo_storage::DemoStorage;
pub use diagnostics::{Diagnostics, DiagnosticsSnapshot};
pub use error::{Result, StoreError};
pub use file_store::FileStore;
pub use key_value_store::{ATTENDANCE_KEY, KeyValueStore, SCHEDULES_KEY, USERS_KEY};
pub use memory_store::MemoryStore;
pub use schedule_book::ScheduleBook;
pub use user_directory::UserDirectory;
