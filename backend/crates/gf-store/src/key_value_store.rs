use crate::Result as StoreErrorResult;

/// Persisted blob holding every registered user
pub const USERS_KEY: &str = "gf_demo_users_v1";
/// Persisted blob holding the attendance log, newest first
pub const ATTENDANCE_KEY: &str = "gf_demo_attendance_v1";
/// Persisted blob holding timetable slots
pub const SCHEDULES_KEY: &str = "gf_demo_schedules_v1";

/// Origin-scoped, string-keyed blob store.
///
/// Each call is atomic on its own; there are no transactions spanning keys.
pub trait KeyValueStore: Send + Sync {
    /// Returns `Ok(None)` when nothing is stored under `key`.
    fn get(&self, key: &str) -> StoreErrorResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StoreErrorResult<()>;

    /// Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> StoreErrorResult<()>;
}
