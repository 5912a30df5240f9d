use crate::blob::{read_collection, write_collection};
use crate::demo_storage::StorageContext;
use crate::{ATTENDANCE_KEY, Result as StoreErrorResult, UserDirectory};

use gf_core::{AttendanceEntry, ChangeKind, Collection, StorageChange, ids_match};

use log::info;

/// Append-only attendance log, stored newest first.
#[derive(Clone)]
pub struct AttendanceLog {
    ctx: StorageContext,
    users: UserDirectory,
}

impl AttendanceLog {
    pub(crate) fn new(ctx: StorageContext, users: UserDirectory) -> Self {
        Self { ctx, users }
    }

    /// Stamps a new entry with the current local date/time and puts it at the
    /// head of the log.
    ///
    /// The name is copied from the matching user, or is `id` itself when the
    /// user is unknown. `id` is stored verbatim.
    pub fn record(&self, kind: &str, id: &str, status: &str) -> StoreErrorResult<AttendanceEntry> {
        let name = self
            .users
            .find_by_id(id)
            .map(|u| u.display_name().to_string())
            .unwrap_or_else(|| id.to_string());

        let entry = AttendanceEntry::new(kind, id, name, self.ctx.clock.now(), status);

        let mut logs = self.list_all();
        logs.insert(0, entry.clone());

        write_collection(self.ctx.store.as_ref(), ATTENDANCE_KEY, &logs)?;
        self.ctx
            .notifier
            .notify(StorageChange::new(Collection::Attendance, ChangeKind::Inserted));

        info!(
            "Recorded {kind} attendance for {id}: {status} at {} {}",
            entry.date, entry.time
        );
        Ok(entry)
    }

    /// Entries of stream `kind` (exact) for `id` (ignoring case), newest first.
    pub fn query(&self, kind: &str, id: &str) -> Vec<AttendanceEntry> {
        self.list_all()
            .into_iter()
            .filter(|e| e.kind == kind && ids_match(&e.id, id))
            .collect()
    }

    /// Full log, newest first.
    pub fn list_all(&self) -> Vec<AttendanceEntry> {
        read_collection(
            self.ctx.store.as_ref(),
            ATTENDANCE_KEY,
            &self.ctx.diagnostics,
        )
    }

    /// Deletes the attendance collection only.
    pub fn clear_all(&self) -> StoreErrorResult<()> {
        self.ctx.store.remove(ATTENDANCE_KEY)?;
        self.ctx
            .notifier
            .notify(StorageChange::new(Collection::Attendance, ChangeKind::Cleared));

        info!("Cleared attendance");
        Ok(())
    }
}
