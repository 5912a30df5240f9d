use crate::blob::{read_collection, write_collection};
use crate::demo_storage::StorageContext;
use crate::{Result as StoreErrorResult, SCHEDULES_KEY};

use gf_core::{ChangeKind, Collection, ScheduleEntry, StorageChange, ids_match};

use log::info;
use uuid::Uuid;

/// Timetable slots, persisted as one blob in insertion order.
#[derive(Clone)]
pub struct ScheduleBook {
    ctx: StorageContext,
}

impl ScheduleBook {
    pub(crate) fn new(ctx: StorageContext) -> Self {
        Self { ctx }
    }

    pub fn list_all(&self) -> Vec<ScheduleEntry> {
        read_collection(self.ctx.store.as_ref(), SCHEDULES_KEY, &self.ctx.diagnostics)
    }

    pub fn list_by_teacher(&self, teacher_id: &str) -> Vec<ScheduleEntry> {
        self.list_all()
            .into_iter()
            .filter(|s| ids_match(&s.teacher_id, teacher_id))
            .collect()
    }

    pub fn add(&self, entry: ScheduleEntry) -> StoreErrorResult<()> {
        let mut entries = self.list_all();
        let id = entry.id;
        entries.push(entry);

        write_collection(self.ctx.store.as_ref(), SCHEDULES_KEY, &entries)?;
        self.ctx
            .notifier
            .notify(StorageChange::new(Collection::Schedules, ChangeKind::Inserted));

        info!("Added schedule {id} ({} total)", entries.len());
        Ok(())
    }

    /// Returns the number of slots removed (0 or 1).
    pub fn remove(&self, id: Uuid) -> StoreErrorResult<usize> {
        let entries = self.list_all();
        let before = entries.len();
        let kept: Vec<ScheduleEntry> = entries.into_iter().filter(|s| s.id != id).collect();
        let removed = before - kept.len();

        write_collection(self.ctx.store.as_ref(), SCHEDULES_KEY, &kept)?;
        self.ctx
            .notifier
            .notify(StorageChange::new(Collection::Schedules, ChangeKind::Removed));

        info!("Removed {removed} schedule(s) with id {id}");
        Ok(removed)
    }

    pub fn clear_all(&self) -> StoreErrorResult<()> {
        self.ctx.store.remove(SCHEDULES_KEY)?;
        self.ctx
            .notifier
            .notify(StorageChange::new(Collection::Schedules, ChangeKind::Cleared));

        info!("Cleared schedules");
        Ok(())
    }
}
