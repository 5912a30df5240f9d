use crate::blob::write_collection;
use crate::{
    ATTENDANCE_KEY, AttendanceLog, ChangeNotifier, Clock, Diagnostics, DiagnosticsSnapshot,
    KeyValueStore, LocalClock, MemoryStore, Result as StoreErrorResult, SCHEDULES_KEY,
    ScheduleBook, StoreError, USERS_KEY, UserDirectory,
};

use gf_core::{
    CURRENT_SCHEMA_VERSION, ChangeKind, Collection, ImportCounts, Snapshot, StorageChange,
};

use std::sync::Arc;

use log::info;
use tokio::sync::broadcast;

/// Shared plumbing handed to every collection view.
#[derive(Clone)]
pub(crate) struct StorageContext {
    pub(crate) store: Arc<dyn KeyValueStore>,
    pub(crate) notifier: ChangeNotifier,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) diagnostics: Arc<Diagnostics>,
}

/// One storage session: a store, its change channel and its clock.
///
/// Views returned by [`users`](Self::users), [`attendance`](Self::attendance)
/// and [`schedules`](Self::schedules) all share the same session. Cloning a
/// `DemoStorage` shares it too.
#[derive(Clone)]
pub struct DemoStorage {
    ctx: StorageContext,
}

impl DemoStorage {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            ctx: StorageContext {
                store,
                notifier: ChangeNotifier::default(),
                clock: Arc::new(LocalClock),
                diagnostics: Arc::new(Diagnostics::default()),
            },
        }
    }

    /// Session over a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.ctx.clock = clock;
        self
    }

    /// Replaces the change channel. Existing subscribers stay on the old one.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.ctx.notifier = ChangeNotifier::new(capacity);
        self
    }

    pub fn users(&self) -> UserDirectory {
        UserDirectory::new(self.ctx.clone())
    }

    pub fn attendance(&self) -> AttendanceLog {
        AttendanceLog::new(self.ctx.clone(), self.users())
    }

    pub fn schedules(&self) -> ScheduleBook {
        ScheduleBook::new(self.ctx.clone())
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StorageChange> {
        self.ctx.notifier.subscribe()
    }

    pub fn notifier(&self) -> &ChangeNotifier {
        &self.ctx.notifier
    }

    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.ctx.store
    }

    pub fn diagnostics(&self) -> DiagnosticsSnapshot {
        self.ctx.diagnostics.snapshot()
    }

    pub fn export_snapshot(&self, exported_by: &str) -> Snapshot {
        Snapshot {
            schema_version: CURRENT_SCHEMA_VERSION,
            exported_at: chrono::Utc::now().to_rfc3339(),
            exported_by: exported_by.to_string(),
            users: self.users().list_all(),
            attendance: self.attendance().list_all(),
            schedules: self.schedules().list_all(),
        }
    }

    /// Replaces all three collections with the snapshot contents.
    pub fn import_snapshot(&self, snapshot: &Snapshot) -> StoreErrorResult<ImportCounts> {
        if snapshot.schema_version != CURRENT_SCHEMA_VERSION {
            return Err(StoreError::unsupported_schema(
                snapshot.schema_version,
                CURRENT_SCHEMA_VERSION,
            ));
        }

        let store = self.ctx.store.as_ref();
        write_collection(store, USERS_KEY, &snapshot.users)?;
        write_collection(store, ATTENDANCE_KEY, &snapshot.attendance)?;
        write_collection(store, SCHEDULES_KEY, &snapshot.schedules)?;

        for collection in [Collection::Users, Collection::Attendance, Collection::Schedules] {
            self.ctx
                .notifier
                .notify(StorageChange::new(collection, ChangeKind::Cleared));
            self.ctx
                .notifier
                .notify(StorageChange::new(collection, ChangeKind::Inserted));
        }

        let counts = ImportCounts {
            users: snapshot.users.len(),
            attendance: snapshot.attendance.len(),
            schedules: snapshot.schedules.len(),
        };

        info!(
            "Imported snapshot from {}: {} users, {} attendance, {} schedules",
            snapshot.exported_by, counts.users, counts.attendance, counts.schedules
        );
        Ok(counts)
    }
}
