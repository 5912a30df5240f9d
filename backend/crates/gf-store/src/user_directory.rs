use crate::blob::{read_collection, write_collection};
use crate::demo_storage::StorageContext;
use crate::{ATTENDANCE_KEY, Result as StoreErrorResult, StoreError, USERS_KEY};

use gf_core::{ChangeKind, Collection, StorageChange, User};

use log::info;

/// Registered users, persisted as one blob.
///
/// Lookups compare ids case-insensitively; `remove` matches ids exactly.
#[derive(Clone)]
pub struct UserDirectory {
    ctx: StorageContext,
}

impl UserDirectory {
    pub(crate) fn new(ctx: StorageContext) -> Self {
        Self { ctx }
    }

    /// All users in registration order. Empty when the blob is missing or corrupt.
    pub fn list_all(&self) -> Vec<User> {
        read_collection(self.ctx.store.as_ref(), USERS_KEY, &self.ctx.diagnostics)
    }

    pub fn count(&self) -> usize {
        self.list_all().len()
    }

    /// First user whose id matches ignoring case. Duplicates shadow later entries.
    pub fn find_by_id(&self, id: &str) -> Option<User> {
        if id.is_empty() {
            return None;
        }

        self.list_all().into_iter().find(|u| u.has_id(id))
    }

    pub fn list_by_role(&self, role: &str) -> Vec<User> {
        self.list_all()
            .into_iter()
            .filter(|u| u.role == role)
            .collect()
    }

    /// Appends `user` without any uniqueness check.
    pub fn register(&self, user: User) -> StoreErrorResult<()> {
        let mut users = self.list_all();
        let id = user.id.clone();
        users.push(user);

        write_collection(self.ctx.store.as_ref(), USERS_KEY, &users)?;
        self.ctx
            .notifier
            .notify(StorageChange::new(Collection::Users, ChangeKind::Inserted));

        info!("Registered user {id} ({} total)", users.len());
        Ok(())
    }

    /// Like [`register`](Self::register) but refuses an id that is already taken
    /// (compared ignoring case).
    pub fn register_unique(&self, user: User) -> StoreErrorResult<()> {
        if self.find_by_id(&user.id).is_some() {
            return Err(StoreError::duplicate_user(user.id));
        }

        self.register(user)
    }

    /// Drops every user whose id equals `id` exactly (case-sensitive).
    ///
    /// The collection is rewritten and a change is signalled even when
    /// nothing matched. Returns the number of users removed.
    pub fn remove(&self, id: &str) -> StoreErrorResult<usize> {
        let users = self.list_all();
        let before = users.len();
        let kept: Vec<User> = users.into_iter().filter(|u| u.id != id).collect();
        let removed = before - kept.len();

        write_collection(self.ctx.store.as_ref(), USERS_KEY, &kept)?;
        self.ctx
            .notifier
            .notify(StorageChange::new(Collection::Users, ChangeKind::Removed));

        info!("Removed {removed} user(s) with id {id}");
        Ok(removed)
    }

    /// Deletes both the user and the attendance collections.
    pub fn clear_all(&self) -> StoreErrorResult<()> {
        self.ctx.store.remove(USERS_KEY)?;
        self.ctx.store.remove(ATTENDANCE_KEY)?;

        self.ctx
            .notifier
            .notify(StorageChange::new(Collection::Users, ChangeKind::Cleared));
        self.ctx
            .notifier
            .notify(StorageChange::new(Collection::Attendance, ChangeKind::Cleared));

        info!("Cleared users and attendance");
        Ok(())
    }
}
