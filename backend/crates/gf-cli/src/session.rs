use crate::{CliError, Result as CliErrorResult};

use gf_capture::encode_to_text;
use gf_config::Config;
use gf_core::{ScheduleEntry, Snapshot, ToastLevel, User, sanitize_id};
use gf_notify::NotificationService;
use gf_store::{DemoStorage, FileStore};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::{Value, json};
use uuid::Uuid;

/// Source tag written into exported snapshots
pub const EXPORTED_BY: &str = "gf-cli";

/// One `gf` invocation: the origin-scoped store plus the toasts raised while
/// running a command.
///
/// Every command returns its result as JSON and leaves an outcome toast
/// behind for the caller to render.
pub struct Session {
    storage: DemoStorage,
    notifications: NotificationService,
}

impl Session {
    pub fn new(storage: DemoStorage, notifications: NotificationService) -> Self {
        Self {
            storage,
            notifications,
        }
    }

    /// Open the file-backed store configured by `config`.
    pub fn open(config: &Config) -> CliErrorResult<Self> {
        let root = config.storage_path()?;
        let store = FileStore::open(root)?;
        let storage = DemoStorage::new(Arc::new(store))
            .with_channel_capacity(config.storage.change_channel_capacity);

        Ok(Self::new(
            storage,
            NotificationService::new(config.notification.clone()),
        ))
    }

    pub fn storage(&self) -> &DemoStorage {
        &self.storage
    }

    pub fn notifications(&self) -> &NotificationService {
        &self.notifications
    }

    // =========================================================================
    // Users
    // =========================================================================

    pub fn list_users(&self, role: Option<&str>) -> CliErrorResult<Value> {
        let users = self.storage.users();
        let list = match role {
            Some(role) => users.list_by_role(role),
            None => users.list_all(),
        };

        Ok(json!({ "users": list }))
    }

    pub fn get_user(&self, id: &str) -> CliErrorResult<Value> {
        let user = self
            .storage
            .users()
            .find_by_id(id)
            .ok_or_else(|| CliError::not_found("User", id))?;

        Ok(json!({ "user": user }))
    }

    /// Register a user, embedding each image file as a data URL.
    pub fn add_user(
        &self,
        id: &str,
        name: &str,
        role: &str,
        images: &[PathBuf],
        unique: bool,
    ) -> CliErrorResult<Value> {
        let id = sanitize_id(id);
        if id.is_empty() {
            return Err(CliError::invalid_argument(
                "id must contain at least one letter or digit",
            ));
        }

        let name = name.trim();
        if name.is_empty() {
            return Err(CliError::invalid_argument("name cannot be empty"));
        }

        let encoded = images
            .iter()
            .map(|path| read_image(path))
            .collect::<CliErrorResult<Vec<_>>>()?;

        let user = User::new(id, name, role).with_images(encoded);
        let users = self.storage.users();
        if unique {
            users.register_unique(user.clone())?;
        } else {
            users.register(user.clone())?;
        }

        self.notifications.toast_default(
            format!("Saved {} {}", user.role, user.display_name()),
            ToastLevel::Success,
        );
        Ok(json!({ "user": user }))
    }

    pub fn remove_user(&self, id: &str) -> CliErrorResult<Value> {
        let removed = self.storage.users().remove(id)?;

        let level = if removed == 0 {
            ToastLevel::Warn
        } else {
            ToastLevel::Success
        };
        self.notifications
            .toast_default(format!("Removed {removed} user(s) with id {id}"), level);

        Ok(json!({ "removed": removed }))
    }

    // =========================================================================
    // Attendance
    // =========================================================================

    pub fn record_attendance(&self, kind: &str, id: &str, status: &str) -> CliErrorResult<Value> {
        let entry = self.storage.attendance().record(kind, id, status)?;

        self.notifications.toast_default(
            format!("{} marked {} at {}", entry.name, entry.status, entry.time),
            ToastLevel::Success,
        );
        Ok(json!({ "entry": entry }))
    }

    pub fn list_attendance(&self) -> CliErrorResult<Value> {
        Ok(json!({ "entries": self.storage.attendance().list_all() }))
    }

    pub fn query_attendance(&self, kind: &str, id: &str) -> CliErrorResult<Value> {
        Ok(json!({ "entries": self.storage.attendance().query(kind, id) }))
    }

    pub fn clear_attendance(&self) -> CliErrorResult<Value> {
        self.storage.attendance().clear_all()?;

        self.notifications
            .toast_default("Attendance log cleared", ToastLevel::Info);
        Ok(json!({ "cleared": ["attendance"] }))
    }

    // =========================================================================
    // Schedules
    // =========================================================================

    pub fn list_schedules(&self, teacher_id: Option<&str>) -> CliErrorResult<Value> {
        let book = self.storage.schedules();
        let list = match teacher_id {
            Some(teacher_id) => book.list_by_teacher(teacher_id),
            None => book.list_all(),
        };

        Ok(json!({ "schedules": list }))
    }

    pub fn add_schedule(&self, entry: ScheduleEntry) -> CliErrorResult<Value> {
        self.storage.schedules().add(entry.clone())?;

        self.notifications.toast_default(
            format!("Scheduled {} on {}", entry.subject, entry.day),
            ToastLevel::Success,
        );
        Ok(json!({ "schedule": entry }))
    }

    pub fn remove_schedule(&self, id: &str) -> CliErrorResult<Value> {
        let uuid = Uuid::parse_str(id)
            .map_err(|e| CliError::invalid_argument(format!("schedule id '{id}': {e}")))?;
        let removed = self.storage.schedules().remove(uuid)?;

        Ok(json!({ "removed": removed }))
    }

    // =========================================================================
    // Whole store
    // =========================================================================

    /// Clears users and attendance. Schedules are kept.
    pub fn clear_all(&self) -> CliErrorResult<Value> {
        self.storage.users().clear_all()?;

        self.notifications
            .toast_default("Users and attendance cleared", ToastLevel::Warn);
        Ok(json!({ "cleared": ["users", "attendance"] }))
    }

    pub fn export(&self) -> CliErrorResult<Value> {
        let snapshot = self.storage.export_snapshot(EXPORTED_BY);
        Ok(serde_json::to_value(snapshot)?)
    }

    pub fn import(&self, path: &Path) -> CliErrorResult<Value> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| CliError::io(path.to_path_buf(), e))?;
        let snapshot: Snapshot = serde_json::from_str(&contents)?;

        let counts = self.storage.import_snapshot(&snapshot)?;

        self.notifications.toast_default(
            format!(
                "Imported {} users, {} attendance entries, {} schedules",
                counts.users, counts.attendance, counts.schedules
            ),
            ToastLevel::Success,
        );
        Ok(json!({ "imported": counts }))
    }
}

fn read_image(path: &Path) -> CliErrorResult<String> {
    let bytes = std::fs::read(path).map_err(|e| CliError::io(path.to_path_buf(), e))?;
    Ok(encode_to_text(&bytes, mime_for(path)))
}

/// Mime type guessed from the file extension.
pub(crate) fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}
