use crate::{InlineAlert, Toast, ToastId};

use gf_config::NotificationConfig;
use gf_core::{InlineKind, ToastLevel};

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::time::Instant;

/// About thirty years
const FAR_FUTURE: Duration = Duration::from_secs(30 * 365 * 24 * 60 * 60);

/// Transient, auto-dismissing messages for one application session.
///
/// Two independent surfaces: a single toast container created on first use,
/// and inline alerts inside host containers the caller has mounted. Expired
/// items are pruned lazily whenever the service is read or written. There is
/// no queue, dedup or priority; concurrent calls simply stack.
pub struct NotificationService {
    config: NotificationConfig,
    inner: Mutex<NotificationInner>,
}

struct NotificationInner {
    container: Option<ToastContainer>,
    hosts: HashMap<String, Vec<InlineAlert>>,
    next_toast_id: u64,
}

struct ToastContainer {
    id: String,
    toasts: Vec<Toast>,
}

impl NotificationService {
    pub fn new(config: NotificationConfig) -> Self {
        Self {
            config,
            inner: Mutex::new(NotificationInner {
                container: None,
                hosts: HashMap::new(),
                next_toast_id: 1,
            }),
        }
    }

    pub fn config(&self) -> &NotificationConfig {
        &self.config
    }

    /// Show a toast for `ttl`, creating the toast container if needed.
    pub fn toast(&self, message: impl Into<String>, level: ToastLevel, ttl: Duration) -> ToastId {
        let now = Instant::now();
        let mut inner = self.lock();

        let id = ToastId(inner.next_toast_id);
        inner.next_toast_id += 1;

        let container_id = &self.config.container_id;
        let container = inner.container.get_or_insert_with(|| {
            log::debug!("Created toast container '{}'", container_id);
            ToastContainer {
                id: container_id.clone(),
                toasts: Vec::new(),
            }
        });

        container.toasts.retain(|t| !t.is_expired(now));

        let toast = Toast::new(id, level, message.into(), expiry(now, ttl));
        log::debug!("Showing {} {} for {:?}: {}", level, id, ttl, toast.message);
        container.toasts.push(toast);

        id
    }

    /// Show a toast for the configured default lifetime.
    pub fn toast_default(&self, message: impl Into<String>, level: ToastLevel) -> ToastId {
        self.toast(message, level, self.config.toast_ttl())
    }

    /// Remove a toast before its lifetime elapses. Returns false if it was
    /// already gone.
    pub fn dismiss(&self, id: ToastId) -> bool {
        let mut inner = self.lock();
        let Some(container) = inner.container.as_mut() else {
            return false;
        };

        let before = container.toasts.len();
        container.toasts.retain(|t| t.id != id);
        container.toasts.len() != before
    }

    /// Toasts still on screen, oldest first.
    pub fn visible_toasts(&self) -> Vec<Toast> {
        let now = Instant::now();
        let mut inner = self.lock();

        match inner.container.as_mut() {
            Some(container) => {
                container.toasts.retain(|t| !t.is_expired(now));
                container.toasts.clone()
            }
            None => Vec::new(),
        }
    }

    /// Whether the toast container has been created yet.
    pub fn has_container(&self) -> bool {
        self.lock().container.is_some()
    }

    pub fn container_id(&self) -> Option<String> {
        self.lock().container.as_ref().map(|c| c.id.clone())
    }

    /// Register a page container that can receive inline alerts. Mounting an
    /// already mounted host keeps its alerts.
    pub fn mount(&self, host_id: impl Into<String>) {
        self.lock().hosts.entry(host_id.into()).or_default();
    }

    /// Insert an alert at the top of `host_id`. Returns `None` when no such
    /// host is mounted.
    pub fn show_inline(
        &self,
        host_id: &str,
        kind: InlineKind,
        text: impl Into<String>,
    ) -> Option<InlineAlert> {
        let now = Instant::now();
        let mut inner = self.lock();

        let Some(alerts) = inner.hosts.get_mut(host_id) else {
            log::warn!("Inline alert dropped: container '{}' is not mounted", host_id);
            return None;
        };

        alerts.retain(|a| !a.is_expired(now));

        let alert = InlineAlert::new(kind, text.into(), expiry(now, self.config.inline_ttl()));
        alerts.insert(0, alert.clone());

        Some(alert)
    }

    /// Alerts still shown in `host_id`, newest first.
    pub fn visible_inline(&self, host_id: &str) -> Vec<InlineAlert> {
        let now = Instant::now();
        let mut inner = self.lock();

        match inner.hosts.get_mut(host_id) {
            Some(alerts) => {
                alerts.retain(|a| !a.is_expired(now));
                alerts.clone()
            }
            None => Vec::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, NotificationInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Lifetimes too long to represent stay on screen until dismissed.
fn expiry(now: Instant, ttl: Duration) -> Instant {
    now.checked_add(ttl)
        .or_else(|| now.checked_add(FAR_FUTURE))
        .unwrap_or(now)
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new(NotificationConfig::default())
    }
}
