use gf_core::{ToastLevel, ToastPalette};

use std::fmt;

use tokio::time::Instant;

/// Handle returned for every toast, used to dismiss it early
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub(crate) u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// A floating, leveled message stacked in the toast container
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub level: ToastLevel,
    pub message: String,
    pub(crate) expires_at: Instant,
}

impl Toast {
    pub(crate) fn new(id: ToastId, level: ToastLevel, message: String, expires_at: Instant) -> Self {
        Self {
            id,
            level,
            message,
            expires_at,
        }
    }

    pub fn palette(&self) -> ToastPalette {
        self.level.palette()
    }

    pub fn expires_at(&self) -> Instant {
        self.expires_at
    }

    pub(crate) fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)
    }
}
