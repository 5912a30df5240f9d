use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_INLINE_TTL_MS, DEFAULT_TOAST_CONTAINER_ID,
    DEFAULT_TOAST_TTL_MS, MAX_NOTIFICATION_TTL_MS, MIN_NOTIFICATION_TTL_MS,
};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Default lifetime of a floating toast
    pub toast_ttl_ms: u64,
    /// Lifetime of an inline alert
    pub inline_ttl_ms: u64,
    /// Well-known id of the lazily created toast container
    pub container_id: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            toast_ttl_ms: DEFAULT_TOAST_TTL_MS,
            inline_ttl_ms: DEFAULT_INLINE_TTL_MS,
            container_id: String::from(DEFAULT_TOAST_CONTAINER_ID),
        }
    }
}

impl NotificationConfig {
    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.toast_ttl_ms)
    }

    pub fn inline_ttl(&self) -> Duration {
        Duration::from_millis(self.inline_ttl_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, value) in [
            ("toast_ttl_ms", self.toast_ttl_ms),
            ("inline_ttl_ms", self.inline_ttl_ms),
        ] {
            if !(MIN_NOTIFICATION_TTL_MS..=MAX_NOTIFICATION_TTL_MS).contains(&value) {
                return Err(ConfigError::notification(format!(
                    "notification.{} must be {}-{}, got {}",
                    name, MIN_NOTIFICATION_TTL_MS, MAX_NOTIFICATION_TTL_MS, value
                )));
            }
        }

        if self.container_id.trim().is_empty() {
            return Err(ConfigError::notification(
                "notification.container_id cannot be empty",
            ));
        }

        Ok(())
    }
}
