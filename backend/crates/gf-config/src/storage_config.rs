use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CHANGE_CHANNEL_CAPACITY, DEFAULT_STORAGE_DIR,
    DEFAULT_STORAGE_ORIGIN, MAX_CHANGE_CHANNEL_CAPACITY, MIN_CHANGE_CHANNEL_CAPACITY,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Store root, relative to the config directory
    pub dir: String,
    /// Scopes the store the way a browser origin scopes local storage
    pub origin: String,
    /// Change events buffered per subscriber
    pub change_channel_capacity: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_STORAGE_DIR),
            origin: String::from(DEFAULT_STORAGE_ORIGIN),
            change_channel_capacity: DEFAULT_CHANGE_CHANNEL_CAPACITY,
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let dir = std::path::Path::new(&self.dir);
        if self.dir.is_empty() || dir.is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::storage(
                "storage.dir must be relative and cannot contain '..'",
            ));
        }

        let origin_ok = !self.origin.is_empty()
            && self.origin != "."
            && self
                .origin
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !origin_ok || self.origin.contains("..") {
            return Err(ConfigError::storage(format!(
                "storage.origin may only contain letters, digits, '-', '_' and '.', got '{}'",
                self.origin
            )));
        }

        if self.change_channel_capacity < MIN_CHANGE_CHANNEL_CAPACITY
            || self.change_channel_capacity > MAX_CHANGE_CHANNEL_CAPACITY
        {
            return Err(ConfigError::storage(format!(
                "storage.change_channel_capacity must be {}-{}, got {}",
                MIN_CHANGE_CHANNEL_CAPACITY,
                MAX_CHANGE_CHANNEL_CAPACITY,
                self.change_channel_capacity
            )));
        }

        Ok(())
    }
}
