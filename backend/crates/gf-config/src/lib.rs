mod capture_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod notification_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use capture_config::{CaptureConfig, FacingMode};
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use notification_config::NotificationConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "GF_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".gf";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_STORAGE_DIR: &str = "storage";
const DEFAULT_STORAGE_ORIGIN: &str = "default";
const DEFAULT_CHANGE_CHANNEL_CAPACITY: usize = 64;
const MIN_CHANGE_CHANNEL_CAPACITY: usize = 1;
const MAX_CHANGE_CHANNEL_CAPACITY: usize = 10_000;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_TOAST_TTL_MS: u64 = 3_500;
const DEFAULT_INLINE_TTL_MS: u64 = 5_000;
const DEFAULT_TOAST_CONTAINER_ID: &str = "toastContainer";
const MIN_NOTIFICATION_TTL_MS: u64 = 1;
const MAX_NOTIFICATION_TTL_MS: u64 = 600_000;

const DEFAULT_CAPTURE_WIDTH: u32 = 1280;
const DEFAULT_CAPTURE_HEIGHT: u32 = 720;
const DEFAULT_JPEG_QUALITY: f32 = 0.9;
const MAX_CAPTURE_DIMENSION: u32 = 8192;
