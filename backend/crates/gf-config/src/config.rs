use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, CaptureConfig, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, LoggingConfig, NotificationConfig, StorageConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub notification: NotificationConfig,
    pub capture: CaptureConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for GF_CONFIG_DIR env var, else use ./.gf/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply GF_* environment variable overrides
    /// 5. Check for legacy ~/.gf/config.toml and warn
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        Self::warn_on_legacy_config(&config_path);

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: GF_CONFIG_DIR env var > ./.gf/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    fn warn_on_legacy_config(active: &Path) {
        let Some(home) = dirs::home_dir() else {
            return;
        };

        let legacy = home.join(DEFAULT_CONFIG_DIR).join(CONFIG_FILENAME);
        if legacy.exists() && legacy != active {
            warn!(
                "Ignoring legacy config at {} (active config: {}). Set {} to use it.",
                legacy.display(),
                active.display(),
                CONFIG_DIR_ENV
            );
        }
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.storage.validate()?;
        self.notification.validate()?;
        self.capture.validate()?;
        Ok(())
    }

    /// Absolute directory of the origin-scoped store.
    pub fn storage_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.storage.dir).join(&self.storage.origin))
    }

    /// Absolute path of the log file, when file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(ref filename) = self.logging.file else {
            return Ok(None);
        };

        let config_dir = Self::config_dir()?;
        Ok(Some(config_dir.join(&self.logging.dir).join(filename)))
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  storage: {}/{} (change buffer {})",
            self.storage.dir, self.storage.origin, self.storage.change_channel_capacity
        );
        info!(
            "  logging: {} (colored: {}, output: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.destination()
        );
        info!(
            "  notification: toast={}ms, inline={}ms, container={}",
            self.notification.toast_ttl_ms,
            self.notification.inline_ttl_ms,
            self.notification.container_id
        );
        info!(
            "  capture: {}x{} facing={} quality={}",
            self.capture.width,
            self.capture.height,
            self.capture.facing_mode.as_str(),
            self.capture.jpeg_quality
        );
    }

    fn apply_env_overrides(&mut self) {
        // Storage
        Self::apply_env_string("GF_STORAGE_DIR", &mut self.storage.dir);
        Self::apply_env_string("GF_STORAGE_ORIGIN", &mut self.storage.origin);
        Self::apply_env_parse(
            "GF_CHANGE_CHANNEL_CAPACITY",
            &mut self.storage.change_channel_capacity,
        );

        // Logging
        Self::apply_env_parse("GF_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("GF_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("GF_LOG_FILE", &mut self.logging.file);

        // Notification
        Self::apply_env_parse("GF_TOAST_TTL_MS", &mut self.notification.toast_ttl_ms);
        Self::apply_env_parse("GF_INLINE_TTL_MS", &mut self.notification.inline_ttl_ms);

        // Capture
        Self::apply_env_parse("GF_CAPTURE_WIDTH", &mut self.capture.width);
        Self::apply_env_parse("GF_CAPTURE_HEIGHT", &mut self.capture.height);
        Self::apply_env_parse("GF_CAPTURE_FACING_MODE", &mut self.capture.facing_mode);
        Self::apply_env_parse("GF_CAPTURE_JPEG_QUALITY", &mut self.capture.jpeg_quality);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
