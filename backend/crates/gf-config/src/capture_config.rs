use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CAPTURE_HEIGHT, DEFAULT_CAPTURE_WIDTH,
    DEFAULT_JPEG_QUALITY, MAX_CAPTURE_DIMENSION,
};

use std::str::FromStr;

use serde::Deserialize;

/// Which camera to ask the platform for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FacingMode {
    /// Front camera, facing the person being enrolled
    #[default]
    User,
    Environment,
}

impl FacingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Environment => "environment",
        }
    }
}

impl FromStr for FacingMode {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> ConfigErrorResult<Self> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Self::User),
            "environment" => Ok(Self::Environment),
            _ => Err(ConfigError::capture(format!(
                "capture.facing_mode must be 'user' or 'environment', got '{s}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Requested stream width; also the frame width when the source reports none
    pub width: u32,
    /// Requested stream height; also the frame height when the source reports none
    pub height: u32,
    pub facing_mode: FacingMode,
    pub jpeg_quality: f32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CAPTURE_WIDTH,
            height: DEFAULT_CAPTURE_HEIGHT,
            facing_mode: FacingMode::default(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl CaptureConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.width == 0
            || self.height == 0
            || self.width > MAX_CAPTURE_DIMENSION
            || self.height > MAX_CAPTURE_DIMENSION
        {
            return Err(ConfigError::capture(format!(
                "capture.width/height must be 1-{}, got {}x{}",
                MAX_CAPTURE_DIMENSION, self.width, self.height
            )));
        }

        if !(self.jpeg_quality > 0.0 && self.jpeg_quality <= 1.0) {
            return Err(ConfigError::capture(format!(
                "capture.jpeg_quality must be in (0, 1], got {}",
                self.jpeg_quality
            )));
        }

        Ok(())
    }
}
