use gf_config::{CaptureConfig, FacingMode};

/// What `acquire` asks the platform for: a video-only stream
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaConstraints {
    pub facing_mode: FacingMode,
    pub width: u32,
    pub height: u32,
    pub audio: bool,
}

impl From<&CaptureConfig> for MediaConstraints {
    fn from(config: &CaptureConfig) -> Self {
        Self {
            facing_mode: config.facing_mode,
            width: config.width,
            height: config.height,
            audio: false,
        }
    }
}

impl Default for MediaConstraints {
    fn default() -> Self {
        Self::from(&CaptureConfig::default())
    }
}
