use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Camera failures.
///
/// Only `CapabilityUnavailable`, `PermissionDenied` and `DeviceFailure` ever
/// leave `CaptureService::acquire`. `Frame` is what platform draw and encode
/// steps report, and `capture_frame` absorbs it into an absent result.
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Camera not supported: {message} {location}")]
    CapabilityUnavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Camera access denied: {message} {location}")]
    PermissionDenied {
        message: String,
        location: ErrorLocation,
    },

    #[error("Camera device failed: {message} {location}")]
    DeviceFailure {
        message: String,
        location: ErrorLocation,
    },

    #[error("Frame capture failed: {message} {location}")]
    Frame {
        message: String,
        location: ErrorLocation,
    },
}

impl CaptureError {
    #[track_caller]
    pub fn capability_unavailable(message: impl Into<String>) -> Self {
        Self::CapabilityUnavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::PermissionDenied {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn device_failure(message: impl Into<String>) -> Self {
        Self::DeviceFailure {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn frame(message: impl Into<String>) -> Self {
        Self::Frame {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Retrying without user action cannot help.
    pub fn is_permanent(&self) -> bool {
        matches!(
            self,
            Self::CapabilityUnavailable { .. } | Self::PermissionDenied { .. }
        )
    }

    /// Short message suitable for a toast.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::CapabilityUnavailable { .. } => "Camera not supported on this device",
            Self::PermissionDenied { .. } => "Camera permission was denied",
            Self::DeviceFailure { .. } => "Camera could not be started",
            Self::Frame { .. } => "Could not capture a frame",
        }
    }
}

pub type Result<T> = std::result::Result<T, CaptureError>;
