use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Severity of a floating toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToastLevel {
    #[default]
    Info,
    Success,
    Warn,
    Error,
}

/// Colors used to paint a toast of a given level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastPalette {
    pub background: &'static str,
    pub foreground: &'static str,
    pub border: &'static str,
}

impl ToastLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    pub fn palette(&self) -> ToastPalette {
        match self {
            Self::Success => ToastPalette {
                background: "#ecfdf5",
                foreground: "#064e3b",
                border: "#bbf7d0",
            },
            Self::Error => ToastPalette {
                background: "#fff1f2",
                foreground: "#7f1d1d",
                border: "#fecaca",
            },
            Self::Warn => ToastPalette {
                background: "#fffbeb",
                foreground: "#92400e",
                border: "#fef08a",
            },
            Self::Info => ToastPalette {
                background: "#f8fafc",
                foreground: "#0f1724",
                border: "#e2e8f0",
            },
        }
    }

    /// Lenient parse: anything unrecognised renders as `Info`.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl FromStr for ToastLevel {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "info" => Ok(Self::Info),
            "success" => Ok(Self::Success),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CoreError::InvalidToastLevel {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ToastLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
