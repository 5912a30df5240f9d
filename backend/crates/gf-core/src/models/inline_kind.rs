use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

const BASE_CLASS: &str = "inline-alert";

/// Flavor of an inline alert placed inside a page container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InlineKind {
    Success,
    Warn,
    #[default]
    Error,
}

impl InlineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Modifier class applied next to the shared `inline-alert` class
    pub fn modifier_class(&self) -> &'static str {
        match self {
            Self::Success => "inline-success",
            Self::Warn => "inline-warn",
            Self::Error => "inline-error",
        }
    }

    /// Full class list, e.g. `inline-alert inline-warn`
    pub fn class_list(&self) -> String {
        format!("{BASE_CLASS} {}", self.modifier_class())
    }

    /// Lenient parse: anything unrecognised renders as `Error`.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl FromStr for InlineKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "success" => Ok(Self::Success),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CoreError::InvalidInlineKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for InlineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
