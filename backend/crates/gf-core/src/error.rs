use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Strict parse failures for the presentation enums
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid toast level: {value} {location}")]
    InvalidToastLevel {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid inline alert kind: {value} {location}")]
    InvalidInlineKind {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
