//! gf-cli library
//!
//! Exposes the command session and logger so the binary and tests share them.

pub mod error;
pub mod logger;
pub mod session;

#[cfg(test)]
mod tests;

pub use error::{CliError, Result};
pub use session::Session;
