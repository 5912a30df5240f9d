use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum UserCommands {
    /// List users in registration order
    List {
        /// Only users with this exact role
        #[arg(long)]
        role: Option<String>,
    },
    /// Get a user by ID (case-insensitive)
    Get {
        /// User ID
        id: String,
    },
    /// Register a user
    Add {
        /// User ID (non-alphanumeric characters are dropped)
        #[arg(long)]
        id: String,
        /// Display name
        #[arg(long)]
        name: String,
        /// Role, e.g. student or teacher
        #[arg(long)]
        role: String,
        /// Enrollment image file (repeatable)
        #[arg(long = "image")]
        images: Vec<PathBuf>,
        /// Fail if the ID is already registered
        #[arg(long)]
        unique: bool,
    },
    /// Remove users whose ID matches exactly
    Remove {
        /// User ID (case-sensitive)
        id: String,
    },
}
