use gf_core::DEFAULT_STATUS;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum AttendanceCommands {
    /// Record an attendance entry stamped with the current local time
    Record {
        /// Attendance stream, e.g. student or teacher
        #[arg(long = "type")]
        r#type: String,
        /// Subject ID
        #[arg(long)]
        id: String,
        /// Status label
        #[arg(long, default_value = DEFAULT_STATUS)]
        status: String,
    },
    /// Full log, most recent first
    List,
    /// Entries for one subject, most recent first
    Query {
        /// Attendance stream (exact)
        #[arg(long = "type")]
        r#type: String,
        /// Subject ID (case-insensitive)
        #[arg(long)]
        id: String,
    },
    /// Delete the attendance log
    Clear,
}
