use crate::{
    attendance_commands::AttendanceCommands, schedule_commands::ScheduleCommands,
    user_commands::UserCommands,
};

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// User directory operations
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Attendance log operations
    Attendance {
        #[command(subcommand)]
        action: AttendanceCommands,
    },

    /// Class schedule operations
    Schedules {
        #[command(subcommand)]
        action: ScheduleCommands,
    },

    /// Delete all users and the attendance log
    Clear,

    /// Print every collection as a snapshot
    Export,

    /// Replace every collection from a snapshot file
    Import {
        /// Path to a snapshot produced by `gf export`
        file: PathBuf,
    },
}
