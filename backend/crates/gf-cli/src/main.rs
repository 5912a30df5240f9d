//! gf - attendance demo storage CLI
//!
//! Works directly on the origin-scoped store under the config directory.
//!
//! # Examples
//!
//! ```bash
//! # Register a student with one enrollment image
//! gf users add --id S001 --name "Ada Lovelace" --role student --image ada.jpg
//!
//! # Check them in
//! gf attendance record --type student --id s001
//!
//! # Show their history
//! gf attendance query --type student --id S001 --pretty
//! ```

mod attendance_commands;
mod cli;
mod commands;
mod schedule_commands;
mod user_commands;

use crate::{
    attendance_commands::AttendanceCommands, cli::Cli, commands::Commands,
    schedule_commands::ScheduleCommands, user_commands::UserCommands,
};

use gf_cli::{Result as CliErrorResult, Session, logger};
use gf_config::Config;
use gf_core::{ScheduleEntry, ToastLevel};

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let session = match start() {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = run(&session, cli.command);

    if let Err(ref e) = result {
        session
            .notifications()
            .toast_default(e.to_string(), ToastLevel::Error);
    }
    for toast in session.notifications().visible_toasts() {
        eprintln!("{}", toast);
    }

    // Handle result
    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            log::debug!("Command failed: {:?}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load and validate config, start logging and open the store.
fn start() -> CliErrorResult<Session> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    Session::open(&config)
}

fn run(session: &Session, command: Commands) -> CliErrorResult<Value> {
    match command {
        // User commands
        Commands::Users { action } => match action {
            UserCommands::List { role } => session.list_users(role.as_deref()),
            UserCommands::Get { id } => session.get_user(&id),
            UserCommands::Add {
                id,
                name,
                role,
                images,
                unique,
            } => session.add_user(&id, &name, &role, &images, unique),
            UserCommands::Remove { id } => session.remove_user(&id),
        },

        // Attendance commands
        Commands::Attendance { action } => match action {
            AttendanceCommands::Record { r#type, id, status } => {
                session.record_attendance(&r#type, &id, &status)
            }
            AttendanceCommands::List => session.list_attendance(),
            AttendanceCommands::Query { r#type, id } => session.query_attendance(&r#type, &id),
            AttendanceCommands::Clear => session.clear_attendance(),
        },

        // Schedule commands
        Commands::Schedules { action } => match action {
            ScheduleCommands::List { teacher_id } => session.list_schedules(teacher_id.as_deref()),
            ScheduleCommands::Add {
                class_id,
                subject,
                teacher_id,
                day,
                start_time,
                end_time,
            } => session.add_schedule(ScheduleEntry::new(
                class_id, subject, teacher_id, day, start_time, end_time,
            )),
            ScheduleCommands::Remove { id } => session.remove_schedule(&id),
        },

        Commands::Clear => session.clear_all(),
        Commands::Export => session.export(),
        Commands::Import { file } => session.import(&file),
    }
}
