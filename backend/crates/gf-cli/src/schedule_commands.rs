use clap::Subcommand;

#[derive(Subcommand)]
pub enum ScheduleCommands {
    /// List schedule slots
    List {
        /// Only slots taught by this teacher (case-insensitive)
        #[arg(long)]
        teacher_id: Option<String>,
    },
    /// Add a schedule slot
    Add {
        #[arg(long)]
        class_id: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        teacher_id: String,
        /// Day of week, e.g. Monday
        #[arg(long)]
        day: String,
        /// Start time (HH:MM)
        #[arg(long)]
        start_time: String,
        /// End time (HH:MM)
        #[arg(long)]
        end_time: String,
    },
    /// Remove a schedule slot
    Remove {
        /// Schedule ID (UUID)
        id: String,
    },
}
