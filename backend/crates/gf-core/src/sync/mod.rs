pub mod import_counts;
pub mod snapshot;
