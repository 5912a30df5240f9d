use serde::Serialize;

/// Number of records written per collection by a snapshot import
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportCounts {
    pub users: usize,
    pub attendance: usize,
    pub schedules: usize,
}
