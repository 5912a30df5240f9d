use serde::{Deserialize, Serialize};

/// Persisted collection touched by a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Users,
    Attendance,
    Schedules,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Attendance => "attendance",
            Self::Schedules => "schedules",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Inserted,
    Removed,
    Cleared,
}

/// Advisory "storage changed" signal. Carries no records, only which
/// collection moved, so observers can decide whether to re-read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StorageChange {
    pub collection: Collection,
    pub kind: ChangeKind,
}

impl StorageChange {
    pub fn new(collection: Collection, kind: ChangeKind) -> Self {
        Self { collection, kind }
    }
}
