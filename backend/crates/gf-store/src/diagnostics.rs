use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Counters for failures the storage layer absorbs instead of surfacing.
#[derive(Debug, Default)]
pub struct Diagnostics {
    decode_failures: AtomicU64,
    read_failures: AtomicU64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiagnosticsSnapshot {
    /// Blobs that were present but not a valid collection
    pub decode_failures: u64,
    /// Reads the underlying store refused
    pub read_failures: u64,
}

impl Diagnostics {
    pub fn record_decode_failure(&self) {
        self.decode_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_read_failure(&self) {
        self.read_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> DiagnosticsSnapshot {
        DiagnosticsSnapshot {
            decode_failures: self.decode_failures.load(Ordering::Relaxed),
            read_failures: self.read_failures.load(Ordering::Relaxed),
        }
    }
}
