//! Run statistics tracking.
//!
//! Counts the locally recovered failures of one pipeline run so they can be
//! summarized once the run is over.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::FailureKind;

/// Failure counters for a single pipeline run.
///
/// Every `FailureKind` is initialized to zero on creation. Counters are atomic
/// so a shared reference is enough to record failures.
pub struct RunStats {
    failures: HashMap<FailureKind, AtomicUsize>,
}

impl RunStats {
    pub fn new() -> Self {
        let mut failures = HashMap::new();
        for kind in FailureKind::iter() {
            failures.insert(kind, AtomicUsize::new(0));
        }
        RunStats { failures }
    }

    /// Increment a failure counter.
    pub fn increment(&self, kind: FailureKind) {
        if let Some(counter) = self.failures.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment failure counter for {:?} which is not in the map. \
                 This indicates a bug in RunStats initialization.",
                kind
            );
        }
    }

    /// Get the count for a failure kind.
    pub fn get_count(&self, kind: FailureKind) -> usize {
        self.failures
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total number of recorded failures across all kinds.
    pub fn total(&self) -> usize {
        self.failures
            .values()
            .map(|c| c.load(Ordering::SeqCst))
            .sum()
    }

    /// Logs every non-zero counter at info level.
    pub fn log_summary(&self) {
        for kind in FailureKind::iter() {
            let count = self.get_count(kind);
            if count > 0 {
                log::info!("{}: {}", kind, count);
            }
        }
    }
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}
