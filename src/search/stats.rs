//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States expanded (popped/visited and advanced through a turn).
    pub expansions: u64,

    /// Successor states generated.
    pub generated: u64,

    /// States skipped because their fingerprint was already settled.
    pub deduped: u64,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate expansions per second.
    #[must_use]
    pub fn expansions_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.expansions as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
