//! Deadline tracking for search

use crate::{GridlockError, ResourceLimits};
use std::time::Instant;

/// Tracks elapsed search time against `max_search_time_ms`
pub struct TimeoutTracker {
    start_time: Instant,
}

impl TimeoutTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start_time.elapsed().as_millis() as u64
    }

    /// Returns an error once elapsed time exceeds `max_search_time_ms`
    pub fn check_timeout(&self, limits: &ResourceLimits) -> Result<(), GridlockError> {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > limits.max_search_time_ms {
            return Err(GridlockError::ResourceLimitExceeded {
                limit_name: "max_search_time_ms".to_string(),
                limit_value: limits.max_search_time_ms.to_string(),
                actual_value: elapsed_ms.to_string(),
                suggestion: format!(
                    "Search took {}ms, exceeding the limit of {}ms. Use fewer categories or items, or raise the limit.",
                    elapsed_ms, limits.max_search_time_ms
                ),
            });
        }
        Ok(())
    }
}

impl Default for TimeoutTracker {
    fn default() -> Self {
        Self::new()
    }
}
