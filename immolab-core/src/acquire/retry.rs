//! Bounded retry policy with exponential backoff.
//!
//! Attempt bounds, backoff, and the request timeout live in one configurable
//! policy so operators can tune them per portal without touching code.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::provider::AcquireError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Total attempts including the first (1 = no retry).
    pub max_attempts: u32,
    /// Backoff base; attempt n waits `base_delay_ms * 2^(n-1)`.
    pub base_delay_ms: u64,
    /// Per-request timeout handed to the HTTP client.
    pub timeout_secs: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 1000,
            timeout_secs: 60,
        }
    }
}

impl RetryPolicy {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Backoff delay before retry number `attempt` (1-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 1u64 << attempt.saturating_sub(1).min(16);
        Duration::from_millis(self.base_delay_ms.saturating_mul(factor))
    }

    /// Run `op`, retrying transient failures up to the attempt bound.
    ///
    /// Non-transient errors (empty page, blocked) return immediately — more
    /// attempts cannot fix those.
    pub fn run<T>(
        &self,
        mut op: impl FnMut() -> Result<T, AcquireError>,
    ) -> Result<T, AcquireError> {
        let attempts = self.max_attempts.max(1);
        let mut last_err = None;
        for attempt in 1..=attempts {
            match op() {
                Ok(value) => return Ok(value),
                Err(e) if e.is_transient() && attempt < attempts => {
                    std::thread::sleep(self.delay_for(attempt));
                    last_err = Some(e);
                }
                Err(e) => return Err(e),
            }
        }
        // Unreachable unless attempts == 0 was clamped; keep the last error.
        Err(last_err.unwrap_or(AcquireError::Blocked))
    }
}
