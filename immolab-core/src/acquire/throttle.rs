//! Scrape throttle: request pacing plus a trip-on-ban cooldown.
//!
//! A property portal that sees a burst of listing-page requests will start
//! serving 403s. The throttle enforces a minimum interval between requests,
//! and when the portal blocks us anyway (403, or repeated failures) it trips
//! and refuses all further requests for a cooldown period.

use std::sync::Mutex;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ThrottleState {
    /// Normal operation — requests are allowed, paced by `min_interval`.
    Open,
    /// Tripped — all requests refused until the cooldown expires.
    Tripped { at: Instant },
}

#[derive(Debug)]
struct Inner {
    state: ThrottleState,
    last_request: Option<Instant>,
    consecutive_failures: u32,
}

/// Shared pacing and ban guard for one scrape run.
#[derive(Debug)]
pub struct ScrapeThrottle {
    inner: Mutex<Inner>,
    min_interval: Duration,
    cooldown: Duration,
    failure_threshold: u32,
}

impl ScrapeThrottle {
    pub fn new(min_interval: Duration, cooldown: Duration) -> Self {
        Self {
            inner: Mutex::new(Inner {
                state: ThrottleState::Open,
                last_request: None,
                consecutive_failures: 0,
            }),
            min_interval,
            cooldown,
            failure_threshold: 3,
        }
    }

    /// Default: 500ms between requests, 10-minute cooldown after a ban.
    pub fn default_portal() -> Self {
        Self::new(Duration::from_millis(500), Duration::from_secs(10 * 60))
    }

    /// Check if requests are currently allowed.
    pub fn is_allowed(&self) -> bool {
        let mut inner = self.inner.lock().unwrap();
        match inner.state {
            ThrottleState::Open => true,
            ThrottleState::Tripped { at } => {
                if at.elapsed() >= self.cooldown {
                    inner.state = ThrottleState::Open;
                    inner.consecutive_failures = 0;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Block until the pacing interval has passed, then claim a request slot.
    ///
    /// Returns false when the throttle is tripped.
    pub fn acquire_slot(&self) -> bool {
        if !self.is_allowed() {
            return false;
        }
        let wait = {
            let mut inner = self.inner.lock().unwrap();
            let wait = inner
                .last_request
                .map(|t| self.min_interval.saturating_sub(t.elapsed()))
                .unwrap_or(Duration::ZERO);
            inner.last_request = Some(Instant::now() + wait);
            wait
        };
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
        true
    }

    /// Record a successful request — resets the failure counter.
    pub fn record_success(&self) {
        self.inner.lock().unwrap().consecutive_failures = 0;
    }

    /// Record a failure; past the threshold the throttle trips.
    pub fn record_failure(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.consecutive_failures += 1;
        if inner.consecutive_failures >= self.failure_threshold {
            inner.state = ThrottleState::Tripped { at: Instant::now() };
        }
    }

    /// Immediately trip (HTTP 403 — the portal has blocked us).
    pub fn trip(&self) {
        self.inner.lock().unwrap().state = ThrottleState::Tripped { at: Instant::now() };
    }

    /// Remaining cooldown time (zero if not tripped).
    pub fn remaining_cooldown(&self) -> Duration {
        let inner = self.inner.lock().unwrap();
        match inner.state {
            ThrottleState::Open => Duration::ZERO,
            ThrottleState::Tripped { at } => self.cooldown.saturating_sub(at.elapsed()),
        }
    }
}
