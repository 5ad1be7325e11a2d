//! Submission gate
//!
//! Sliding log of accepted submission instants. A call is admitted while
//! fewer than `max_requests` instants fall inside the trailing window.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use parking_lot::Mutex;
use tracing::debug;

use wedding_common::SubmissionLimitConfig;
use wedding_core::traits::{Clock, SystemClock};

/// Process-local limiter shared by every submission path
pub struct RateLimiter {
    window: TimeDelta,
    max_requests: usize,
    clock: Arc<dyn Clock>,
    accepted: Mutex<VecDeque<DateTime<Utc>>>,
}

impl RateLimiter {
    pub fn new(window: Duration, max_requests: usize, clock: Arc<dyn Clock>) -> Self {
        Self {
            window: TimeDelta::milliseconds(i64::try_from(window.as_millis()).unwrap_or(i64::MAX)),
            max_requests,
            clock,
            accepted: Mutex::new(VecDeque::with_capacity(max_requests)),
        }
    }

    /// Build from configuration using the wall clock
    pub fn from_config(config: &SubmissionLimitConfig) -> Self {
        Self::new(config.window(), config.max_requests, Arc::new(SystemClock))
    }

    /// Admit or deny one submission; only admitted calls are recorded
    pub fn allow(&self) -> bool {
        let now = self.clock.now();
        let mut accepted = self.accepted.lock();
        Self::evict(&mut accepted, now - self.window);

        if accepted.len() < self.max_requests {
            accepted.push_back(now);
            true
        } else {
            debug!(in_window = accepted.len(), "Submission denied by rate limiter");
            false
        }
    }

    /// Time until the next call would be admitted
    pub fn retry_after(&self) -> Duration {
        let now = self.clock.now();
        let mut accepted = self.accepted.lock();
        Self::evict(&mut accepted, now - self.window);

        if accepted.len() < self.max_requests {
            return Duration::ZERO;
        }

        // The oldest entry leaves once it is strictly older than the window.
        accepted
            .front()
            .map(|oldest| *oldest + self.window - now + TimeDelta::milliseconds(1))
            .and_then(|wait| wait.to_std().ok())
            .unwrap_or(Duration::ZERO)
    }

    /// Window length
    pub fn window(&self) -> Duration {
        self.window.to_std().unwrap_or(Duration::ZERO)
    }

    /// Capacity within one window
    pub fn max_requests(&self) -> usize {
        self.max_requests
    }

    fn evict(accepted: &mut VecDeque<DateTime<Utc>>, cutoff: DateTime<Utc>) {
        while accepted.front().is_some_and(|t| *t < cutoff) {
            accepted.pop_front();
        }
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("window", &self.window)
            .field("max_requests", &self.max_requests)
            .finish()
    }
}
