//! Exponential backoff with jitter.
//!
//! Decides, for a given attempt and failure classification, whether to
//! retry and how long to wait first. No side effects; the caller sleeps.

use medibot_core::FailureClass;
use rand::Rng;
use std::time::Duration;

/// Outcome of a backoff decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Retry after waiting this long.
    Retry(Duration),
    /// Do not retry.
    Stop,
}

/// Backoff policy configuration.
///
/// Delay for attempt `n` (0-based) is `base * 2^n` plus a jitter drawn
/// uniformly from `[0, base)`. The jitter keeps concurrent callers from
/// retrying in lockstep.
#[derive(Debug, Clone)]
pub struct BackoffPolicy {
    max_attempts: u32,
    base_delay: Duration,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_millis(1000),
        }
    }
}

impl BackoffPolicy {
    /// Create a policy. `max_attempts` is clamped to at least 1.
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    /// Maximum number of attempts this policy allows.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Base delay used for the exponential schedule.
    pub fn base_delay(&self) -> Duration {
        self.base_delay
    }

    /// Compute the delay for a given attempt (0-indexed), jitter included.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base_ms = self.base_delay.as_millis() as u64;
        let exponential = base_ms.saturating_mul(2u64.saturating_pow(attempt));
        let jitter = if base_ms == 0 {
            0
        } else {
            rand::thread_rng().gen_range(0..base_ms)
        };
        Duration::from_millis(exponential.saturating_add(jitter))
    }

    /// Decide whether to retry after a failed attempt.
    ///
    /// Client errors never retry; transient classes retry while attempts
    /// remain.
    pub fn decide(&self, attempt: u32, class: FailureClass) -> Decision {
        if class == FailureClass::ClientError {
            return Decision::Stop;
        }
        if attempt + 1 >= self.max_attempts {
            return Decision::Stop;
        }
        Decision::Retry(self.delay_for_attempt(attempt))
    }
}
