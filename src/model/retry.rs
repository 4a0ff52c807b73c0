/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_RETRY_FACTOR, DEFAULT_RETRY_INITIAL_DELAY_MS, DEFAULT_RETRY_LIMIT_MS,
};
use crate::error::ConfigError;
use std::time::{Duration, Instant};

/// Time-boxed exponential backoff used to retry requests
///
/// The strategy only produces delays; it never looks at the outcome of an
/// attempt. Attempt `0` always runs immediately. Attempt `n` waits
/// `initial * factor^(n-1)`, drawn uniformly from `[0, nominal)` when jitter is
/// on, and is skipped once it would start after `limit` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryStrategy {
    /// Delay before the second attempt
    pub initial: Duration,
    /// Growth factor applied after every attempt
    pub factor: f64,
    /// Whether delays are randomised
    pub jitter: bool,
    /// Total time budget for all attempts of one call
    pub limit: Duration,
}

impl Default for RetryStrategy {
    fn default() -> Self {
        Self {
            initial: Duration::from_millis(DEFAULT_RETRY_INITIAL_DELAY_MS),
            factor: DEFAULT_RETRY_FACTOR,
            jitter: true,
            limit: Duration::from_millis(DEFAULT_RETRY_LIMIT_MS),
        }
    }
}

impl RetryStrategy {
    /// Creates a new strategy
    #[must_use]
    pub fn new(initial: Duration, factor: f64, jitter: bool, limit: Duration) -> Self {
        Self {
            initial,
            factor,
            jitter,
            limit,
        }
    }

    /// Returns a copy with a different time budget
    #[must_use]
    pub fn with_limit(mut self, limit: Duration) -> Self {
        self.limit = limit;
        self
    }

    /// Returns a copy with jitter switched on or off
    #[must_use]
    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.jitter = jitter;
        self
    }

    /// Nominal delay before attempt `attempt`, without jitter
    #[must_use]
    pub fn nominal_delay(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::ZERO;
        }
        let exponent = i32::try_from(attempt - 1).unwrap_or(i32::MAX);
        let secs = self.initial.as_secs_f64() * self.factor.powi(exponent);
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }

    /// Checks that delays never shrink from one attempt to the next
    ///
    /// # Errors
    /// * `ConfigError::InvalidRetryFactor` - If `factor` is below 1 or not finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.factor.is_finite() || self.factor < 1.0 {
            return Err(ConfigError::InvalidRetryFactor(self.factor.to_string()));
        }
        Ok(())
    }

    /// Delay to wait before attempt `attempt`, given the time already spent
    ///
    /// Returns `None` when the attempt would start past the budget. The first
    /// attempt is always allowed, even when `limit` is shorter than `initial`.
    #[must_use]
    pub fn next_delay(&self, attempt: u32, elapsed: Duration) -> Option<Duration> {
        if attempt == 0 {
            return Some(Duration::ZERO);
        }
        let nominal = self.nominal_delay(attempt);
        let delay = if self.jitter {
            Duration::try_from_secs_f64(nominal.as_secs_f64() * rand::random::<f64>())
                .unwrap_or(nominal)
        } else {
            nominal
        };
        match elapsed.checked_add(delay) {
            Some(start) if start <= self.limit => Some(delay),
            _ => None,
        }
    }

    /// Starts the cursor for a single retry loop
    #[must_use]
    pub fn start(&self) -> RetryTimer {
        RetryTimer {
            strategy: *self,
            attempt: 0,
            started: Instant::now(),
        }
    }
}

/// Cursor over the attempt slots of one retry loop
#[derive(Debug)]
pub struct RetryTimer {
    strategy: RetryStrategy,
    attempt: u32,
    started: Instant,
}

impl RetryTimer {
    /// Delay before the next attempt, or `None` when the budget is spent
    pub fn next_delay(&mut self) -> Option<Duration> {
        let delay = self
            .strategy
            .next_delay(self.attempt, self.started.elapsed())?;
        self.attempt = self.attempt.saturating_add(1);
        Some(delay)
    }

    /// Number of slots handed out so far
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempt
    }

    /// Time since the loop started
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
