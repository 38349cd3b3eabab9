use std::time::Duration;

/// Configuration for transaction conflict retries
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts, counting the first one
    pub max_attempts: u32,
    /// Delay before the first retry
    pub initial_delay: Duration,
    /// Upper bound for the backoff delay
    pub max_delay: Duration,
    /// Multiplier for exponential backoff
    pub backoff_multiplier: f64,
    /// Whether to add jitter so colliding writers spread out
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            initial_delay: Duration::from_millis(10),
            max_delay: Duration::from_millis(500),
            backoff_multiplier: 2.0,
            jitter: true,
        }
    }
}

impl RetryConfig {
    /// Delay before the retry that follows attempt number `attempt`.
    pub(crate) fn delay_before_retry(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1) as i32;
        let backoff = self.initial_delay.as_secs_f64() * self.backoff_multiplier.powi(exponent);
        let capped = backoff.min(self.max_delay.as_secs_f64());

        let jitter_factor = if self.jitter {
            0.5 + rand::random::<f64>()
        } else {
            1.0
        };

        Duration::from_secs_f64(capped * jitter_factor)
    }
}
