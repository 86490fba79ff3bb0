//! Circuit breaker configuration for downstream calls

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default backoff applied after the first consecutive failure
pub const DEFAULT_BACK_OFF_INITIAL_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Ceiling for the exponential backoff
pub const DEFAULT_BACK_OFF_MAX_INTERVAL: Duration = Duration::from_secs(2 * 60 * 60);

/// Consecutive failures before the breaker opens
pub const DEFAULT_CONSECUTIVE_FAILURE_COUNT: u32 = 3;

/// Circuit breaker configuration
///
/// Fields deserialize to zero when absent and are resolved to the constants
/// above in a post-parse pass. A document-supplied zero is indistinguishable
/// from an absent key and also resolves to the default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CircuitBreakerConfig {
    /// Initial backoff interval
    #[serde(with = "crate::domains::utils::serde_duration")]
    pub back_off_initial_interval: Duration,

    /// Maximum backoff interval
    #[serde(with = "crate::domains::utils::serde_duration")]
    pub back_off_max_interval: Duration,

    /// Consecutive failures tolerated before opening the breaker
    pub consecutive_failure_count: u32,
}

impl CircuitBreakerConfig {
    /// Replace zero-valued fields with their fixed defaults
    pub(crate) fn fill_defaults(&mut self) {
        if self.consecutive_failure_count == 0 {
            self.consecutive_failure_count = DEFAULT_CONSECUTIVE_FAILURE_COUNT;
        }
        if self.back_off_initial_interval.is_zero() {
            self.back_off_initial_interval = DEFAULT_BACK_OFF_INITIAL_INTERVAL;
        }
        if self.back_off_max_interval.is_zero() {
            self.back_off_max_interval = DEFAULT_BACK_OFF_MAX_INTERVAL;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_defaults_replaces_zeroes() {
        let mut config = CircuitBreakerConfig::default();
        config.fill_defaults();
        assert_eq!(config.back_off_initial_interval, Duration::from_secs(300));
        assert_eq!(config.back_off_max_interval, Duration::from_secs(7200));
        assert_eq!(config.consecutive_failure_count, 3);
    }

    #[test]
    fn test_fill_defaults_keeps_explicit_values() {
        let mut config = CircuitBreakerConfig {
            back_off_initial_interval: Duration::from_secs(30),
            back_off_max_interval: Duration::from_secs(600),
            consecutive_failure_count: 7,
        };
        config.fill_defaults();
        assert_eq!(config.back_off_initial_interval, Duration::from_secs(30));
        assert_eq!(config.back_off_max_interval, Duration::from_secs(600));
        assert_eq!(config.consecutive_failure_count, 7);
    }
}
