//! Evaluator configuration
//!
//! Tunables for the subsystem that evaluates scaling policy triggers against
//! aggregated metrics.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ConfigResult;
use crate::validation::{validate_positive_count, validate_positive_duration, Validatable};

/// Evaluator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Number of evaluator workers
    #[serde(default = "default_evaluator_count")]
    pub evaluator_count: usize,

    /// Capacity of the trigger queue
    #[serde(default = "default_trigger_array_channel_size")]
    pub trigger_array_channel_size: usize,

    /// How often the evaluation manager runs
    #[serde(
        with = "crate::domains::utils::serde_duration",
        default = "default_evaluation_manager_execute_interval"
    )]
    pub evaluation_manager_execute_interval: Duration,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            evaluator_count: default_evaluator_count(),
            trigger_array_channel_size: default_trigger_array_channel_size(),
            evaluation_manager_execute_interval: default_evaluation_manager_execute_interval(),
        }
    }
}

impl Validatable for EvaluatorConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_positive_duration(
            self.evaluation_manager_execute_interval,
            "evaluation_manager_execute_interval",
            self.domain_name(),
        )?;
        validate_positive_count(self.evaluator_count, "evaluator_count", self.domain_name())?;
        validate_positive_count(
            self.trigger_array_channel_size,
            "trigger_array_channel_size",
            self.domain_name(),
        )?;
        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "evaluator"
    }
}

// Default value functions
fn default_evaluator_count() -> usize {
    20
}

fn default_trigger_array_channel_size() -> usize {
    200
}

fn default_evaluation_manager_execute_interval() -> Duration {
    Duration::from_secs(40)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluator_config_defaults() {
        let config = EvaluatorConfig::default();
        assert_eq!(config.evaluator_count, 20);
        assert_eq!(config.trigger_array_channel_size, 200);
        assert_eq!(
            config.evaluation_manager_execute_interval,
            Duration::from_secs(40)
        );
    }

    #[test]
    fn test_evaluator_config_validation() {
        let mut config = EvaluatorConfig::default();
        assert!(config.validate().is_ok());

        config.evaluation_manager_execute_interval = Duration::ZERO;
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error in evaluator: evaluation_manager_execute_interval must be greater than 0"
        );

        config = EvaluatorConfig::default();
        config.evaluator_count = 0;
        assert!(config.validate().is_err());

        config = EvaluatorConfig::default();
        config.trigger_array_channel_size = 0;
        assert!(config.validate().is_err());
    }
}
