//! Aggregator configuration
//!
//! Tunables for the subsystem that polls app metrics and periodically
//! persists the aggregates.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ConfigResult;
use crate::validation::{validate_positive_count, validate_positive_duration, Validatable};

/// Aggregator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregatorConfig {
    /// Number of metric poller workers
    #[serde(default = "default_metric_poller_count")]
    pub metric_poller_count: usize,

    /// Capacity of the app monitor queue
    #[serde(default = "default_app_monitor_channel_size")]
    pub app_monitor_channel_size: usize,

    /// Capacity of the app metric queue
    #[serde(default = "default_app_metric_channel_size")]
    pub app_metric_channel_size: usize,

    /// How often the aggregator runs
    #[serde(
        with = "crate::domains::utils::serde_duration",
        default = "default_aggregator_execute_interval"
    )]
    pub aggregator_execute_interval: Duration,

    /// How often scaling policies are re-polled
    #[serde(
        with = "crate::domains::utils::serde_duration",
        default = "default_policy_poller_interval"
    )]
    pub policy_poller_interval: Duration,

    /// How often aggregated metrics are saved
    #[serde(
        with = "crate::domains::utils::serde_duration",
        default = "default_save_interval"
    )]
    pub save_interval: Duration,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            metric_poller_count: default_metric_poller_count(),
            app_monitor_channel_size: default_app_monitor_channel_size(),
            app_metric_channel_size: default_app_metric_channel_size(),
            aggregator_execute_interval: default_aggregator_execute_interval(),
            policy_poller_interval: default_policy_poller_interval(),
            save_interval: default_save_interval(),
        }
    }
}

impl Validatable for AggregatorConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_positive_duration(
            self.aggregator_execute_interval,
            "aggregator_execute_interval",
            self.domain_name(),
        )?;
        validate_positive_duration(
            self.policy_poller_interval,
            "policy_poller_interval",
            self.domain_name(),
        )?;
        validate_positive_duration(self.save_interval, "save_interval", self.domain_name())?;
        validate_positive_count(
            self.metric_poller_count,
            "metric_poller_count",
            self.domain_name(),
        )?;
        validate_positive_count(
            self.app_monitor_channel_size,
            "app_monitor_channel_size",
            self.domain_name(),
        )?;
        validate_positive_count(
            self.app_metric_channel_size,
            "app_metric_channel_size",
            self.domain_name(),
        )?;
        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "aggregator"
    }
}

// Default value functions
fn default_metric_poller_count() -> usize {
    20
}

fn default_app_monitor_channel_size() -> usize {
    200
}

fn default_app_metric_channel_size() -> usize {
    200
}

fn default_aggregator_execute_interval() -> Duration {
    Duration::from_secs(40)
}

fn default_policy_poller_interval() -> Duration {
    Duration::from_secs(40)
}

fn default_save_interval() -> Duration {
    Duration::from_secs(5)
}
