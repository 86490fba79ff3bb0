//! Domain-specific configuration modules

pub mod aggregator;
pub mod circuit_breaker;
pub mod clients;
pub mod database;
pub mod evaluator;
pub mod logging;
pub mod server;
pub mod utils;

use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;
use crate::validation::{validate_secs_range, Validatable};

/// Inclusive bounds for the stat window and breach duration, in seconds
const SECS_RANGE_MIN: u64 = 60;
const SECS_RANGE_MAX: u64 = 3600;

/// Root configuration for the event generator
///
/// Constructed once per process start by [`EventGeneratorConfig::from_yaml`]
/// and treated as read-only after [`validate_all`](Self::validate_all)
/// succeeds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventGeneratorConfig {
    /// Logging configuration
    pub logging: logging::LoggingConfig,

    /// Server configuration
    pub server: server::ServerConfig,

    /// Policy and app-metric databases
    pub db: database::DbConfig,

    /// Aggregator tunables
    pub aggregator: aggregator::AggregatorConfig,

    /// Evaluator tunables
    pub evaluator: evaluator::EvaluatorConfig,

    /// Scaling engine client
    #[serde(rename = "scalingEngine")]
    pub scaling_engine: clients::ScalingEngineConfig,

    /// Metric collector client
    #[serde(rename = "metricCollector")]
    pub metric_collector: clients::MetricCollectorConfig,

    /// Stat window applied to policies that do not specify one
    #[serde(rename = "defaultStatWindowSecs")]
    pub default_stat_window_secs: u64,

    /// Breach duration applied to policies that do not specify one
    #[serde(rename = "defaultBreachDurationSecs")]
    pub default_breach_duration_secs: u64,

    /// Circuit breaker policy for downstream calls
    #[serde(rename = "circuitBreaker")]
    pub circuit_breaker: circuit_breaker::CircuitBreakerConfig,
}

impl EventGeneratorConfig {
    /// Load a configuration from YAML bytes.
    ///
    /// Keys present in the document overwrite the pre-seeded defaults, absent
    /// keys keep them, unknown keys are ignored. The logging level is
    /// lower-cased and zero-valued circuit breaker fields are resolved to
    /// their defaults. No range validation happens here; call
    /// [`validate_all`](Self::validate_all) on the result.
    pub fn from_yaml(bytes: &[u8]) -> ConfigResult<Self> {
        // An empty document is a valid configuration: everything defaulted.
        let mut config = if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            Self::default()
        } else {
            serde_yaml::from_slice(bytes)?
        };

        config.logging.normalize();
        config.circuit_breaker.fill_defaults();
        Ok(config)
    }

    /// Validate every domain, returning the first violated invariant.
    ///
    /// The check order is fixed: databases, downstream client URLs,
    /// aggregator, evaluator, the root second ranges, then cluster
    /// membership. Operators read the resulting message verbatim from the
    /// startup log, so both order and wording are stable.
    pub fn validate_all(&self) -> ConfigResult<()> {
        self.db.validate()?;
        self.scaling_engine.validate()?;
        self.metric_collector.validate()?;
        self.aggregator.validate()?;
        self.evaluator.validate()?;
        validate_secs_range(
            self.default_breach_duration_secs,
            SECS_RANGE_MIN,
            SECS_RANGE_MAX,
            "defaultBreachDurationSecs",
            "event_generator",
        )?;
        validate_secs_range(
            self.default_stat_window_secs,
            SECS_RANGE_MIN,
            SECS_RANGE_MAX,
            "defaultStatWindowSecs",
            "event_generator",
        )?;
        self.server.validate()?;
        Ok(())
    }

    /// Generate a sample configuration file
    pub fn generate_sample() -> String {
        serde_yaml::to_string(&Self::default())
            .unwrap_or_else(|_| "# Failed to generate sample config".to_string())
    }
}
