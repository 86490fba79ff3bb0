//! Startup configuration for the autoscaler event generator
//!
//! Turns a YAML configuration document into a defaulted, validated
//! [`EventGeneratorConfig`] that the rest of the service trusts without
//! further checks. Loading and validation are separate passes: absent keys
//! are defaulted during load, presence and range invariants are enforced by
//! [`EventGeneratorConfig::validate_all`], which reports the first violation
//! in a fixed order.

pub mod domains;
pub mod error;
pub mod loader;
pub mod validation;

// Re-export main types
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;

// Re-export domain configurations
pub use domains::{
    aggregator::AggregatorConfig,
    circuit_breaker::CircuitBreakerConfig,
    clients::{MetricCollectorConfig, ScalingEngineConfig},
    database::{DatabaseConfig, DbConfig},
    evaluator::EvaluatorConfig,
    logging::LoggingConfig,
    server::{ServerConfig, TlsCerts},
    EventGeneratorConfig,
};

// Re-export utilities
pub use domains::utils::serde_duration;
