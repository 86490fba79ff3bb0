//! Downstream service client configuration
//!
//! Only the URL and TLS material of the scaling engine and metric collector
//! are carried here; the HTTP clients that use them live elsewhere.

use serde::{Deserialize, Serialize};

use super::server::TlsCerts;
use crate::error::ConfigResult;
use crate::validation::{validate_required_string, Validatable};

/// Scaling engine client configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScalingEngineConfig {
    /// Scaling engine base URL
    pub scaling_engine_url: String,

    /// Client TLS material
    pub tls: TlsCerts,
}

impl Validatable for ScalingEngineConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_required_string(
            &self.scaling_engine_url,
            "scaling_engine_url",
            self.domain_name(),
        )
    }

    fn domain_name(&self) -> &'static str {
        "scalingEngine"
    }
}

/// Metric collector client configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricCollectorConfig {
    /// Metric collector base URL
    pub metric_collector_url: String,

    /// Client TLS material
    pub tls: TlsCerts,
}

impl Validatable for MetricCollectorConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_required_string(
            &self.metric_collector_url,
            "metric_collector_url",
            self.domain_name(),
        )
    }

    fn domain_name(&self) -> &'static str {
        "metricCollector"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_url_validation() {
        let mut engine = ScalingEngineConfig {
            scaling_engine_url: "https://scaling-engine:8091".to_string(),
            tls: TlsCerts::default(),
        };
        assert!(engine.validate().is_ok());

        engine.scaling_engine_url.clear();
        let err = engine.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error in scalingEngine: scaling_engine_url cannot be empty"
        );

        let collector = MetricCollectorConfig::default();
        let err = collector.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error in metricCollector: metric_collector_url cannot be empty"
        );
    }
}
