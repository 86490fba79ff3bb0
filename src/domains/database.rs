//! Database configuration for the policy and app-metric stores

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ConfigResult;
use crate::validation::{validate_required_string, Validatable};

/// Connection settings for one database
///
/// Only the URL is validated at this layer; the pool parameters are carried
/// opaquely for the connection layer that consumes them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Connection URL
    pub url: String,

    /// Maximum number of open connections in the pool
    pub max_open_connections: u32,

    /// Maximum number of idle connections kept in the pool
    pub max_idle_connections: u32,

    /// Maximum lifetime of a pooled connection
    #[serde(with = "crate::domains::utils::serde_duration")]
    pub connection_max_lifetime: Duration,
}

/// The two databases the event generator talks to
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    /// Scaling policy store
    pub policy_db: DatabaseConfig,

    /// Aggregated app metric store
    pub app_metrics_db: DatabaseConfig,
}

impl Validatable for DbConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_required_string(&self.policy_db.url, "policy_db.url", self.domain_name())?;
        validate_required_string(
            &self.app_metrics_db.url,
            "app_metrics_db.url",
            self.domain_name(),
        )?;
        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "db"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> DbConfig {
        DbConfig {
            policy_db: DatabaseConfig {
                url: "postgres://policy".to_string(),
                ..DatabaseConfig::default()
            },
            app_metrics_db: DatabaseConfig {
                url: "postgres://metrics".to_string(),
                ..DatabaseConfig::default()
            },
        }
    }

    #[test]
    fn test_db_config_validation() {
        assert!(populated().validate().is_ok());

        let mut config = populated();
        config.policy_db.url = String::new();
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error in db: policy_db.url cannot be empty"
        );

        // Policy DB is checked first, app-metric DB second
        config = populated();
        config.app_metrics_db.url = String::new();
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error in db: app_metrics_db.url cannot be empty"
        );
    }

    #[test]
    fn test_pool_params_are_opaque() {
        // Zero pool parameters never fail validation at this layer
        let config = populated();
        assert_eq!(config.policy_db.max_open_connections, 0);
        assert_eq!(config.policy_db.connection_max_lifetime, Duration::ZERO);
        assert!(config.validate().is_ok());
    }
}
