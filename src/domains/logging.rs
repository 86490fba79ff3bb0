//! Logging configuration

use serde::{Deserialize, Serialize};

/// Logging configuration
///
/// The level is carried as a plain string and lower-cased during load; the
/// logging subsystem that consumes it owns interpretation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_level")]
    pub level: String,
}

impl LoggingConfig {
    /// Lower-case the level regardless of the casing in the document
    pub(crate) fn normalize(&mut self) {
        self.level = self.level.to_lowercase();
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

// Default value functions
fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
    }

    #[test]
    fn test_normalize_lowercases_level() {
        let mut config = LoggingConfig {
            level: "INFO".to_string(),
        };
        config.normalize();
        assert_eq!(config.level, "info");

        let mut mixed = LoggingConfig {
            level: "DeBuG".to_string(),
        };
        mixed.normalize();
        assert_eq!(mixed.level, "debug");
    }
}
