//! Configuration loading entry points

use std::path::Path;

use crate::domains::EventGeneratorConfig;
use crate::error::ConfigResult;

/// Configuration loader
///
/// Byte and string loading run the load/default passes only; file loading is
/// the startup entry point and validates the result as well.
#[derive(Debug, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self
    }

    /// Load a configuration from raw YAML bytes without validating it
    pub fn from_bytes(&self, bytes: &[u8]) -> ConfigResult<EventGeneratorConfig> {
        EventGeneratorConfig::from_yaml(bytes)
    }

    /// Load a configuration from a YAML string without validating it
    pub fn from_str(&self, content: &str) -> ConfigResult<EventGeneratorConfig> {
        EventGeneratorConfig::from_yaml(content.as_bytes())
    }

    /// Load and validate a configuration file
    pub fn from_file(&self, path: impl AsRef<Path>) -> ConfigResult<EventGeneratorConfig> {
        let content = std::fs::read(path.as_ref())?;
        let config = self.from_bytes(&content)?;
        config.validate_all()?;
        log::debug!("loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }
}
