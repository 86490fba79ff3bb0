//! Configuration error types

use thiserror::Error;

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error reading a configuration file
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    /// Malformed document or type mismatch against the schema, surfaced
    /// verbatim from the deserializer
    #[error(transparent)]
    ParseError(#[from] serde_yaml::Error),

    /// A violated invariant in one configuration domain
    #[error("Configuration error in {domain}: {message}")]
    DomainError { domain: String, message: String },
}
