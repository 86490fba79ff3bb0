//! Configuration validation traits and utilities

use std::time::Duration;

use crate::error::{ConfigError, ConfigResult};

/// Trait for validatable configuration
///
/// Implementations run their checks in a fixed order and return the first
/// violated invariant; startup logs key on the exact message, so check order
/// and message wording are part of the contract.
pub trait Validatable {
    /// Validate the configuration
    fn validate(&self) -> ConfigResult<()>;

    /// Get the domain name for error reporting
    fn domain_name(&self) -> &'static str;

    /// Helper to create a domain-specific validation error
    fn validation_error(&self, message: impl Into<String>) -> ConfigError {
        ConfigError::DomainError {
            domain: self.domain_name().to_string(),
            message: message.into(),
        }
    }
}

/// Validate a required string field
pub fn validate_required_string(value: &str, field_name: &str, domain: &str) -> ConfigResult<()> {
    if value.is_empty() {
        return Err(ConfigError::DomainError {
            domain: domain.to_string(),
            message: format!("{} cannot be empty", field_name),
        });
    }
    Ok(())
}

/// Validate a count that must be strictly positive
pub fn validate_positive_count(value: usize, field_name: &str, domain: &str) -> ConfigResult<()> {
    if value == 0 {
        return Err(ConfigError::DomainError {
            domain: domain.to_string(),
            message: format!("{} must be greater than 0", field_name),
        });
    }
    Ok(())
}

/// Validate an interval that must be strictly positive
pub fn validate_positive_duration(
    value: Duration,
    field_name: &str,
    domain: &str,
) -> ConfigResult<()> {
    if value.is_zero() {
        return Err(ConfigError::DomainError {
            domain: domain.to_string(),
            message: format!("{} must be greater than 0", field_name),
        });
    }
    Ok(())
}

/// Validate a seconds value against an inclusive range
pub fn validate_secs_range(
    value: u64,
    min: u64,
    max: u64,
    field_name: &str,
    domain: &str,
) -> ConfigResult<()> {
    if value < min || value > max {
        return Err(ConfigError::DomainError {
            domain: domain.to_string(),
            message: format!("{} should be between {} and {}", field_name, min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_string() {
        assert!(validate_required_string("postgres://db", "url", "db").is_ok());

        let err = validate_required_string("", "url", "db").unwrap_err();
        assert_eq!(err.to_string(), "Configuration error in db: url cannot be empty");
    }

    #[test]
    fn test_positive_count() {
        assert!(validate_positive_count(1, "count", "aggregator").is_ok());
        assert!(validate_positive_count(0, "count", "aggregator").is_err());
    }

    #[test]
    fn test_positive_duration() {
        assert!(validate_positive_duration(Duration::from_secs(1), "interval", "aggregator").is_ok());
        assert!(validate_positive_duration(Duration::ZERO, "interval", "aggregator").is_err());
    }

    #[test]
    fn test_secs_range() {
        assert!(validate_secs_range(59, 60, 3600, "window", "root").is_err());
        assert!(validate_secs_range(60, 60, 3600, "window", "root").is_ok());
        assert!(validate_secs_range(3600, 60, 3600, "window", "root").is_ok());
        assert!(validate_secs_range(3601, 60, 3600, "window", "root").is_err());
    }
}
