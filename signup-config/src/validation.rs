// Settings validation

use crate::{ConfigError, Result};

/// Settings that can reject their own values after loading.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Reusable checks for setting values.
pub struct ConfigValidator;

impl ConfigValidator {
    pub fn not_empty(value: &str, field: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot be empty",
                field
            )));
        }
        Ok(())
    }

    pub fn at_most<T: PartialOrd + std::fmt::Display>(value: T, max: T, field: &str) -> Result<()> {
        if value > max {
            return Err(ConfigError::ValidationError(format!(
                "{} must be at most {}, got {}",
                field, max, value
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty() {
        assert!(ConfigValidator::not_empty("value", "field").is_ok());
        assert!(ConfigValidator::not_empty("  ", "field").is_err());
    }

    #[test]
    fn test_at_most() {
        assert!(ConfigValidator::at_most(10, 10, "field").is_ok());
        let err = ConfigValidator::at_most(11, 10, "delay").unwrap_err();
        assert_eq!(err.to_string(), "Invalid setting: delay must be at most 10, got 11");
    }
}
