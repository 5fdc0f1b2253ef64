// Policy validation

use crate::{ConfigError, Result};

/// Trait for validating a loaded policy
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Field checks used by [`Validate`] implementations
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate that a number is within range
    pub fn in_range<T: PartialOrd + std::fmt::Display>(
        value: T,
        min: T,
        max: T,
        field: &str,
    ) -> Result<()> {
        if value < min || value > max {
            return Err(ConfigError::ValidationError(format!(
                "{} must be between {} and {}, got {}",
                field, min, max, value
            )));
        }
        Ok(())
    }

    /// Validate that the exclusive range `(lower, upper)` holds at least one
    /// value, i.e. `lower + 1 < upper`
    pub fn open_interval(
        lower: usize,
        upper: usize,
        lower_field: &str,
        upper_field: &str,
    ) -> Result<()> {
        if lower.saturating_add(1) >= upper {
            return Err(ConfigError::ValidationError(format!(
                "{} ({}) leaves no room below {} ({})",
                lower_field, lower, upper_field, upper
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range() {
        assert!(ConfigValidator::in_range(5, 1, 10, "field").is_ok());
        assert!(ConfigValidator::in_range(1, 1, 10, "field").is_ok());
        assert!(ConfigValidator::in_range(0, 1, 10, "field").is_err());
        assert!(ConfigValidator::in_range(11, 1, 10, "field").is_err());
    }

    #[test]
    fn test_open_interval() {
        assert!(ConfigValidator::open_interval(3, 2083, "min", "max").is_ok());
        assert!(ConfigValidator::open_interval(3, 5, "min", "max").is_ok());
        assert!(ConfigValidator::open_interval(3, 4, "min", "max").is_err());
        assert!(ConfigValidator::open_interval(3, 3, "min", "max").is_err());
        assert!(ConfigValidator::open_interval(usize::MAX, usize::MAX, "min", "max").is_err());

        let err = ConfigValidator::open_interval(10, 3, "min", "max").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid policy: min (10) leaves no room below max (3)"
        );
    }
}
