// Validation traits

use crate::ValidationErrors;

/// Trait for validatable types
pub trait Validate {
    /// Validate the value and return errors if any
    fn validate(&self) -> Result<(), ValidationErrors>;
}
