// Error types for string conversions

use thiserror::Error;

/// Reason a string could not be converted to the requested type.
///
/// Every conversion that fails also reports the zero value of its target
/// type (see [`Conversion`](crate::Conversion)); this error is what lets a
/// caller tell a literal `0` apart from unparseable input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Not a number: {0:?}")]
    NotANumber(String),

    #[error("Not a boolean: {0:?}")]
    NotABoolean(String),

    #[error("Malformed JSON: {0}")]
    MalformedJson(String),

    #[error("Invalid UTF-8: {0}")]
    InvalidUtf8(String),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
