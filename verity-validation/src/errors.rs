// Rejection reasons and field reports

use crate::network::AddressError;
use crate::uri::UriError;
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;
use verity_config::ConfigError;

/// Why a validator turned a value down.
///
/// Displayed without a subject so it reads after a field name:
/// `"listen has an invalid port \"99999\""`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("is required")]
    Missing,

    /// The value does not have the expected shape
    #[error("must be {0}")]
    Expected(Cow<'static, str>),

    #[error("is not a well-formed URI: {0}")]
    Uri(#[from] UriError),

    #[error("must be longer than {min} and shorter than {max} bytes, got {length}")]
    UrlLength { length: usize, min: usize, max: usize },

    #[error("has a host starting with '.'")]
    LeadingDot,

    #[error("is not a host:port pair: {0}")]
    Address(#[from] AddressError),

    #[error("has an invalid host {0:?}")]
    Host(String),

    #[error("has an invalid port {0:?}")]
    Port(String),

    #[error("has {length} characters besides dots, over the {limit} limit")]
    DnsNameTooLong { length: usize, limit: usize },

    #[error("has {length} characters after the drive prefix, over the {limit} limit")]
    PathTooLong { length: usize, limit: usize },

    #[error("matches no known card issuer")]
    UnknownIssuer,

    #[error("fails the Luhn checksum")]
    Checksum,

    #[error("must be between {min} and {max} bytes, got {length}")]
    ByteLength { length: usize, min: usize, max: usize },

    #[error("must be between {min} and {max} characters, got {length}")]
    CharLength { length: usize, min: usize, max: usize },
}

impl Rejection {
    /// Shorthand for [`Rejection::Expected`]
    pub fn expected(what: impl Into<Cow<'static, str>>) -> Self {
        Rejection::Expected(what.into())
    }

    /// Stable machine-readable name of the variant
    pub fn kind(&self) -> &'static str {
        match self {
            Rejection::Missing => "missing",
            Rejection::Expected(_) => "expected",
            Rejection::Uri(_) => "uri",
            Rejection::UrlLength { .. } => "url_length",
            Rejection::LeadingDot => "leading_dot",
            Rejection::Address(_) => "address",
            Rejection::Host(_) => "host",
            Rejection::Port(_) => "port",
            Rejection::DnsNameTooLong { .. } => "dns_name_too_long",
            Rejection::PathTooLong { .. } => "path_too_long",
            Rejection::UnknownIssuer => "unknown_issuer",
            Rejection::Checksum => "checksum",
            Rejection::ByteLength { .. } => "byte_length",
            Rejection::CharLength { .. } => "char_length",
        }
    }
}

/// A field that failed one rule
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: String,
    /// Name of the rule that failed, `"custom"` for ad-hoc checks
    pub constraint: String,
    pub rejection: Rejection,
    /// The offending input, absent for missing fields
    pub value: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, rejection: Rejection) -> Self {
        Self {
            field: field.into(),
            constraint: "custom".to_string(),
            rejection,
            value: None,
        }
    }

    /// A required field absent from the input
    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, Rejection::Missing).with_constraint("required")
    }

    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = constraint.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.rejection)
    }
}

impl std::error::Error for ValidationError {}

/// Every failure collected from one validation pass, in rule order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Failures reported against `field`
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.errors.iter().filter(move |e| e.field == field)
    }

    /// Report as `{"errors": [{field, constraint, reason, message, value}]}`
    pub fn to_json(&self) -> serde_json::Value {
        let errors: Vec<serde_json::Value> = self
            .errors
            .iter()
            .map(|e| {
                serde_json::json!({
                    "field": e.field,
                    "constraint": e.constraint,
                    "reason": e.rejection.kind(),
                    "message": e.to_string(),
                    "value": e.value,
                })
            })
            .collect();
        serde_json::json!({ "errors": errors })
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }
}

/// Failures outside the boolean predicates: filesystem access and policy
/// loading.
#[derive(Error, Debug)]
pub enum VerityError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, VerityError>;
