// Field rules built on the validators

use crate::errors::Rejection;
use crate::{ValidationError, ValidationErrors};
use regex::Regex;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;
use verity_config::Policy;

type CheckFn = Arc<dyn Fn(&str) -> Result<(), Rejection> + Send + Sync>;
type ValidatorFn = Arc<dyn Fn(&str, &str) -> Result<(), ValidationError> + Send + Sync>;

/// A named check. Failures carry the validator's own [`Rejection`], so a
/// rejected URL reports the URI parse error and a rejected card number says
/// whether the issuer or the checksum was wrong.
#[derive(Clone)]
pub struct Rule {
    constraint: &'static str,
    check: CheckFn,
}

impl Rule {
    /// Wrap a boolean predicate. A `false` result is reported as
    /// [`Rejection::Expected`] with `expected` as the description, e.g.
    /// `"a DNS name"` yields `"host must be a DNS name"`.
    pub fn new<F>(
        constraint: &'static str,
        expected: impl Into<Cow<'static, str>>,
        predicate: F,
    ) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        let expected = expected.into();
        Self::from_check(constraint, move |value| {
            if predicate(value) {
                Ok(())
            } else {
                Err(Rejection::Expected(expected.clone()))
            }
        })
    }

    /// Wrap a check that explains its own failures
    pub fn from_check<F, T>(constraint: &'static str, check: F) -> Self
    where
        F: Fn(&str) -> Result<T, Rejection> + Send + Sync + 'static,
    {
        Self {
            constraint,
            check: Arc::new(move |value| check(value).map(|_| ())),
        }
    }

    pub fn constraint(&self) -> &str {
        self.constraint
    }

    /// Run the check against `value`, reporting failures against `field`
    pub fn check(&self, value: &str, field: &str) -> Result<(), ValidationError> {
        (self.check)(value).map_err(|rejection| {
            ValidationError::new(field, rejection)
                .with_constraint(self.constraint)
                .with_value(value)
        })
    }

    pub fn not_empty() -> Self {
        Self::new("notEmpty", "non-empty", |v| !v.trim().is_empty())
    }

    pub fn url() -> Self {
        Self::from_check("isUrl", crate::check_url)
    }

    /// URL rule evaluated under a custom policy
    pub fn url_with_policy(policy: Policy) -> Self {
        Self::from_check("isUrl", move |v| crate::check_url_with_policy(v, &policy))
    }

    pub fn request_url() -> Self {
        Self::from_check("isRequestUrl", crate::check_request_url)
    }

    pub fn request_uri() -> Self {
        Self::from_check("isRequestUri", crate::check_request_uri)
    }

    pub fn email() -> Self {
        Self::new("isEmail", "an email address", crate::is_email)
    }

    pub fn dns_name() -> Self {
        Self::from_check("isDnsName", crate::check_dns_name)
    }

    pub fn dial_string() -> Self {
        Self::from_check("isDialString", crate::check_dial_string)
    }

    pub fn ip() -> Self {
        Self::new("isIp", "an IP address", crate::is_ip)
    }

    pub fn ipv4() -> Self {
        Self::new("isIpv4", "an IPv4 address", crate::is_ipv4)
    }

    pub fn ipv6() -> Self {
        Self::new("isIpv6", "an IPv6 address", crate::is_ipv6)
    }

    pub fn port() -> Self {
        Self::new("isPort", "a port between 1 and 65535", crate::is_port)
    }

    pub fn mac() -> Self {
        Self::new("isMac", "a MAC address", crate::is_mac)
    }

    pub fn file_path() -> Self {
        Self::from_check("isFilePath", crate::check_file_path)
    }

    pub fn data_uri() -> Self {
        Self::new("isDataUri", "a base64 data URI", crate::is_data_uri)
    }

    pub fn base64() -> Self {
        Self::new("isBase64", "base64 encoded", crate::is_base64)
    }

    pub fn json() -> Self {
        Self::new("isJson", "valid JSON", crate::is_json)
    }

    pub fn hexadecimal() -> Self {
        Self::new("isHexadecimal", "a hexadecimal number", crate::is_hexadecimal)
    }

    pub fn int() -> Self {
        Self::new("isInt", "an integer", crate::is_int)
    }

    pub fn float() -> Self {
        Self::new("isFloat", "a number", crate::is_float)
    }

    pub fn latitude() -> Self {
        Self::new("isLatitude", "a latitude", crate::is_latitude)
    }

    pub fn longitude() -> Self {
        Self::new("isLongitude", "a longitude", crate::is_longitude)
    }

    pub fn semver() -> Self {
        Self::new("isSemver", "a semantic version", crate::is_semver)
    }

    pub fn credit_card() -> Self {
        Self::from_check("isCreditCard", crate::check_credit_card)
    }

    pub fn alpha() -> Self {
        Self::new("isAlpha", "ASCII letters only", verity_core::is_alpha)
    }

    pub fn alphanumeric() -> Self {
        Self::new(
            "isAlphanumeric",
            "ASCII letters and digits only",
            verity_core::is_alphanumeric,
        )
    }

    pub fn numeric() -> Self {
        Self::new("isNumeric", "ASCII digits only", verity_core::is_numeric)
    }

    pub fn ascii() -> Self {
        Self::new("isAscii", "ASCII only", verity_core::is_ascii)
    }

    pub fn printable_ascii() -> Self {
        Self::new(
            "isPrintableAscii",
            "printable ASCII only",
            verity_core::is_printable_ascii,
        )
    }

    pub fn byte_length(min: usize, max: usize) -> Self {
        Self::from_check("byteLength", move |v| crate::check_byte_length(v, min, max))
    }

    pub fn string_length(min: usize, max: usize) -> Self {
        Self::from_check("stringLength", move |v| crate::check_string_length(v, min, max))
    }

    pub fn one_of<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
        let expected = format!("one of: {}", allowed.join(", "));
        Self::new("isIn", expected, move |v| {
            crate::is_in_list(&allowed, &v.to_string())
        })
    }

    pub fn matches(pattern: Regex) -> Self {
        let expected = format!("a match for {}", pattern.as_str());
        Self::new("matches", expected, move |v| pattern.is_match(v))
    }
}

/// Builder for creating validation rules
#[derive(Clone)]
pub struct ValidationRules {
    validators: Vec<ValidatorFn>,
    field: String,
    required: bool,
}

impl ValidationRules {
    /// Create new validation rules for a field
    pub fn for_field(field: impl Into<String>) -> Self {
        Self {
            validators: Vec::new(),
            field: field.into(),
            required: false,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// Report the field when it is missing from the data
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Add a custom validator function
    #[allow(clippy::should_implement_trait)]
    pub fn add<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str, &str) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        self.validators.push(Arc::new(validator));
        self
    }

    /// Add a [`Rule`]
    pub fn rule(self, rule: Rule) -> Self {
        self.add(move |value, field| rule.check(value, field))
    }

    /// Validate a value against all rules
    pub fn validate(&self, value: &str) -> Result<(), Vec<ValidationError>> {
        let errors: Vec<ValidationError> = self
            .validators
            .iter()
            .filter_map(|validator| validator(value, &self.field).err())
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Validates a set of named fields and aggregates every failure
#[derive(Clone, Default)]
pub struct ValidationBuilder {
    rules: Vec<ValidationRules>,
}

impl ValidationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add rules for a field
    pub fn field(mut self, rules: ValidationRules) -> Self {
        self.rules.push(rules);
        self
    }

    /// Validate all fields. Missing fields are skipped unless marked
    /// required.
    pub fn validate(&self, data: &HashMap<String, String>) -> Result<(), ValidationErrors> {
        let mut all_errors = ValidationErrors::default();

        for rules in &self.rules {
            match data.get(&rules.field) {
                Some(value) => {
                    if let Err(errors) = rules.validate(value) {
                        all_errors.errors.extend(errors);
                    }
                }
                None if rules.required => all_errors.add(ValidationError::missing(&rules.field)),
                None => {}
            }
        }

        if all_errors.is_empty() {
            Ok(())
        } else {
            Err(all_errors)
        }
    }
}
