//! String conversions with documented zero-value fallback.
//!
//! Numeric and boolean conversions return a [`Conversion`]: the parsed value
//! on success, or the zero value of the target type together with a
//! [`ConversionError`] on failure. Reading [`Conversion::value`] alone cannot
//! distinguish `"0"` from `"zero"`; check [`Conversion::is_ok`] when that
//! matters.
//!
//! ```
//! use verity_core::{to_int64, to_snake_case};
//!
//! assert_eq!(to_int64("42").value(), 42);
//! assert_eq!(to_int64("forty-two").value(), 0);
//! assert!(!to_int64("forty-two").is_ok());
//!
//! assert_eq!(to_snake_case("parseHTTPRequest"), "parse_httprequest");
//! ```

use crate::classify::{simple_lowercase, simple_uppercase};
use crate::error::{ConversionError, Result};
use crate::patterns::{self, PatternName};
use serde::Serialize;
use std::fmt::Display;

/// Result of a fallible string conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion<T> {
    value: T,
    error: Option<ConversionError>,
}

impl<T: Default> Conversion<T> {
    fn parsed(value: T) -> Self {
        Self { value, error: None }
    }

    fn failed(error: ConversionError) -> Self {
        Self {
            value: T::default(),
            error: Some(error),
        }
    }
}

impl<T> Conversion<T> {
    /// The converted value, or the zero value when conversion failed
    pub fn value(&self) -> T
    where
        T: Copy,
    {
        self.value
    }

    /// Whether the input parsed
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Why the input did not parse
    pub fn error(&self) -> Option<&ConversionError> {
        self.error.as_ref()
    }

    /// Split into the fallback-carrying value and the failure reason
    pub fn into_parts(self) -> (T, Option<ConversionError>) {
        (self.value, self.error)
    }

    /// Drop the fallback value and keep only success or failure
    pub fn into_result(self) -> Result<T> {
        match self.error {
            None => Ok(self.value),
            Some(error) => Err(error),
        }
    }
}

/// Render any displayable value as a string.
pub fn to_string<T: Display + ?Sized>(value: &T) -> String {
    value.to_string()
}

/// Closed set of values [`to_json`] knows how to serialize.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonInput<'a> {
    /// Passed through verbatim, never re-encoded
    Text(&'a str),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    /// Any structured value, already lifted into a JSON tree
    Record(serde_json::Value),
}

impl<'a> JsonInput<'a> {
    /// Lift a serializable record into a [`JsonInput::Record`]
    pub fn record<T: Serialize>(value: &T) -> Result<Self> {
        serde_json::to_value(value)
            .map(JsonInput::Record)
            .map_err(|e| ConversionError::MalformedJson(e.to_string()))
    }
}

impl<'a> From<&'a str> for JsonInput<'a> {
    fn from(value: &'a str) -> Self {
        JsonInput::Text(value)
    }
}

impl From<i64> for JsonInput<'_> {
    fn from(value: i64) -> Self {
        JsonInput::Integer(value)
    }
}

impl From<i32> for JsonInput<'_> {
    fn from(value: i32) -> Self {
        JsonInput::Integer(value.into())
    }
}

impl From<f64> for JsonInput<'_> {
    fn from(value: f64) -> Self {
        JsonInput::Float(value)
    }
}

impl From<bool> for JsonInput<'_> {
    fn from(value: bool) -> Self {
        JsonInput::Boolean(value)
    }
}

impl From<serde_json::Value> for JsonInput<'_> {
    fn from(value: serde_json::Value) -> Self {
        JsonInput::Record(value)
    }
}

/// Serialize a value to JSON text. Text input is returned unchanged.
///
/// Non-finite floats have no JSON representation and fail with
/// [`ConversionError::MalformedJson`].
pub fn to_json<'a>(input: impl Into<JsonInput<'a>>) -> Result<String> {
    let encoded = match input.into() {
        JsonInput::Text(text) => return Ok(text.to_string()),
        JsonInput::Integer(n) => serde_json::to_string(&n),
        JsonInput::Float(f) if !f.is_finite() => {
            return Err(ConversionError::MalformedJson(format!(
                "unsupported float value: {}",
                f
            )));
        }
        JsonInput::Float(f) => serde_json::to_string(&f),
        JsonInput::Boolean(b) => serde_json::to_string(&b),
        JsonInput::Record(value) => serde_json::to_string(&value),
    };

    encoded.map_err(|e| ConversionError::MalformedJson(e.to_string()))
}

/// Parse a decimal float. Magnitudes too large for `f64` are rejected unless
/// the input spells out infinity.
pub fn to_float(s: &str) -> Conversion<f64> {
    match s.parse::<f64>() {
        Ok(v) if v.is_infinite() && !names_infinity(s) => {
            Conversion::failed(ConversionError::NotANumber(s.to_string()))
        }
        Ok(v) => Conversion::parsed(v),
        Err(_) => Conversion::failed(ConversionError::NotANumber(s.to_string())),
    }
}

fn names_infinity(s: &str) -> bool {
    let unsigned = s.trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Parse a platform-width signed decimal integer.
pub fn to_int(s: &str) -> Conversion<isize> {
    match s.parse::<isize>() {
        Ok(v) => Conversion::parsed(v),
        Err(_) => Conversion::failed(ConversionError::NotANumber(s.to_string())),
    }
}

/// Parse a 64-bit signed decimal integer.
pub fn to_int64(s: &str) -> Conversion<i64> {
    match s.parse::<i64>() {
        Ok(v) => Conversion::parsed(v),
        Err(_) => Conversion::failed(ConversionError::NotANumber(s.to_string())),
    }
}

/// Parse a boolean: `1 t T TRUE true True` or `0 f F FALSE false False`.
pub fn to_boolean(s: &str) -> Conversion<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Conversion::parsed(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Conversion::parsed(false),
        _ => Conversion::failed(ConversionError::NotABoolean(s.to_string())),
    }
}

/// Join every run of letters and digits, upper-casing the first character of
/// each run. Everything else acts as a separator and is dropped.
pub fn to_camel_case(s: &str) -> String {
    patterns::registry()
        .find_all(PatternName::Cameling, s)
        .map(capitalize)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => std::iter::once(title_char(first)).chain(chars).collect(),
        None => String::new(),
    }
}

// `ß` has no one-character upper case of its own; `ẞ` lower-cases back to
// it, which keeps snake case stable through a camel-case round trip.
fn title_char(c: char) -> char {
    match c {
        'ß' => 'ẞ',
        _ => simple_uppercase(c),
    }
}

// Upper case with a distinct lower-case form. Caseless capitals such as
// mathematical letters never start a new word.
fn starts_word(c: char) -> bool {
    c.is_uppercase() && simple_lowercase(c) != c
}

/// Lower-case the camel-cased form of `s`, inserting `_` wherever an
/// upper-case character directly follows a lower-case one.
///
/// Acronym runs stay together: `"parseHTTPRequest"` becomes
/// `"parse_httprequest"`. Case is mapped one character at a time, so the
/// output has exactly as many letters as the camel-cased input.
pub fn to_snake_case(s: &str) -> String {
    let camel: Vec<char> = to_camel_case(s).chars().collect();
    let mut out = String::with_capacity(camel.len() + camel.len() / 2);

    for (i, &c) in camel.iter().enumerate() {
        out.push(simple_lowercase(c));
        if let Some(&next) = camel.get(i + 1)
            && c.is_lowercase()
            && starts_word(next)
        {
            out.push('_');
        }
    }

    out
}

/// Borrow a string's bytes. No copy is made.
pub fn str_as_bytes(s: &str) -> &[u8] {
    s.as_bytes()
}

/// Borrow bytes as a string after checking they are UTF-8. No copy is made.
pub fn bytes_as_str(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| ConversionError::InvalidUtf8(e.to_string()))
}

/// Turn an owned string into its byte buffer, reusing the allocation.
pub fn string_into_bytes(s: String) -> Vec<u8> {
    s.into_bytes()
}

/// Turn an owned byte buffer into a string, reusing the allocation.
pub fn bytes_into_string(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| ConversionError::InvalidUtf8(e.utf8_error().to_string()))
}
