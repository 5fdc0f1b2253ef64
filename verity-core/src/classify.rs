// Character-class and numeric predicates
//
// Every string predicate here is vacuously true for the empty string.

use crate::patterns::{self, PatternName};

/// Only ASCII letters (`a-z`, `A-Z`).
pub fn is_alpha(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphabetic())
}

/// Only ASCII digits (`0-9`). Signs and decimal points are rejected.
pub fn is_numeric(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}

/// Only ASCII letters and digits.
pub fn is_alphanumeric(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Only Unicode letters (general category L).
///
/// Letter-like numerals such as `Ⅸ` belong to category Nl and are rejected.
pub fn is_utf_letter(s: &str) -> bool {
    patterns::is_match(PatternName::UtfLetter, s)
}

/// Only Unicode numbers of any kind (categories Nd, Nl and No), so
/// fractions like `¾`, Roman numerals and Hangzhou numerals count.
pub fn is_utf_numeric(s: &str) -> bool {
    patterns::is_match(PatternName::UtfNumber, s)
}

/// Only Unicode decimal digits (category Nd).
pub fn is_utf_digit(s: &str) -> bool {
    patterns::is_match(PatternName::UtfDigit, s)
}

/// Only Unicode letters and numbers.
pub fn is_utf_letter_numeric(s: &str) -> bool {
    patterns::is_match(PatternName::UtfLetterNumber, s)
}

/// Every codepoint is below 128.
pub fn is_ascii(s: &str) -> bool {
    s.is_ascii()
}

/// Every codepoint is visible ASCII or a space (`' '..='~'`).
pub fn is_printable_ascii(s: &str) -> bool {
    s.chars().all(|c| (' '..='~').contains(&c))
}

/// At least one codepoint needs a multi-byte encoding.
///
/// The empty string also reports `true`. This is a long-standing quirk kept
/// for compatibility; do not build on it.
pub fn is_multibyte(s: &str) -> bool {
    s.is_empty() || !s.is_ascii()
}

/// The string equals its lower-cased form.
///
/// Case is mapped one character at a time, so `"İ"` is compared against
/// `"i"` rather than `"i\u{307}"`.
pub fn is_lower_case(s: &str) -> bool {
    s.chars().all(|c| simple_lowercase(c) == c)
}

/// The string equals its upper-cased form.
///
/// Characters whose upper case spans several characters are left alone, so
/// `"ß"` counts as upper case.
pub fn is_upper_case(s: &str) -> bool {
    s.chars().all(|c| simple_uppercase(c) == c)
}

/// One-to-one lower-case mapping. `İ` is the only letter whose full mapping
/// expands; it maps to its base letter `i`.
pub(crate) fn simple_lowercase(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// One-to-one upper-case mapping; characters that would expand (`ß`, `ŉ`,
/// ligatures) map to themselves.
pub(crate) fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// The IEEE-754 remainder of `value / 1` is exactly zero.
///
/// NaN and the infinities are not whole.
pub fn is_whole(value: f64) -> bool {
    (value - value.round_ties_even()).abs() == 0.0
}

/// Whole and strictly positive.
pub fn is_natural(value: f64) -> bool {
    is_whole(value) && value > 0.0
}

/// `value` lies within `[left, right]`; the bounds may come in either order.
pub fn is_in_range(value: f64, left: f64, right: f64) -> bool {
    let (low, high) = if left > right {
        (right, left)
    } else {
        (left, right)
    };
    value >= low && value <= high
}
