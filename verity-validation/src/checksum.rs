//! Credit-card validation.
//!
//! A number is accepted when its digits match a known issuer's prefix and
//! length table and pass the Luhn checksum. Separators such as spaces and
//! dashes are ignored. This is a typo check, not fraud detection.

use crate::errors::Rejection;
use std::fmt;
use tracing::trace;
use verity_core::{PatternName, patterns, to_int64};

/// Card networks recognised by [`card_issuer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardIssuer {
    Visa,
    MasterCard,
    AmericanExpress,
    DinersClub,
    Discover,
    Jcb,
}

impl CardIssuer {
    const ALL: [(CardIssuer, PatternName); 6] = [
        (CardIssuer::Visa, PatternName::CardVisa),
        (CardIssuer::MasterCard, PatternName::CardMasterCard),
        (CardIssuer::AmericanExpress, PatternName::CardAmex),
        (CardIssuer::DinersClub, PatternName::CardDiners),
        (CardIssuer::Discover, PatternName::CardDiscover),
        (CardIssuer::Jcb, PatternName::CardJcb),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CardIssuer::Visa => "Visa",
            CardIssuer::MasterCard => "MasterCard",
            CardIssuer::AmericanExpress => "American Express",
            CardIssuer::DinersClub => "Diners Club",
            CardIssuer::Discover => "Discover",
            CardIssuer::Jcb => "JCB",
        }
    }
}

impl fmt::Display for CardIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn digits_only(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// Check if the string is a credit-card number from a known issuer with a
/// valid Luhn checksum
pub fn credit_card(s: &str) -> bool {
    check_credit_card(s)
        .inspect_err(|rejection| trace!(%rejection, "card number rejected"))
        .is_ok()
}

/// Issuer of an accepted card number, or why it was turned down
pub fn check_credit_card(s: &str) -> Result<CardIssuer, Rejection> {
    let digits = digits_only(s);
    if !patterns::is_match(PatternName::CreditCard, &digits) {
        return Err(Rejection::UnknownIssuer);
    }
    if !luhn_checksum_valid(&digits) {
        return Err(Rejection::Checksum);
    }
    issuer_of(&digits).ok_or(Rejection::UnknownIssuer)
}

/// Issuer whose prefix and length table matches the digits of `s`. The
/// checksum is not consulted.
pub fn card_issuer(s: &str) -> Option<CardIssuer> {
    issuer_of(&digits_only(s))
}

fn issuer_of(digits: &str) -> Option<CardIssuer> {
    CardIssuer::ALL
        .iter()
        .find(|(_, pattern)| patterns::is_match(*pattern, digits))
        .map(|(issuer, _)| *issuer)
}

/// Luhn checksum over a string of ASCII digits.
///
/// Walking from the rightmost digit, every second digit is doubled and 9 is
/// subtracted from doubled values of 10 or more; the total must be a
/// multiple of 10. Empty input and non-digits fail.
pub fn luhn_checksum_valid(digits: &str) -> bool {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let mut sum = 0i64;
    for (position, i) in (0..digits.len()).rev().enumerate() {
        let mut digit = to_int64(&digits[i..i + 1]).value();
        if position % 2 == 1 {
            digit *= 2;
            if digit >= 10 {
                digit -= 9;
            }
        }
        sum += digit;
    }

    sum % 10 == 0
}
