//! Process-wide registry of compiled text patterns.
//!
//! All patterns are compiled together the first time any of them is needed
//! (or eagerly through [`init`]) and are read-only afterwards. A pattern that
//! fails to compile is a defect in this file, so compilation panics instead
//! of surfacing an error to callers.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

const URL: &str = r"^((ftp|https?)://)?(\S+(:\S*)?@)?((([1-9][0-9]?|1[0-9][0-9]|2[01][0-9]|22[0-3])(\.(1?[0-9]{1,2}|2[0-4][0-9]|25[0-5])){2}(?:\.([0-9][0-9]?|1[0-9][0-9]|2[0-4][0-9]|25[0-4]))|(([a-zA-Z0-9]+([-.][a-zA-Z0-9]+)*)|((www\.)?))?(([a-z\x{00a1}-\x{ffff}0-9]+-?-?)*[a-z\x{00a1}-\x{ffff}0-9]+)(?:\.([a-z\x{00a1}-\x{ffff}]{2,}))?))(:([0-9]{1,5}))?((/|\?|#)[^\s]*)?$";

// Same grammar as URL with hosts restricted to ASCII, so IDN hosts only pass
// in their punycode form.
const URL_ASCII_HOST: &str = r"^((ftp|https?)://)?(\S+(:\S*)?@)?((([1-9][0-9]?|1[0-9][0-9]|2[01][0-9]|22[0-3])(\.(1?[0-9]{1,2}|2[0-4][0-9]|25[0-5])){2}(?:\.([0-9][0-9]?|1[0-9][0-9]|2[0-4][0-9]|25[0-4]))|(([a-zA-Z0-9]+([-.][a-zA-Z0-9]+)*)|((www\.)?))?(([a-z0-9]+-?-?)*[a-z0-9]+)(?:\.([a-z]{2,}))?))(:([0-9]{1,5}))?((/|\?|#)[^\s]*)?$";

const DNS_NAME: &str =
    r"^[a-zA-Z0-9][a-zA-Z0-9_-]{0,62}(?:\.[a-zA-Z0-9][a-zA-Z0-9_-]{0,62})*$";

const WINDOWS_PATH: &str = r#"^[a-zA-Z]:\\(?:[^\\/:*?"<>|\r\n]+\\)*[^\\/:*?"<>|\r\n]*$"#;

const UNIX_PATH: &str = r"^((?:/[a-zA-Z0-9.:]+(?:_[a-zA-Z0-9:.]+)*(?:-[:a-zA-Z0-9.]+)*)+/?)$";

const DATA_URI_HEADER: &str = r"^data:.+/(.+);base64$";

const SEMVER: &str = r"^v?(?:0|[1-9][0-9]*)\.(?:0|[1-9][0-9]*)\.(?:0|[1-9][0-9]*)(-(0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)(\.(0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*)?(\+[0-9a-zA-Z-]+(\.[0-9a-zA-Z-]+)*)?$";

const CREDIT_CARD: &str = r"^(?:4[0-9]{12}(?:[0-9]{3})?|5[1-5][0-9]{14}|6(?:011|5[0-9][0-9])[0-9]{12}|3[47][0-9]{13}|3(?:0[0-5]|[68][0-9])[0-9]{11}|(?:2131|1800|35[0-9]{3})[0-9]{11})$";

const CARD_VISA: &str = r"^4[0-9]{12}(?:[0-9]{3})?$";
const CARD_MASTERCARD: &str = r"^5[1-5][0-9]{14}$";
const CARD_AMEX: &str = r"^3[47][0-9]{13}$";
const CARD_DINERS: &str = r"^3(?:0[0-5]|[68][0-9])[0-9]{11}$";
const CARD_DISCOVER: &str = r"^6(?:011|5[0-9][0-9])[0-9]{12}$";
const CARD_JCB: &str = r"^(?:2131|1800|35[0-9]{3})[0-9]{11}$";

const UTF_LETTER: &str = r"^\p{L}*$";
const UTF_NUMBER: &str = r"^\p{N}*$";
const UTF_DIGIT: &str = r"^\p{Nd}*$";
const UTF_LETTER_NUMBER: &str = r"^[\p{L}\p{N}]*$";

const CAMELING: &str = r"[\p{L}\p{N}]+";

/// Names of every pattern held by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternName {
    Url,
    UrlAsciiHost,
    DnsName,
    WindowsPath,
    UnixPath,
    DataUriHeader,
    Semver,
    CreditCard,
    CardVisa,
    CardMasterCard,
    CardAmex,
    CardDiners,
    CardDiscover,
    CardJcb,
    UtfLetter,
    UtfNumber,
    UtfDigit,
    UtfLetterNumber,
    Cameling,
}

impl PatternName {
    /// Every pattern, in registry order.
    pub const ALL: [PatternName; 19] = [
        PatternName::Url,
        PatternName::UrlAsciiHost,
        PatternName::DnsName,
        PatternName::WindowsPath,
        PatternName::UnixPath,
        PatternName::DataUriHeader,
        PatternName::Semver,
        PatternName::CreditCard,
        PatternName::CardVisa,
        PatternName::CardMasterCard,
        PatternName::CardAmex,
        PatternName::CardDiners,
        PatternName::CardDiscover,
        PatternName::CardJcb,
        PatternName::UtfLetter,
        PatternName::UtfNumber,
        PatternName::UtfDigit,
        PatternName::UtfLetterNumber,
        PatternName::Cameling,
    ];

    /// Pattern source text.
    pub fn source(&self) -> &'static str {
        match self {
            PatternName::Url => URL,
            PatternName::UrlAsciiHost => URL_ASCII_HOST,
            PatternName::DnsName => DNS_NAME,
            PatternName::WindowsPath => WINDOWS_PATH,
            PatternName::UnixPath => UNIX_PATH,
            PatternName::DataUriHeader => DATA_URI_HEADER,
            PatternName::Semver => SEMVER,
            PatternName::CreditCard => CREDIT_CARD,
            PatternName::CardVisa => CARD_VISA,
            PatternName::CardMasterCard => CARD_MASTERCARD,
            PatternName::CardAmex => CARD_AMEX,
            PatternName::CardDiners => CARD_DINERS,
            PatternName::CardDiscover => CARD_DISCOVER,
            PatternName::CardJcb => CARD_JCB,
            PatternName::UtfLetter => UTF_LETTER,
            PatternName::UtfNumber => UTF_NUMBER,
            PatternName::UtfDigit => UTF_DIGIT,
            PatternName::UtfLetterNumber => UTF_LETTER_NUMBER,
            PatternName::Cameling => CAMELING,
        }
    }

    /// Stable identifier used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternName::Url => "url",
            PatternName::UrlAsciiHost => "url_ascii_host",
            PatternName::DnsName => "dns_name",
            PatternName::WindowsPath => "windows_path",
            PatternName::UnixPath => "unix_path",
            PatternName::DataUriHeader => "data_uri_header",
            PatternName::Semver => "semver",
            PatternName::CreditCard => "credit_card",
            PatternName::CardVisa => "card_visa",
            PatternName::CardMasterCard => "card_mastercard",
            PatternName::CardAmex => "card_amex",
            PatternName::CardDiners => "card_diners",
            PatternName::CardDiscover => "card_discover",
            PatternName::CardJcb => "card_jcb",
            PatternName::UtfLetter => "utf_letter",
            PatternName::UtfNumber => "utf_number",
            PatternName::UtfDigit => "utf_digit",
            PatternName::UtfLetterNumber => "utf_letter_number",
            PatternName::Cameling => "cameling",
        }
    }
}

impl fmt::Display for PatternName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable set of compiled patterns, indexed by [`PatternName`].
pub struct PatternRegistry {
    compiled: Vec<Regex>,
}

impl PatternRegistry {
    fn compile() -> Self {
        let compiled = PatternName::ALL
            .iter()
            .map(|name| {
                Regex::new(name.source())
                    .unwrap_or_else(|e| panic!("pattern `{}` failed to compile: {}", name, e))
            })
            .collect();

        tracing::debug!(count = PatternName::ALL.len(), "Compiled pattern registry");

        Self { compiled }
    }

    /// Get a compiled pattern
    pub fn get(&self, name: PatternName) -> &Regex {
        &self.compiled[name as usize]
    }

    /// Check whether `text` matches the named pattern
    pub fn is_match(&self, name: PatternName, text: &str) -> bool {
        self.get(name).is_match(text)
    }

    /// Iterate over every non-overlapping match of the named pattern
    pub fn find_all<'t>(&self, name: PatternName, text: &'t str) -> impl Iterator<Item = &'t str> {
        self.get(name).find_iter(text).map(|m| m.as_str())
    }

    /// Number of patterns held
    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }
}

static REGISTRY: Lazy<PatternRegistry> = Lazy::new(PatternRegistry::compile);

/// Compile every pattern now rather than on first use.
pub fn init() {
    Lazy::force(&REGISTRY);
}

/// The shared registry.
pub fn registry() -> &'static PatternRegistry {
    &REGISTRY
}

/// Shorthand for `registry().is_match(name, text)`.
pub fn is_match(name: PatternName, text: &str) -> bool {
    REGISTRY.is_match(name, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pattern_compiles() {
        init();
        assert_eq!(registry().len(), PatternName::ALL.len());
    }

    #[test]
    fn test_registry_order_matches_names() {
        for name in PatternName::ALL {
            assert_eq!(registry().get(name).as_str(), name.source());
        }
    }

    #[test]
    fn test_dns_name_pattern() {
        assert!(is_match(PatternName::DnsName, "localhost"));
        assert!(is_match(PatternName::DnsName, "a.b.c"));
        assert!(!is_match(PatternName::DnsName, "localhost._int"));
        assert!(!is_match(PatternName::DnsName, "local host"));
    }

    #[test]
    fn test_url_ascii_host_rejects_unicode_host() {
        assert!(is_match(PatternName::Url, "http://foobar.中文网/"));
        assert!(!is_match(PatternName::UrlAsciiHost, "http://foobar.中文网/"));
        assert!(is_match(
            PatternName::UrlAsciiHost,
            "http://www.xn--froschgrn-x9a.net/"
        ));
    }

    #[test]
    fn test_cameling_splits_on_separators() {
        let words: Vec<&str> = registry()
            .find_all(PatternName::Cameling, "foo_bar-baz 42")
            .collect();
        assert_eq!(words, vec!["foo", "bar", "baz", "42"]);
    }

    #[test]
    fn test_pattern_name_display() {
        assert_eq!(PatternName::DataUriHeader.to_string(), "data_uri_header");
    }
}
