// Free-form text validators

use crate::errors::Rejection;
use verity_core::{PatternName, patterns};

/// Check if the string looks like an email address: it contains `@`, but
/// neither starts nor ends with it. No further grammar is enforced.
pub fn is_email(s: &str) -> bool {
    s.contains('@') && !s.starts_with('@') && !s.ends_with('@')
}

/// Check if the string is a semantic version, optionally prefixed with `v`
pub fn is_semver(s: &str) -> bool {
    patterns::is_match(PatternName::Semver, s)
}

/// Check if the length of the string in bytes falls in `min..=max`
pub fn is_byte_length(s: &str, min: usize, max: usize) -> bool {
    check_byte_length(s, min, max).is_ok()
}

pub fn check_byte_length(s: &str, min: usize, max: usize) -> Result<(), Rejection> {
    let length = s.len();
    if (min..=max).contains(&length) {
        Ok(())
    } else {
        Err(Rejection::ByteLength { length, min, max })
    }
}

/// Check if the number of characters in the string falls in `min..=max`
pub fn is_string_length(s: &str, min: usize, max: usize) -> bool {
    check_string_length(s, min, max).is_ok()
}

pub fn check_string_length(s: &str, min: usize, max: usize) -> Result<(), Rejection> {
    let length = s.chars().count();
    if (min..=max).contains(&length) {
        Ok(())
    } else {
        Err(Rejection::CharLength { length, min, max })
    }
}

/// Check if `item` is one of `list`. An empty list contains nothing.
pub fn is_in_list<T: PartialEq>(list: &[T], item: &T) -> bool {
    list.contains(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_email() {
        let cases = [
            ("", false),
            ("foo@bar.com", true),
            ("x@x.x", true),
            ("foo@bar.com.au", true),
            ("foo+bar@bar.com", true),
            ("foo@bar.coffee", true),
            ("foo@bar.中文网", true),
            ("invalidemail@", false),
            ("invalid.com", false),
            ("@invalid.com", false),
            ("test|123@m端ller.com", true),
            ("hans@m端ller.com", true),
            ("hans.m端ller@test.com", true),
            ("NathAn.daVIeS@DomaIn.cOM", true),
            ("NATHAN.DAVIES@DOMAIN.CO.UK", true),
            (r#"very.(),:;<>[]".VERY."very@\ "very".unusual@strange.example.com"#, true),
        ];

        for (input, expected) in cases {
            assert_eq!(is_email(input), expected, "is_email({:?})", input);
        }
    }

    #[test]
    fn test_is_semver() {
        let cases = [
            ("v1.0.0", true),
            ("1.0.0", true),
            ("1.1.01", false),
            ("1.01.0", false),
            ("01.1.0", false),
            ("v1.1.01", false),
            ("v1.01.0", false),
            ("v01.1.0", false),
            ("1.0.0-alpha", true),
            ("1.0.0-alpha.1", true),
            ("1.0.0-0.3.7", true),
            ("1.0.0-0.03.7", false),
            ("1.0.0-00.3.7", false),
            ("1.0.0-x.7.z.92", true),
            ("1.0.0-alpha+001", true),
            ("1.0.0+20130313144700", true),
            ("1.0.0-beta+exp.sha.5114f85", true),
            ("1.0.0-beta+exp.sha.05114f85", true),
            ("1.0.0-+beta", false),
            ("1.0.0-b+-9+eta", false),
            ("v+1.8.0-b+-9+eta", false),
        ];

        for (input, expected) in cases {
            assert_eq!(is_semver(input), expected, "is_semver({:?})", input);
        }
    }

    #[test]
    fn test_is_byte_length() {
        assert!(!is_byte_length("abacaba", 100, 0));
        assert!(!is_byte_length("abacaba", 1, 3));
        assert!(is_byte_length("abacaba", 1, 7));
        assert!(is_byte_length("abacaba", 0, 8));
        assert!(!is_byte_length("\u{fff0}", 1, 1));

        assert_eq!(
            check_byte_length("あいうえお", 1, 5),
            Err(Rejection::ByteLength { length: 15, min: 1, max: 5 })
        );
        assert_eq!(
            check_string_length("あいうえおか", 1, 5),
            Err(Rejection::CharLength { length: 6, min: 1, max: 5 })
        );
    }

    #[test]
    fn test_is_string_length() {
        let cases = [
            ("123456", 0, 100, true),
            ("1239999", 0, 0, false),
            ("1239asdfasf99", 100, 200, false),
            ("1239999asdff29", 10, 30, true),
            ("あいうえお", 0, 5, true),
            ("あいうえおか", 0, 5, false),
            ("あいうえお", 0, 0, false),
            ("あいうえ", 5, 10, false),
        ];

        for (input, min, max, expected) in cases {
            assert_eq!(is_string_length(input, min, max), expected, "is_string_length({:?})", input);
        }
    }

    #[test]
    fn test_is_in_list() {
        assert!(is_in_list(&[1, 2, 3], &2));
        assert!(!is_in_list(&[1i64, 2, 3], &4));
        assert!(is_in_list(&["get", "post"], &"post"));
        assert!(!is_in_list::<String>(&[], &"x".to_string()));
    }
}
