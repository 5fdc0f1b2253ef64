// Network address validators: DNS names, IP and MAC addresses, ports and
// dial strings.

use crate::errors::Rejection;
use std::net::IpAddr;
use thiserror::Error;
use tracing::trace;
use verity_config::Policy;
use verity_core::{PatternName, patterns, to_int};

/// Why a `host:port` string could not be split
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("missing port in address {0:?}")]
    MissingPort(String),

    #[error("too many colons in address {0:?}")]
    TooManyColons(String),

    #[error("missing ']' in address {0:?}")]
    MissingBracket(String),

    #[error("unexpected {found:?} in address {address:?}")]
    UnexpectedBracket { address: String, found: char },
}

/// Split `host:port` at the last colon.
///
/// IPv6 hosts must be bracketed (`[::1]:80`); the brackets are removed from
/// the returned host. Either half may be empty.
pub fn split_host_port(s: &str) -> Result<(&str, &str), AddressError> {
    let colon = s
        .rfind(':')
        .ok_or_else(|| AddressError::MissingPort(s.to_string()))?;

    let (host, host_start, host_end) = if s.starts_with('[') {
        let close = s
            .find(']')
            .ok_or_else(|| AddressError::MissingBracket(s.to_string()))?;
        if close + 1 == s.len() {
            return Err(AddressError::MissingPort(s.to_string()));
        }
        if close + 1 != colon {
            return Err(if s.as_bytes()[close + 1] == b':' {
                AddressError::TooManyColons(s.to_string())
            } else {
                AddressError::MissingPort(s.to_string())
            });
        }
        (&s[1..close], 1, close + 1)
    } else {
        let host = &s[..colon];
        if host.contains(':') {
            return Err(AddressError::TooManyColons(s.to_string()));
        }
        (host, 0, 0)
    };

    for (from, found) in [(host_start, '['), (host_end, ']')] {
        if s[from..].contains(found) {
            return Err(AddressError::UnexpectedBracket {
                address: s.to_string(),
                found,
            });
        }
    }

    Ok((host, &s[colon + 1..]))
}

/// Check if the string is a DNS name, using the default [`Policy`].
///
/// Labels are 1 to 63 letters, digits, `-` or `_`, start with a letter or
/// digit, and are joined by single dots.
pub fn is_dns_name(s: &str) -> bool {
    is_dns_name_with_policy(s, &Policy::default())
}

pub fn is_dns_name_with_policy(s: &str, policy: &Policy) -> bool {
    check_dns_name_with_policy(s, policy)
        .inspect_err(|rejection| trace!(%rejection, "DNS name rejected"))
        .is_ok()
}

pub fn check_dns_name(s: &str) -> Result<(), Rejection> {
    check_dns_name_with_policy(s, &Policy::default())
}

pub fn check_dns_name_with_policy(s: &str, policy: &Policy) -> Result<(), Rejection> {
    let significant = s.len() - s.matches('.').count();
    if significant > policy.max_dns_name_length {
        return Err(Rejection::DnsNameTooLong {
            length: significant,
            limit: policy.max_dns_name_length,
        });
    }
    if s.is_empty() || !patterns::is_match(PatternName::DnsName, s) {
        return Err(Rejection::expected("a DNS name"));
    }
    Ok(())
}

/// Check if the string is a `host:port` pair accepted by socket dialers
pub fn is_dial_string(s: &str) -> bool {
    check_dial_string(s)
        .inspect_err(|rejection| trace!(%rejection, "dial string rejected"))
        .is_ok()
}

/// Like [`is_dial_string`], but reports whether the split, the host or the
/// port was at fault
pub fn check_dial_string(s: &str) -> Result<(), Rejection> {
    let (host, port) = split_host_port(s)?;
    if host.is_empty() || !(is_dns_name(host) || is_ip(host)) {
        return Err(Rejection::Host(host.to_string()));
    }
    if !is_port(port) {
        return Err(Rejection::Port(port.to_string()));
    }
    Ok(())
}

/// Check if the string is a port number in `1..=65535`
pub fn is_port(s: &str) -> bool {
    let port = to_int(s);
    port.is_ok() && (1..=65535).contains(&port.value())
}

/// Check if the string is an IPv4 or IPv6 literal
pub fn is_ip(s: &str) -> bool {
    s.parse::<IpAddr>().is_ok()
}

/// Check if the string is an IP literal written with dots
pub fn is_ipv4(s: &str) -> bool {
    is_ip(s) && s.contains('.')
}

/// Check if the string is an IP literal written with colons
pub fn is_ipv6(s: &str) -> bool {
    is_ip(s) && s.contains(':')
}

/// Check if the string is a 48- or 64-bit MAC address.
///
/// Accepted forms: `01:23:45:67:89:ab`, `01-23-45-67-89-ab`,
/// `0123.4567.89ab` and their 8-octet variants.
pub fn is_mac(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() < 14 {
        return false;
    }

    let (separator, width) = match (bytes[2], bytes[4]) {
        (b':' | b'-', _) => (bytes[2], 2),
        (_, b'.') => (b'.', 4),
        _ => return false,
    };

    if (bytes.len() + 1) % (width + 1) != 0 {
        return false;
    }
    let octets = (bytes.len() + 1) / (width + 1) * width / 2;
    if octets != 6 && octets != 8 {
        return false;
    }

    bytes
        .split(|&b| b == separator)
        .all(|group| group.len() == width && group.iter().all(u8::is_ascii_hexdigit))
}
