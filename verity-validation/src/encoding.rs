// Encoded payload validators: base64, data URIs, JSON and hexadecimal

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::de::IgnoredAny;
use tracing::trace;
use verity_core::{PatternName, patterns};

// Standard padded alphabet. Unused low bits in the final quantum are
// ignored rather than rejected.
const STANDARD_PADDED: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// Check if the string is standard, padded base64. Line breaks are
/// ignored; the empty string is not base64.
pub fn is_base64(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    let compact: String = s.chars().filter(|&c| c != '\r' && c != '\n').collect();
    STANDARD_PADDED.decode(compact).is_ok()
}

/// Check if the string is a base64 data URI such as
/// `data:image/png;base64,iVBORw0KGgo=`
pub fn is_data_uri(s: &str) -> bool {
    let Some((header, payload)) = s.split_once(',') else {
        trace!("data URI has no ',' separator");
        return false;
    };
    if !patterns::is_match(PatternName::DataUriHeader, header) {
        trace!(header, "data URI header rejected");
        return false;
    }
    is_base64(payload)
}

/// Check if the string is any JSON document, scalars and `null` included
pub fn is_json(s: &str) -> bool {
    serde_json::from_str::<IgnoredAny>(s).is_ok()
}

/// Check if the string is a signed 64-bit integer in base 16, without a
/// `0x` prefix
pub fn is_hexadecimal(s: &str) -> bool {
    i64::from_str_radix(s, 16).is_ok()
}
