// Verity - string format validation and typed conversion for Rust
//
// This library classifies strings against well-known lexical formats (URLs,
// DNS names, IP/MAC addresses, file paths, data URIs, credit cards, semver)
// and converts strings to typed values with zero-value fallbacks.

// Re-export core functionality
pub use verity_core::*;

// Re-export optional crates
#[cfg(feature = "config")]
pub use verity_config;

#[cfg(feature = "validation")]
pub use verity_validation;

#[cfg(feature = "validation")]
pub use verity_validation::{
    CardIssuer, PathKind, Rejection, Rule, Validate, ValidationBuilder, ValidationError,
    ValidationErrors, ValidationRules, Validator, VerityError, card_issuer, check_credit_card,
    check_dial_string, check_dns_name, check_file_path, check_url, credit_card, exists, is_base64,
    is_byte_length, is_data_uri, is_dial_string, is_dns_name, is_email, is_file_path, is_float,
    is_hexadecimal, is_in_list, is_int, is_ip, is_ipv4, is_ipv6, is_json, is_latitude,
    is_longitude, is_mac, is_port, is_request_uri, is_request_url, is_semver, is_string_length,
    is_url, luhn_checksum_valid,
};

#[cfg(feature = "config")]
pub use verity_config::Policy;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Conversion, ConversionError, JsonInput, is_alpha, is_alphanumeric, is_ascii,
        is_lower_case, is_numeric, is_upper_case, to_boolean, to_camel_case, to_float, to_int,
        to_int64, to_json, to_snake_case,
    };

    #[cfg(feature = "validation")]
    pub use crate::{
        PathKind, Rejection, Rule, Validate, ValidationBuilder, ValidationErrors, ValidationRules,
        Validator, credit_card, is_dns_name, is_email, is_file_path, is_ip, is_port, is_url,
    };

    #[cfg(feature = "config")]
    pub use crate::Policy;
}
