//! Fuzz target for the string predicates.
//!
//! Predicates are total: any input yields a boolean without panicking.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use verity_validation::*;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    text: String,
    min: u16,
    max: u16,
}

fuzz_target!(|input: FuzzInput| {
    let s = input.text.as_str();

    let _ = is_dns_name(s);
    let _ = is_dial_string(s);
    let _ = is_ip(s);
    let _ = is_mac(s);
    let _ = is_port(s);
    let _ = is_file_path(s);
    let _ = is_data_uri(s);
    let _ = is_base64(s);
    let _ = is_json(s);
    let _ = is_hexadecimal(s);
    let _ = is_semver(s);
    let _ = is_email(s);
    let _ = is_latitude(s);
    let _ = is_longitude(s);
    let _ = is_int(s);
    let _ = is_float(s);
    let _ = is_byte_length(s, input.min.into(), input.max.into());
    let _ = is_string_length(s, input.min.into(), input.max.into());

    if is_ipv4(s) || is_ipv6(s) {
        assert!(is_ip(s));
    }

    if credit_card(s) {
        let digits: String = s.chars().filter(char::is_ascii_digit).collect();
        assert!(luhn_checksum_valid(&digits));
        assert!(card_issuer(s).is_some());
    }
});
