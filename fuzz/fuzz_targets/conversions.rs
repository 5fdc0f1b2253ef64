//! Fuzz target for the conversion layer.
//!
//! Failed conversions must carry the zero value, and snake case must be a
//! fixed point of its own camel-case round trip.

#![no_main]

use libfuzzer_sys::fuzz_target;
use verity_core::*;

fuzz_target!(|data: &str| {
    let int = to_int64(data);
    if !int.is_ok() {
        assert_eq!(int.value(), 0);
    }

    let float = to_float(data);
    if !float.is_ok() {
        assert_eq!(float.value(), 0.0);
    }

    let boolean = to_boolean(data);
    if !boolean.is_ok() {
        assert!(!boolean.value());
    }

    let snake = to_snake_case(data);
    assert!(is_lower_case(&snake));

    let _ = to_camel_case(data);
    let _ = to_json(data);
    let _ = bytes_as_str(str_as_bytes(data));
});
