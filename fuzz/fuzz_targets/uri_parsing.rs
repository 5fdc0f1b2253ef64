//! Fuzz target for URI splitting and the URL validators.
//!
//! Every component must be a slice of the input, and the request-URL check
//! must imply the request-URI check.

#![no_main]

use libfuzzer_sys::fuzz_target;
use verity_validation::uri::{ParseMode, UriParts};
use verity_validation::{is_request_uri, is_request_url, is_url, split_host_port};

fuzz_target!(|data: &str| {
    for mode in [ParseMode::Reference, ParseMode::Request] {
        if let Ok(parts) = UriParts::parse(data, mode) {
            assert!(data.contains(parts.host));
            assert!(data.contains(parts.path));
            assert!(data.contains(parts.hostname()));
        }
    }

    let _ = is_url(data);
    if is_request_url(data) {
        assert!(is_request_uri(data));
    }

    if let Ok((host, port)) = split_host_port(data) {
        assert!(data.contains(host));
        assert!(data.ends_with(port));
    }
});
