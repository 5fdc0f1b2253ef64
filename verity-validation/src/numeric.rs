// Numeric string validators

use verity_core::{to_float, to_int64};

/// Check if the string is a signed 64-bit decimal integer. The empty string
/// is valid.
pub fn is_int(s: &str) -> bool {
    s.is_empty() || to_int64(s).is_ok()
}

/// Check if the string is a decimal float that fits in `f64`
pub fn is_float(s: &str) -> bool {
    to_float(s).is_ok()
}

/// Check if the string is a latitude in `[-90, 90]`
pub fn is_latitude(s: &str) -> bool {
    in_float_range(s, 90.0)
}

/// Check if the string is a longitude in `[-180, 180]`
pub fn is_longitude(s: &str) -> bool {
    in_float_range(s, 180.0)
}

fn in_float_range(s: &str, limit: f64) -> bool {
    let value = to_float(s);
    value.is_ok() && (-limit..=limit).contains(&value.value())
}
