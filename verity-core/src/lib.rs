//! Core building blocks for Verity
//!
//! - [`patterns`]: the process-wide registry of compiled text patterns
//! - [`classify`]: character-class predicates and whole/natural number tests
//! - [`convert`]: string to value conversions with zero-value fallback,
//!   case conversion and string/byte views
//!
//! # Examples
//!
//! ```
//! use verity_core::{is_alpha, is_utf_numeric, is_whole, to_boolean};
//!
//! assert!(is_alpha("abcXYZ"));
//! assert!(is_utf_numeric("Ⅸ¾"));
//! assert!(is_whole(-96.0));
//! assert!(to_boolean("T").value());
//! ```

pub mod classify;
pub mod convert;
pub mod error;
pub mod patterns;

pub use classify::*;
pub use convert::*;
pub use error::{ConversionError, Result};
pub use patterns::{PatternName, PatternRegistry};
