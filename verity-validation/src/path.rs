// File path classification and existence check

use crate::errors::{Rejection, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::trace;
use verity_config::Policy;
use verity_core::{PatternName, patterns};

/// Operating-system family a path was recognised as. The discriminants are
/// stable identifiers, not a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PathKind {
    Unknown = 0,
    Windows = 1,
    Unix = 2,
}

/// Length of the `c:` drive prefix of a Windows path. The separator after it
/// counts toward the long-path limit.
const DRIVE_PREFIX_LEN: usize = 2;

/// Check if the string is a Windows or Unix file path, using the default
/// [`Policy`].
///
/// Windows paths are tried first. A Windows path whose part after the drive
/// prefix exceeds the long-path limit reports `(false, PathKind::Windows)`.
pub fn is_file_path(s: &str) -> (bool, PathKind) {
    is_file_path_with_policy(s, &Policy::default())
}

pub fn is_file_path_with_policy(s: &str, policy: &Policy) -> (bool, PathKind) {
    match check_file_path_with_policy(s, policy) {
        Ok(kind) => (true, kind),
        Err(rejection @ Rejection::PathTooLong { .. }) => {
            trace!(%rejection, "Windows path rejected");
            (false, PathKind::Windows)
        }
        Err(_) => (false, PathKind::Unknown),
    }
}

/// The kind of path `s` is, or why it is not one
pub fn check_file_path(s: &str) -> std::result::Result<PathKind, Rejection> {
    check_file_path_with_policy(s, &Policy::default())
}

pub fn check_file_path_with_policy(s: &str, policy: &Policy) -> std::result::Result<PathKind, Rejection> {
    if patterns::is_match(PatternName::WindowsPath, s) {
        let length = s[DRIVE_PREFIX_LEN..].chars().count();
        if length > policy.max_windows_path_length {
            return Err(Rejection::PathTooLong {
                length,
                limit: policy.max_windows_path_length,
            });
        }
        return Ok(PathKind::Windows);
    }

    if patterns::is_match(PatternName::UnixPath, s) {
        return Ok(PathKind::Unix);
    }

    Err(Rejection::expected("a Windows or Unix file path"))
}

/// Whether a file or directory exists at `path`.
///
/// A missing entry is `Ok(false)`; any other failure to stat the path, such
/// as a permission error, is returned.
pub fn exists(path: impl AsRef<Path>) -> Result<bool> {
    match fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(false),
        Err(error) => Err(error.into()),
    }
}
