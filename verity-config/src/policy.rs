//! Tunable limits consulted by the validators.
//!
//! Defaults reproduce the stock behaviour. A policy can be overlaid from
//! `VERITY_*` environment variables or from a JSON, TOML or `.env` file;
//! keys missing from the source keep their default.

use crate::env::{ENV_PREFIX, EnvLoader};
use crate::loader::PolicyFile;
use crate::validation::{ConfigValidator, Validate};
use crate::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Longest URL accepted by `is_url` (exclusive).
pub const DEFAULT_MAX_URL_LENGTH: usize = 2083;
/// Shortest URL accepted by `is_url` (exclusive).
pub const DEFAULT_MIN_URL_LENGTH: usize = 3;
/// Windows long-path limit, after the drive prefix.
pub const DEFAULT_MAX_WINDOWS_PATH_LENGTH: usize = 32767;
/// Maximum DNS name length, not counting dots.
pub const DEFAULT_MAX_DNS_NAME_LENGTH: usize = 255;

/// Limits and switches applied by the validators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    pub max_url_length: usize,
    pub min_url_length: usize,
    pub max_windows_path_length: usize,
    pub max_dns_name_length: usize,
    /// Accept non-ASCII letters in URL host names
    pub allow_unicode_hosts: bool,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            max_url_length: DEFAULT_MAX_URL_LENGTH,
            min_url_length: DEFAULT_MIN_URL_LENGTH,
            max_windows_path_length: DEFAULT_MAX_WINDOWS_PATH_LENGTH,
            max_dns_name_length: DEFAULT_MAX_DNS_NAME_LENGTH,
            allow_unicode_hosts: true,
        }
    }
}

impl Policy {
    /// Defaults overlaid with any `VERITY_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::default().merge_env()
    }

    /// Defaults overlaid with a policy file; format follows the extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = PolicyFile::open(path)?;
        let entries = file.read()?;
        debug!(
            path = %file.path().display(),
            format = ?file.format(),
            keys = entries.len(),
            "Loaded policy file"
        );

        Self::default().overlay(Value::Object(entries))
    }

    /// Overlay `VERITY_*` environment variables onto this policy
    pub fn merge_env(self) -> Result<Self> {
        let vars = EnvLoader::default().load();
        debug!(count = vars.len(), "Merging policy from environment");
        self.merge_vars(vars)
    }

    /// Overlay string key/value pairs, as read from the environment
    pub fn merge_vars(self, vars: HashMap<String, String>) -> Result<Self> {
        let map: Map<String, Value> = vars
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect();
        self.overlay(Value::Object(map))
    }

    /// Overlay a JSON object onto this policy and validate the result.
    ///
    /// Keys are matched case-insensitively, with or without the `VERITY_`
    /// prefix. String values are decoded as JSON scalars first, so `"4096"`
    /// and `"false"` land as a number and a boolean.
    pub fn overlay(self, data: Value) -> Result<Self> {
        let Value::Object(entries) = data else {
            return Err(ConfigError::ParseError(
                "policy overlay must be an object".to_string(),
            ));
        };

        let mut base = serde_json::to_value(&self)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        let Some(fields) = base.as_object_mut() else {
            return Err(ConfigError::ParseError(
                "policy did not serialize to an object".to_string(),
            ));
        };

        let marker = format!("{}_", ENV_PREFIX.to_lowercase());
        for (key, value) in entries {
            let key = key.to_lowercase();
            let key = key.strip_prefix(&marker).unwrap_or(&key).to_string();
            if !fields.contains_key(&key) {
                debug!(key = %key, "Ignoring unknown policy key");
                continue;
            }
            fields.insert(key, coerce(value));
        }

        let policy: Policy =
            serde_json::from_value(base).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        policy.validate()?;
        Ok(policy)
    }
}

fn coerce(value: Value) -> Value {
    match value {
        Value::String(text) => serde_json::from_str(text.trim()).unwrap_or(Value::String(text)),
        other => other,
    }
}

impl Validate for Policy {
    fn validate(&self) -> Result<()> {
        ConfigValidator::in_range(self.max_url_length, 1, usize::MAX, "max_url_length")?;
        ConfigValidator::open_interval(
            self.min_url_length,
            self.max_url_length,
            "min_url_length",
            "max_url_length",
        )?;
        ConfigValidator::in_range(
            self.max_windows_path_length,
            1,
            usize::MAX,
            "max_windows_path_length",
        )?;
        ConfigValidator::in_range(self.max_dns_name_length, 1, usize::MAX, "max_dns_name_length")
    }
}
