// Environment variable loading

use crate::{ConfigError, Result};
use std::collections::HashMap;
use std::env;

/// Prefix for every variable Verity reads.
pub const ENV_PREFIX: &str = "VERITY";

/// Environment variable loader
pub struct EnvLoader {
    prefix: String,
}

impl EnvLoader {
    /// Create a loader for `{prefix}_*` variables
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Load every prefixed variable, keyed by the lower-cased remainder
    /// (`VERITY_MAX_URL_LENGTH` becomes `max_url_length`).
    pub fn load(&self) -> HashMap<String, String> {
        self.filter(env::vars())
    }

    fn filter(&self, vars: impl IntoIterator<Item = (String, String)>) -> HashMap<String, String> {
        let marker = format!("{}_", self.prefix);

        vars.into_iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(&marker)
                    .filter(|rest| !rest.is_empty())
                    .map(|rest| (rest.to_lowercase(), value))
            })
            .collect()
    }

    /// Load a specific variable, e.g. `load_var("max_url_length")`
    pub fn load_var(&self, key: &str) -> Result<String> {
        let full_key = format!("{}_{}", self.prefix, key.to_uppercase());
        env::var(&full_key).map_err(ConfigError::EnvError)
    }

    /// Load with default value
    pub fn load_var_or(&self, key: &str, default: &str) -> String {
        self.load_var(key).unwrap_or_else(|_| default.to_string())
    }
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new(ENV_PREFIX)
    }
}
