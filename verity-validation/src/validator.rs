// Policy-bound entry point for the policy-sensitive validators

use crate::errors::Result;
use crate::path::PathKind;
use std::path::Path;
use tracing::debug;
use verity_config::Policy;

/// Runs the validators whose limits come from a [`Policy`].
///
/// The free functions (`is_url`, `is_dns_name`, `is_file_path`) use
/// [`Policy::default`]; build a `Validator` to apply a loaded policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validator {
    policy: Policy,
}

impl Validator {
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }

    /// Policy overlaid with `VERITY_*` environment variables
    pub fn from_env() -> Result<Self> {
        let policy = Policy::from_env()?;
        debug!(?policy, "Validator configured from environment");
        Ok(Self::new(policy))
    }

    /// Policy read from a JSON, TOML or `.env` file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let policy = Policy::from_file(path)?;
        debug!(?policy, "Validator configured from file");
        Ok(Self::new(policy))
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn is_url(&self, s: &str) -> bool {
        crate::is_url_with_policy(s, &self.policy)
    }

    pub fn is_dns_name(&self, s: &str) -> bool {
        crate::is_dns_name_with_policy(s, &self.policy)
    }

    pub fn is_file_path(&self, s: &str) -> (bool, PathKind) {
        crate::is_file_path_with_policy(s, &self.policy)
    }
}
