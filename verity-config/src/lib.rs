// Validation policy for Verity

pub mod env;
pub mod error;
pub mod loader;
pub mod policy;
pub mod validation;

pub use env::EnvLoader;
pub use error::{ConfigError, Result};
pub use loader::{PolicyEntries, PolicyFile, PolicyFormat};
pub use policy::Policy;
pub use validation::{ConfigValidator, Validate};
