use navkit_config::ConfigError;
use thiserror::Error;

/// Top-level error type for the navkit crate.
#[derive(Debug, Error)]
pub enum NavkitError {
  #[error("Configuration error: {0}")]
  Config(#[from] ConfigError),
}
