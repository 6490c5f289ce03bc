//! Configuration module for rollout
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ROLLOUT_*)
//! 3. `--config` file, or `./rollout.toml`
//! 4. User config (`<config dir>/rollout/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{user_config_path, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{AppConfig, ColorMode, Config, DeployConfig, OutputConfig, TargetConfig};
