//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::ManagerSettings;
use crate::domain::services::retention::DEFAULT_RETAIN;
use crate::domain::value_objects::{ArtifactPattern, DeployLayout, InstallMode};
use crate::error::{DeployError, DeployResult};

use super::loader::{self, ConfigWarning};

/// Application layout and service control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name; artifacts are `<name>-<version>.<extension>`
    #[serde(default)]
    pub name: Option<String>,

    /// Parent of the root directory (`<install_prefix>/<name>`)
    #[serde(default = "default_install_prefix")]
    pub install_prefix: PathBuf,

    #[serde(default = "default_extension")]
    pub extension: String,

    /// Name of the current link inside the root directory
    /// (defaults to `current.<extension>`)
    #[serde(default)]
    pub current_link: Option<String>,

    /// System user owning staged artifacts
    #[serde(default)]
    pub stage_user: Option<String>,

    /// Restart command; `{app}` expands to the name (defaults to `/etc/init.d/<name> restart`)
    #[serde(default)]
    pub service_command: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: None,
            install_prefix: default_install_prefix(),
            extension: default_extension(),
            current_link: None,
            stage_user: None,
            service_command: None,
        }
    }
}

fn default_install_prefix() -> PathBuf {
    PathBuf::from("/opt")
}

fn default_extension() -> String {
    "war".to_string()
}

/// Where deployments go
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TargetConfig {
    /// SSH destination (`user@host` or an ssh config alias).
    /// Unset or `localhost` deploys on this machine.
    #[serde(default)]
    pub host: Option<String>,
}

impl TargetConfig {
    /// Remote destination, if the target is not this machine
    pub fn remote_host(&self) -> Option<&str> {
        self.host
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty() && *h != "localhost" && *h != "local")
    }
}

/// Deployment behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployConfig {
    #[serde(default)]
    pub install_mode: InstallMode,

    #[serde(default)]
    pub rollback_on_restart_failure: bool,

    /// Versions kept by cleanup, current one included
    #[serde(default = "default_retain")]
    pub retain: usize,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            install_mode: InstallMode::default(),
            rollback_on_restart_failure: false,
            retain: default_retain(),
        }
    }
}

fn default_retain() -> usize {
    DEFAULT_RETAIN
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub target: TargetConfig,

    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load from an explicit file, `./rollout.toml`, the user config, or defaults
    pub fn discover(explicit: Option<&Path>) -> DeployResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit)
    }

    /// Apply environment variable overrides (ROLLOUT_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Deployment manager settings for the configured application.
    ///
    /// Fails when no application name is configured, or when `current_link`
    /// is not a plain file name distinct from every artifact name.
    pub fn manager_settings(&self) -> DeployResult<ManagerSettings> {
        let name = self
            .app
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| DeployError::Config {
                file: None,
                message: "app.name is not set (use --app or ROLLOUT_APP)".to_string(),
            })?;

        let mut settings =
            ManagerSettings::for_app(&self.app.install_prefix, name, &self.app.extension)?;
        if let Some(link) = &self.app.current_link {
            validate_current_link(link, &settings.pattern)?;
            settings.layout = DeployLayout::new(
                settings.layout.root().to_path_buf(),
                link,
            );
        }
        if let Some(command) = &self.app.service_command {
            settings.restart_command = command.replace("{app}", name);
        }
        settings.stage_user = self.app.stage_user.clone();
        settings.install_mode = self.deploy.install_mode;
        settings.rollback_on_restart_failure = self.deploy.rollback_on_restart_failure;
        Ok(settings)
    }
}

/// The current link lives directly in the root and must never be mistaken
/// for an installed version, or cleanup could remove it.
fn validate_current_link(link: &str, pattern: &ArtifactPattern) -> DeployResult<()> {
    let invalid = |message: String| DeployError::Config {
        file: None,
        message,
    };
    if link.is_empty() || link == "." || link == ".." || link.contains(['/', '\\']) {
        return Err(invalid(format!(
            "app.current_link must be a file name inside the application root, got '{}'",
            link
        )));
    }
    if pattern.matches(link) {
        return Err(invalid(format!(
            "app.current_link '{}' matches the artifact pattern {}",
            link,
            pattern.glob()
        )));
    }
    Ok(())
}
