//! Manager Factory
//!
//! Resolves configuration from flags, environment and files, and creates the
//! deployment manager with its host and event sink wired up.
//! This is the dependency injection point for the application.

use tracing::debug;

use crate::application::DeploymentManager;
use crate::config::{ColorMode, Config, ConfigWarning};
use crate::domain::ports::{DeployEventSink, RemoteHost};
use crate::error::DeployResult;
use crate::infrastructure::{LocalHost, SshHost};

use super::cli::{Cli, ColorWhen};

/// Manager over whichever host the configuration selects
pub type ConfiguredManager<E> = DeploymentManager<Box<dyn RemoteHost>, E>;

/// Load configuration and layer environment and CLI overrides on top
pub fn resolve_config(cli: &Cli) -> DeployResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = Config::discover(cli.config.as_deref())?;
    Ok((apply_cli_overrides(config.with_env_overrides(), cli), warnings))
}

/// CLI flags take precedence over everything else
pub fn apply_cli_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(app) = &cli.app {
        config.app.name = Some(app.clone());
    }
    if let Some(host) = &cli.host {
        config.target.host = Some(host.clone());
    }
    if let Some(prefix) = &cli.prefix {
        config.app.install_prefix = prefix.clone();
    }
    if let Some(mode) = cli.command.install_mode() {
        config.deploy.install_mode = mode;
    }
    if let Some(color) = cli.color {
        config.output.color = match color {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        };
    }
    config
}

/// Local host unless the configuration names a remote destination
pub fn create_host(config: &Config) -> Box<dyn RemoteHost> {
    match config.target.remote_host() {
        Some(destination) => {
            debug!(destination, "using ssh host");
            Box::new(SshHost::new(destination))
        }
        None => {
            debug!("using local host");
            Box::new(LocalHost::new())
        }
    }
}

/// Create a deployment manager reporting to `events`
pub fn create_manager<E: DeployEventSink>(
    config: &Config,
    events: E,
) -> DeployResult<ConfiguredManager<E>> {
    let settings = config.manager_settings()?;
    Ok(DeploymentManager::with_events(
        create_host(config),
        settings,
        events,
    ))
}
