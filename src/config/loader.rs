//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::value_objects::InstallMode;
use crate::error::{DeployError, DeployResult};

use super::env_validator::EnvVarValidator;
use super::types::{ColorMode, Config};

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "rollout.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DeployResult<(Config, Vec<ConfigWarning>)> {
    let config_error = |message: String| DeployError::Config {
        file: Some(path.to_path_buf()),
        message,
    };
    let content = fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| config_error(e.to_string()))?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from an explicit file, the working directory, the user config, or defaults.
///
/// An explicit path must exist. The other locations are optional, but a file
/// that exists and fails to parse is an error rather than silently ignored.
pub fn discover(explicit: Option<&Path>) -> DeployResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        return load_with_warnings(path);
    }

    let candidates = [
        Some(PathBuf::from(PROJECT_CONFIG_FILE)),
        user_config_path(),
    ];
    for path in candidates.into_iter().flatten() {
        if path.is_file() {
            debug!(path = %path.display(), "loading configuration");
            return load_with_warnings(&path);
        }
    }

    debug!("no configuration file found, using defaults");
    Ok((Config::default(), Vec::new()))
}

/// `<config dir>/rollout/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("rollout").join("config.toml"))
}

/// Apply environment variable overrides (ROLLOUT_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

pub(crate) fn apply_overrides<F>(mut config: Config, var: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(app) = var("ROLLOUT_APP") {
        config.app.name = Some(app);
    }

    if let Some(host) = var("ROLLOUT_HOST") {
        config.target.host = Some(host);
    }

    if let Some(prefix) = var("ROLLOUT_PREFIX") {
        config.app.install_prefix = PathBuf::from(prefix);
    }

    if let Some(retain) = var("ROLLOUT_RETAIN") {
        config.deploy.retain = EnvVarValidator::new("ROLLOUT_RETAIN", &["a positive integer"])
            .parse(&retain, |s| s.trim().parse().ok(), config.deploy.retain);
    }

    if let Some(mode) = var("ROLLOUT_INSTALL_MODE") {
        config.deploy.install_mode = EnvVarValidator::new(
            "ROLLOUT_INSTALL_MODE",
            &[
                InstallMode::RemoveThenLink.as_str(),
                InstallMode::AtomicRename.as_str(),
            ],
        )
        .parse(&mode, |s| s.parse().ok(), config.deploy.install_mode);
    }

    // Any value except "0"/"false" disables color, like NO_COLOR.
    if let Some(val) = var("ROLLOUT_NO_COLOR") {
        if val != "0" && val.to_lowercase() != "false" {
            config.output.color = ColorMode::Never;
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "app",
        "name",
        "install_prefix",
        "extension",
        "current_link",
        "stage_user",
        "service_command",
        "target",
        "host",
        "deploy",
        "install_mode",
        "rollback_on_restart_failure",
        "retain",
        "output",
        "color",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = super::env_validator::levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}
