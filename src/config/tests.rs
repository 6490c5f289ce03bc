//! Tests for the config module

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use super::loader::{apply_overrides, discover, load_with_warnings};
use super::types::*;
use crate::domain::value_objects::InstallMode;
use crate::error::DeployError;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.app.name, None);
    assert_eq!(config.app.install_prefix, PathBuf::from("/opt"));
    assert_eq!(config.app.extension, "war");
    assert_eq!(config.deploy.retain, 5);
    assert_eq!(config.deploy.install_mode, InstallMode::RemoveThenLink);
    assert!(!config.deploy.rollback_on_restart_failure);
    assert_eq!(config.output.color, ColorMode::Auto);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[app]
name = "brcm-accounts-api"
install_prefix = "/srv"
stage_user = "brcm"

[target]
host = "deploy@app1"

[deploy]
install_mode = "atomic-rename"
rollback_on_restart_failure = true
retain = 3

[output]
color = "never"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.app.name.as_deref(), Some("brcm-accounts-api"));
    assert_eq!(config.app.install_prefix, PathBuf::from("/srv"));
    assert_eq!(config.app.stage_user.as_deref(), Some("brcm"));
    assert_eq!(config.target.remote_host(), Some("deploy@app1"));
    assert_eq!(config.deploy.install_mode, InstallMode::AtomicRename);
    assert!(config.deploy.rollback_on_restart_failure);
    assert_eq!(config.deploy.retain, 3);
    assert_eq!(config.output.color, ColorMode::Never);
}

#[test]
fn test_localhost_target_is_not_remote() {
    for host in ["localhost", "local", " ", ""] {
        let target = TargetConfig {
            host: Some(host.to_string()),
        };
        assert_eq!(target.remote_host(), None, "host {:?}", host);
    }
    assert_eq!(TargetConfig::default().remote_host(), None);
}

#[test]
fn test_unknown_keys_are_warnings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rollout.toml");
    fs::write(&path, "[app]\nname = \"myapp\"\n\n[deploy]\nretian = 3\n").unwrap();

    let (config, warnings) = load_with_warnings(&path).unwrap();

    assert_eq!(config.app.name.as_deref(), Some("myapp"));
    assert_eq!(config.deploy.retain, 5);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "retian");
    assert_eq!(warnings[0].line, Some(5));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("retain"));
}

#[test]
fn test_invalid_toml_is_config_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rollout.toml");
    fs::write(&path, "[deploy]\nretain = \"five\"\n").unwrap();

    let err = load_with_warnings(&path).unwrap_err();

    assert!(matches!(err, DeployError::Config { file: Some(ref f), .. } if f == &path));
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    assert!(matches!(
        discover(Some(&missing)),
        Err(DeployError::Config { .. })
    ));
}

#[test]
fn test_env_overrides_win_over_file() {
    let mut config = Config::default();
    config.app.name = Some("from-file".to_string());
    config.deploy.retain = 9;

    let config = apply_overrides(
        config,
        env(&[
            ("ROLLOUT_APP", "myapp"),
            ("ROLLOUT_HOST", "app2"),
            ("ROLLOUT_PREFIX", "/srv/apps"),
            ("ROLLOUT_RETAIN", "2"),
            ("ROLLOUT_INSTALL_MODE", "atomic"),
            ("ROLLOUT_NO_COLOR", "1"),
        ]),
    );

    assert_eq!(config.app.name.as_deref(), Some("myapp"));
    assert_eq!(config.target.host.as_deref(), Some("app2"));
    assert_eq!(config.app.install_prefix, PathBuf::from("/srv/apps"));
    assert_eq!(config.deploy.retain, 2);
    assert_eq!(config.deploy.install_mode, InstallMode::AtomicRename);
    assert_eq!(config.output.color, ColorMode::Never);
}

#[test]
fn test_invalid_env_values_keep_configured_values() {
    let mut config = Config::default();
    config.deploy.retain = 4;

    let config = apply_overrides(
        config,
        env(&[
            ("ROLLOUT_RETAIN", "lots"),
            ("ROLLOUT_INSTALL_MODE", "teleport"),
            ("ROLLOUT_NO_COLOR", "0"),
        ]),
    );

    assert_eq!(config.deploy.retain, 4);
    assert_eq!(config.deploy.install_mode, InstallMode::RemoveThenLink);
    assert_eq!(config.output.color, ColorMode::Auto);
}

#[test]
fn test_manager_settings_require_app_name() {
    let err = Config::default().manager_settings().unwrap_err();

    assert!(err.to_string().contains("app.name"));
}

#[test]
fn test_manager_settings_defaults() {
    let mut config = Config::default();
    config.app.name = Some("brcm-accounts-api".to_string());

    let settings = config.manager_settings().unwrap();

    assert_eq!(settings.layout.root(), Path::new("/opt/brcm-accounts-api"));
    assert_eq!(
        settings.layout.current_link(),
        Path::new("/opt/brcm-accounts-api/current.war")
    );
    assert_eq!(settings.pattern.glob(), "brcm-accounts-api-*.war");
    assert_eq!(
        settings.restart_command,
        "/etc/init.d/brcm-accounts-api restart"
    );
    assert_eq!(settings.stage_user, None);
}

#[test]
fn test_manager_settings_overrides() {
    let toml = r#"
[app]
name = "myapp"
install_prefix = "/srv"
extension = "jar"
current_link = "live.jar"
stage_user = "svc"
service_command = "systemctl restart myapp"

[deploy]
install_mode = "atomic-rename"
rollback_on_restart_failure = true
"#;
    let config: Config = toml::from_str(toml).unwrap();

    let settings = config.manager_settings().unwrap();

    assert_eq!(settings.layout.current_link(), Path::new("/srv/myapp/live.jar"));
    assert_eq!(settings.pattern.glob(), "myapp-*.jar");
    assert_eq!(settings.restart_command, "systemctl restart myapp");
    assert_eq!(settings.stage_user.as_deref(), Some("svc"));
    assert_eq!(settings.install_mode, InstallMode::AtomicRename);
    assert!(settings.rollback_on_restart_failure);
}

#[test]
fn test_service_command_expands_app_name() {
    let mut config = Config::default();
    config.app.name = Some("billing".to_string());
    config.app.service_command = Some("systemctl restart {app}.service".to_string());

    let settings = config.manager_settings().unwrap();

    assert_eq!(settings.restart_command, "systemctl restart billing.service");
}

#[test]
fn test_current_link_matching_artifact_pattern_is_rejected() {
    let mut config = Config::default();
    config.app.name = Some("myapp".to_string());
    config.app.current_link = Some("myapp-current.war".to_string());

    let err = config.manager_settings().unwrap_err();

    assert!(err.to_string().contains("myapp-*.war"), "{}", err);
}

#[test]
fn test_current_link_outside_root_is_rejected() {
    for link in ["../current.war", "live/current.war", "", ".."] {
        let mut config = Config::default();
        config.app.name = Some("myapp".to_string());
        config.app.current_link = Some(link.to_string());

        assert!(
            matches!(config.manager_settings(), Err(DeployError::Config { .. })),
            "accepted {:?}",
            link
        );
    }
}
