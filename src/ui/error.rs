use rollout::DeployError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::json::events::ErrorEvent;

/// Operator-facing hint for a deployment error
fn fix_for(err: &DeployError) -> Option<&'static str> {
    match err {
        DeployError::BrokenPointer { .. } => {
            Some("Run `rollout install <artifact>` to point the current link at a staged version.")
        }
        DeployError::InvalidArtifactPath { .. } => {
            Some("Pass the path of a built artifact file, e.g. target/myapp-1.0.war.")
        }
        DeployError::InstallFailure { .. } => {
            Some("Check the current link now and reinstall a known-good version.")
        }
        DeployError::InvalidRetention { .. } => Some("Use --retain 1 or higher."),
        DeployError::Config { .. } => Some("Set it in rollout.toml, via ROLLOUT_* variables, or with a flag."),
        _ => None,
    }
}

pub fn format_deploy_error(err: &DeployError, supports_color: bool, supports_unicode: bool) -> String {
    let mut block = ErrorBlock::new(err.to_string());
    if let DeployError::CleanupPartialFailure { removed, failures } = err {
        for path in removed {
            block = block.with_detail(format!("removed {}", path.display()));
        }
        for failure in failures {
            block = block.with_detail(format!("kept {}", failure));
        }
    }
    if let Some(fix) = fix_for(err) {
        block = block.with_fix(fix);
    }
    block.render(supports_color, supports_unicode)
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    if let Some(deploy) = err.downcast_ref::<DeployError>() {
        return format_deploy_error(deploy, supports_color, supports_unicode);
    }

    ErrorBlock::new(format!("{:#}", err)).render(supports_color, supports_unicode)
}

pub fn print_error(err: &anyhow::Error, command: &str, json: bool) {
    if json {
        let code = err
            .downcast_ref::<DeployError>()
            .map(DeployError::code)
            .unwrap_or("error");
        let event = ErrorEvent::new(command, code, format!("{:#}", err));
        if let Err(e) = crate::ui::json::emit_event(&event) {
            tracing::debug!(error = %e, "could not write JSON error event");
        }
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    eprint!(
        "{}",
        format_error(err, caps.supports_color, caps.supports_unicode)
    );
}
