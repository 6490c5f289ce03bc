//! Deploy command UI views

use std::path::Path;

use rollout::application::{CleanReport, DeployReport};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;

/// Render the deploy command header
pub fn render_deploy_header(
    app: &str,
    host: &str,
    artifact: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let icon = if host == "localhost" {
        Icon::Deploy
    } else {
        Icon::Remote
    };
    let mut header = CommandHeader::new(icon, format!("Deploy {}", app));
    header.add("Host", host);
    header.add("Artifact", artifact.display().to_string());
    header.render(supports_color, supports_unicode)
}

/// Render the deploy result summary, with the cleanup outcome when one ran
pub fn render_deploy_result(
    report: &DeployReport,
    cleaned: Option<&CleanReport>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = ResultSummary::success("Deploy Complete");
    summary.add_info(format!("current -> {}", report.artifact.display()));
    if !report.was_copied() {
        summary.add_info("artifact was already staged");
    }
    match &report.previous {
        Some(previous) if report.switched_version() => {
            summary.add_info(format!("replaced {}", previous.display()));
        }
        Some(_) => summary.add_info("same version reinstalled"),
        None => {}
    }
    if let Some(cleaned) = cleaned {
        summary.add_stat("old versions removed", cleaned.removed.len());
    }
    summary.render(supports_color, supports_unicode)
}
