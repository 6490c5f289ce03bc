//! Clean command UI views

use rollout::application::{CleanReport, CleanupPlan};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;

/// Render the clean command header
pub fn render_clean_header(
    app: &str,
    host: &str,
    plan: &CleanupPlan,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Trash, format!("Clean {}", app));
    header.add("Host", host);
    header.add("Current", plan.current.display().to_string());
    header.add("Retain", plan.retain.to_string());
    header.render(supports_color, supports_unicode)
}

/// Render the clean result summary
pub fn render_clean_result(
    report: &CleanReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if report.is_empty() {
        let mut summary = ResultSummary::success("Nothing to Clean");
        summary.with_next_step("Older versions are within the retention window");
        return summary.render(supports_color, supports_unicode);
    }

    let mut summary = ResultSummary::success("Clean Complete");
    summary.add_stat(
        if report.removed.len() == 1 {
            "old version removed"
        } else {
            "old versions removed"
        },
        report.removed.len(),
    );
    summary.render(supports_color, supports_unicode)
}
