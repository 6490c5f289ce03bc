//! Clean command handler
//!
//! Removes installed versions beyond the retention window.

use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;

use rollout::domain::ports::{DeployEvent, DeployEventSink, RemoteHost};

use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, StartEvent};
use crate::ui::views::clean::{render_clean_header, render_clean_result};

use super::Session;

/// Execute the clean command
pub fn cmd_clean(session: &Session, retain: usize, yes: bool) -> Result<()> {
    let ui = session.ui;
    let sink = session.sink();
    let manager = session.manager(&sink)?;
    let host = manager.host().describe();

    let plan = manager.plan_cleanup(retain)?;

    if ui.json {
        emit_event(&StartEvent::new(session.command).with_host(host.as_str()))?;
    } else {
        print!(
            "{}",
            render_clean_header(session.app_name(), &host, &plan, ui.color, ui.unicode)
        );
    }

    if !plan.is_empty() && !yes && ui.can_prompt() {
        sink.on_event(DeployEvent::CleanupPlanned {
            files: plan.files.clone(),
        });
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Remove {} old version(s)?", plan.files.len()))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let report = manager.execute_cleanup(&plan)?;

    if ui.json {
        emit_event(&CompleteEvent::success(session.command))?;
    } else {
        print!("{}", render_clean_result(&report, ui.color, ui.unicode));
    }
    Ok(())
}
