//! Deploy command handler

use std::path::Path;

use anyhow::Result;
use serde_json::json;

use rollout::domain::ports::RemoteHost;

use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DataEvent, StartEvent};
use crate::ui::views::deploy::{render_deploy_header, render_deploy_result};

use super::Session;

/// Stage, install and restart `artifact`, then optionally clean old versions
pub fn cmd_deploy(session: &Session, artifact: &Path, clean_retain: Option<usize>) -> Result<()> {
    let ui = session.ui;
    let sink = session.sink();
    let manager = session.manager(&sink)?;
    let host = manager.host().describe();

    if ui.json {
        emit_event(&StartEvent::new(session.command).with_host(host.as_str()))?;
    } else {
        print!(
            "{}",
            render_deploy_header(session.app_name(), &host, artifact, ui.color, ui.unicode)
        );
    }

    let report = manager.run(artifact)?;
    let cleaned = match clean_retain {
        Some(retain) => Some(manager.clean_installed(retain)?),
        None => None,
    };

    if ui.json {
        emit_event(&DataEvent::new(
            session.command,
            json!({
                "artifact": report.artifact,
                "previous": report.previous,
                "copied": report.was_copied(),
                "removed": cleaned.as_ref().map(|c| &c.removed),
            }),
        ))?;
        emit_event(&CompleteEvent::success(session.command))?;
    } else {
        println!();
        print!(
            "{}",
            render_deploy_result(&report, cleaned.as_ref(), ui.color, ui.unicode)
        );
    }
    Ok(())
}
