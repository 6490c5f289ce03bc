//! Single-step command handlers: stage, install, restart, current, path

use std::path::Path;

use anyhow::Result;
use serde_json::json;

use rollout::application::StageOutcome;

use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DataEvent};
use crate::ui::primitives::icon::Icon;

use super::Session;

fn finish(session: &Session, data: serde_json::Value, line: String) -> Result<()> {
    if session.ui.json {
        emit_event(&DataEvent::new(session.command, data))?;
        emit_event(&CompleteEvent::success(session.command))?;
    } else {
        println!(
            "{} {}",
            Icon::Success.colored(session.ui.color, session.ui.unicode),
            line
        );
    }
    Ok(())
}

pub fn cmd_stage(session: &Session, artifact: &Path) -> Result<()> {
    let sink = session.sink();
    let manager = session.manager(&sink)?;

    let outcome = manager.stage(artifact)?;
    let copied = matches!(outcome, StageOutcome::Copied(_));
    let line = if copied {
        format!("Staged {}", outcome.path().display())
    } else {
        format!("{} already staged", outcome.path().display())
    };
    finish(
        session,
        json!({ "path": outcome.path(), "copied": copied }),
        line,
    )
}

pub fn cmd_install(session: &Session, artifact: &Path) -> Result<()> {
    let sink = session.sink();
    let manager = session.manager(&sink)?;

    let target = manager.install(artifact)?;
    let link = manager.layout().current_link();
    finish(
        session,
        json!({ "link": link, "target": target }),
        format!("{} -> {}", link.display(), target.display()),
    )
}

pub fn cmd_restart(session: &Session) -> Result<()> {
    let sink = session.sink();
    let manager = session.manager(&sink)?;

    manager.restart()?;
    finish(
        session,
        json!({ "restart": manager.settings().restart_command }),
        format!("Restarted {}", session.app_name()),
    )
}

pub fn cmd_current(session: &Session) -> Result<()> {
    let sink = session.sink();
    let manager = session.manager(&sink)?;

    let current = manager.current_filename()?;
    let version = current
        .file_name()
        .and_then(|n| manager.pattern().convert_to_version(&n.to_string_lossy()).map(str::to_string));

    if session.ui.json {
        emit_event(&DataEvent::new(
            session.command,
            json!({ "current": current, "version": version }),
        ))?;
    } else {
        println!("{}", current.display());
    }
    Ok(())
}

pub fn cmd_path(session: &Session, artifact: &Path) -> Result<()> {
    let sink = session.sink();
    let manager = session.manager(&sink)?;

    let path = manager.compute_deploy_path(artifact)?;
    if session.ui.json {
        emit_event(&DataEvent::new(session.command, json!({ "path": path })))?;
    } else {
        println!("{}", path.display());
    }
    Ok(())
}
