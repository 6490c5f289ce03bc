//! Versions command handler

use anyhow::Result;
use serde_json::json;

use crate::ui::json::emit_event;
use crate::ui::json::events::DataEvent;
use crate::ui::views::versions::render_versions;

use super::Session;

pub fn cmd_versions(session: &Session) -> Result<()> {
    let sink = session.sink();
    let manager = session.manager(&sink)?;

    let versions = manager.list_installed_versions()?;
    if session.ui.json {
        emit_event(&DataEvent::new(
            session.command,
            json!({ "versions": versions }),
        ))?;
    } else {
        print!("{}", render_versions(&versions, session.ui.color));
    }
    Ok(())
}
