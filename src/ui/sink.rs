//! Event sinks for the CLI
//!
//! `ConsoleEventSink` narrates deployment progress for a person;
//! `JsonEventSink` mirrors every event as an NDJSON line.

use std::cell::{Cell, RefCell};
use std::io::{self, Write};

use rollout::domain::ports::{DeployEvent, DeployEventSink, DeployStep};
use tracing::debug;

use crate::ui::context::UiContext;
use crate::ui::json::{events::StepEvent, write_typed_event};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub struct ConsoleEventSink {
    ui: UiContext,
    /// The cleanup list is printed once, even when previewed before a prompt
    plan_shown: Cell<bool>,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext) -> Self {
        Self {
            ui,
            plan_shown: Cell::new(false),
        }
    }

    pub fn render(&self, event: &DeployEvent) -> Option<String> {
        let (color, unicode) = (self.ui.color, self.ui.unicode);
        let line = match event {
            DeployEvent::Staging { source, root } => format!(
                "{} Staging {} into {}",
                Icon::Progress.colored(color, unicode),
                file_name(source),
                root.display()
            ),
            DeployEvent::AlreadyStaged { path } => format!(
                "  {} {} already staged, skipping copy",
                Icon::Arrow.colored(color, unicode),
                path.display()
            ),
            DeployEvent::Installing { target, link } => format!(
                "{} Installing {} into {}",
                Icon::Progress.colored(color, unicode),
                file_name(target),
                link.display()
            ),
            DeployEvent::Restarting { command } => format!(
                "{} Restarting service ({})",
                Icon::Progress.colored(color, unicode),
                ColoredText::dim(command.as_str()).render(color)
            ),
            DeployEvent::StepCompleted { step } => {
                let label = match step {
                    DeployStep::Stage => "staged",
                    DeployStep::Install => "installed",
                    DeployStep::Restart => "restarted",
                    DeployStep::Rollback => "rolled back",
                };
                format!("  {} {}", Icon::Success.colored(color, unicode), label)
            }
            DeployEvent::RollingBack { previous } => format!(
                "{} Restart failed, rolling back to {}",
                Icon::Warning.colored(color, unicode),
                previous.display()
            ),
            DeployEvent::CleanupPlanned { files } => {
                let mut out = ColoredText::warning("Removing old installed versions:")
                    .bold()
                    .render(color);
                for file in files {
                    out.push_str(&format!("\n   * {}", file.display()));
                }
                out
            }
            DeployEvent::NothingToClean => "No cleanable versions installed.".to_string(),
            DeployEvent::Removed { path } => {
                if self.ui.verbose == 0 {
                    return None;
                }
                format!(
                    "  {} removed {}",
                    Icon::Trash.colored(color, unicode),
                    path.display()
                )
            }
            DeployEvent::RemoveFailed { path, error } => format!(
                "  {} could not remove {}: {}",
                Icon::Error.colored(color, unicode),
                path.display(),
                error
            ),
        };
        Some(line)
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        if matches!(event, DeployEvent::CleanupPlanned { .. }) && self.plan_shown.replace(true) {
            return;
        }
        if let Some(line) = self.render(&event) {
            println!("{}", line);
        }
    }
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub struct JsonEventSink {
    command: &'static str,
    out: RefCell<Box<dyn Write>>,
    /// Set after the first failed write; a closed stdout is logged once
    write_failed: Cell<bool>,
}

impl JsonEventSink {
    pub fn new(command: &'static str) -> Self {
        Self::with_writer(command, Box::new(io::stdout()))
    }

    pub fn with_writer(command: &'static str, out: Box<dyn Write>) -> Self {
        Self {
            command,
            out: RefCell::new(out),
            write_failed: Cell::new(false),
        }
    }

    fn write(&self, event: &DeployEvent) -> io::Result<()> {
        let mut out = self.out.borrow_mut();
        write_typed_event(&mut *out, &StepEvent::from_deploy_event(self.command, event))?;
        out.flush()
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        // Progress lines are best effort; the final result reports the outcome
        if let Err(e) = self.write(&event) {
            if !self.write_failed.replace(true) {
                debug!(error = %e, "could not write JSON progress event");
            }
        }
    }
}

/// Console or JSON sink, chosen at runtime
pub enum CliEventSink {
    Console(ConsoleEventSink),
    Json(JsonEventSink),
}

impl CliEventSink {
    pub fn for_command(ui: UiContext, command: &'static str) -> Self {
        if ui.json {
            CliEventSink::Json(JsonEventSink::new(command))
        } else {
            CliEventSink::Console(ConsoleEventSink::new(ui))
        }
    }
}

impl DeployEventSink for CliEventSink {
    fn on_event(&self, event: DeployEvent) {
        match self {
            CliEventSink::Console(sink) => sink.on_event(event),
            CliEventSink::Json(sink) => sink.on_event(event),
        }
    }
}
