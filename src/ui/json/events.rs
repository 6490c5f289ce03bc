//! Shared JSON event types for consistent CLI output.
//!
//! Every line written in `--json` mode is one of these events, tagged by
//! `event` and the `command` that produced it.

use serde::Serialize;
use serde_json::{json, Value};

use rollout::domain::ports::DeployEvent;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
            host: None,
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }
}

/// Event emitted when a command finishes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
        }
    }
}

/// Event emitted when an error occurs.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub code: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            code,
            message: message.into(),
        }
    }
}

/// Wrapper for data events that includes command context.
#[derive(Debug, Clone, Serialize)]
pub struct DataEvent<'a, T: Serialize> {
    pub event: &'static str,
    pub command: &'a str,
    #[serde(flatten)]
    pub data: T,
}

impl<'a, T: Serialize> DataEvent<'a, T> {
    pub fn new(command: &'a str, data: T) -> Self {
        Self {
            event: "data",
            command,
            data,
        }
    }
}

/// Progress of a deployment step, mirrored from `DeployEvent`.
#[derive(Debug, Clone, Serialize)]
pub struct StepEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    #[serde(flatten)]
    pub detail: Value,
}

impl<'a> StepEvent<'a> {
    pub fn from_deploy_event(command: &'a str, event: &DeployEvent) -> Self {
        let (name, detail) = match event {
            DeployEvent::Staging { source, root } => (
                "staging",
                json!({ "source": source, "root": root }),
            ),
            DeployEvent::AlreadyStaged { path } => ("already_staged", json!({ "path": path })),
            DeployEvent::Installing { target, link } => (
                "installing",
                json!({ "target": target, "link": link }),
            ),
            DeployEvent::Restarting { command } => ("restarting", json!({ "restart": command })),
            DeployEvent::StepCompleted { step } => {
                ("step_completed", json!({ "step": step.as_str() }))
            }
            DeployEvent::RollingBack { previous } => {
                ("rolling_back", json!({ "previous": previous }))
            }
            DeployEvent::CleanupPlanned { files } => ("cleanup_planned", json!({ "files": files })),
            DeployEvent::NothingToClean => ("nothing_to_clean", json!({})),
            DeployEvent::Removed { path } => ("removed", json!({ "path": path })),
            DeployEvent::RemoveFailed { path, error } => (
                "remove_failed",
                json!({ "path": path, "error": error }),
            ),
        };
        Self {
            event: name,
            command,
            detail,
        }
    }
}
