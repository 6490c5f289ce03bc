//! Error types for rollout
//!
//! Library errors use `thiserror`; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::HostError;

/// Result type alias for rollout operations
pub type DeployResult<T> = Result<T, DeployError>;

/// A single file that could not be removed during retention cleanup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupFailure {
    pub path: PathBuf,
    pub message: String,
}

impl std::fmt::Display for CleanupFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// Main error type for deployment operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// The current pointer is missing or cannot be read
    #[error("expected {} to point to a file, but it didn't", .link.display())]
    BrokenPointer { link: PathBuf },

    /// No file name can be derived from the artifact path
    #[error("cannot derive an artifact file name from '{}'", .path.display())]
    InvalidArtifactPath { path: PathBuf },

    /// Copying the artifact into the root directory failed
    #[error("failed to stage {} into the root directory: {message}", .source_path.display())]
    StagingFailure {
        source_path: PathBuf,
        message: String,
    },

    /// Removing or creating the current pointer failed
    #[error("failed to repoint {}: {message} (the pointer may be left dangling)", .link.display())]
    InstallFailure { link: PathBuf, message: String },

    /// The service restart command exited non-zero or could not be run.
    ///
    /// `code` is `None` when the command was killed by a signal or the host
    /// never ran it; `stderr` then holds the host error. `rollback_error` is
    /// set when a rollback was attempted and did not bring the service back.
    #[error("{}", restart_message(.command, .code, .stderr, .rolled_back_to, .rollback_error))]
    RestartFailure {
        command: String,
        code: Option<i32>,
        stderr: String,
        rolled_back_to: Option<PathBuf>,
        rollback_error: Option<String>,
    },

    /// One or more deletions failed during retention cleanup
    #[error("{} of {} old versions could not be removed: {}", .failures.len(), .failures.len() + .removed.len(), join_failures(.failures))]
    CleanupPartialFailure {
        removed: Vec<PathBuf>,
        failures: Vec<CleanupFailure>,
    },

    /// Retention count below one would also remove the active version's window
    #[error("retention count must be at least 1, got {retain}")]
    InvalidRetention { retain: usize },

    /// Configuration could not be loaded or is incomplete
    #[error("invalid configuration{}: {message}", .file.as_ref().map(|f| format!(" in {}", f.display())).unwrap_or_default())]
    Config {
        file: Option<PathBuf>,
        message: String,
    },

    /// Host operation failed outside of a classified step
    #[error(transparent)]
    Host(#[from] HostError),
}

impl DeployError {
    /// Short machine-readable code used by the JSON output
    pub fn code(&self) -> &'static str {
        match self {
            DeployError::BrokenPointer { .. } => "broken_pointer",
            DeployError::InvalidArtifactPath { .. } => "invalid_artifact_path",
            DeployError::StagingFailure { .. } => "staging_failure",
            DeployError::InstallFailure { .. } => "install_failure",
            DeployError::RestartFailure { .. } => "restart_failure",
            DeployError::CleanupPartialFailure { .. } => "cleanup_partial_failure",
            DeployError::InvalidRetention { .. } => "invalid_retention",
            DeployError::Config { .. } => "config",
            DeployError::Host(_) => "host",
        }
    }
}

fn restart_message(
    command: &str,
    code: &Option<i32>,
    stderr: &str,
    rolled_back_to: &Option<PathBuf>,
    rollback_error: &Option<String>,
) -> String {
    let mut msg = match code {
        Some(code) => format!("restart command '{}' exited with status {}", command, code),
        None => format!("restart command '{}' did not complete", command),
    };
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        msg.push_str(&format!(": {}", stderr));
    }
    match (rolled_back_to, rollback_error) {
        (Some(previous), None) => msg.push_str(&format!(" (rolled back to {})", previous.display())),
        (Some(previous), Some(e)) => msg.push_str(&format!(
            " (rolled back to {}, but its restart also failed: {})",
            previous.display(),
            e
        )),
        (None, Some(e)) => msg.push_str(&format!(
            " (rollback failed: {}; new version left installed)",
            e
        )),
        (None, None) => msg.push_str(" (new version left installed)"),
    }
    msg
}

fn join_failures(failures: &[CleanupFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
