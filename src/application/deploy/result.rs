//! Deploy Result
//!
//! Outcome of a completed deployment run.

use std::path::PathBuf;

use crate::application::StageOutcome;

/// Result of a successful `run`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployReport {
    /// Installed artifact path inside the root directory
    pub artifact: PathBuf,
    /// Whether staging copied the artifact or found it in place
    pub staged: StageOutcome,
    /// Artifact the current link pointed at before the run, if any
    pub previous: Option<PathBuf>,
}

impl DeployReport {
    /// True when the run replaced a different active artifact
    pub fn switched_version(&self) -> bool {
        self.previous.as_deref() != Some(self.artifact.as_path())
    }

    pub fn was_copied(&self) -> bool {
        matches!(self.staged, StageOutcome::Copied(_))
    }
}
