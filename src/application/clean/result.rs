//! Clean result types

use std::path::PathBuf;

/// Old versions selected for removal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupPlan {
    /// Artifact the current link resolves to
    pub current: PathBuf,
    /// Files to remove, oldest first
    pub files: Vec<PathBuf>,
    /// Retention count the plan was computed with
    pub retain: usize,
}

impl CleanupPlan {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Result of a cleanup with no failed deletions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    /// Files that were deleted
    pub removed: Vec<PathBuf>,
}

impl CleanReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_removed(&mut self, path: PathBuf) {
        self.removed.push(path);
    }

    pub fn is_empty(&self) -> bool {
        self.removed.is_empty()
    }
}
