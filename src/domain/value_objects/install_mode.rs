//! How the current pointer is switched to a new artifact

use serde::{Deserialize, Serialize};

/// Strategy for repointing the current symlink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InstallMode {
    /// Remove the link, then create it again.
    ///
    /// Readers of the link can observe a short window where it is absent.
    #[default]
    RemoveThenLink,
    /// Create the link under a temporary name and rename it over the old one.
    AtomicRename,
}

impl InstallMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstallMode::RemoveThenLink => "remove-then-link",
            InstallMode::AtomicRename => "atomic-rename",
        }
    }
}

impl std::fmt::Display for InstallMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for InstallMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "remove-then-link" | "remove_then_link" | "simple" => Ok(InstallMode::RemoveThenLink),
            "atomic-rename" | "atomic_rename" | "atomic" => Ok(InstallMode::AtomicRename),
            other => Err(format!(
                "unknown install mode '{}' (expected remove-then-link or atomic-rename)",
                other
            )),
        }
    }
}
