//! Artifact entities

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::value_objects::ArtifactPattern;

/// A versioned deployable file inside the root directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    filename: String,
    version: String,
    path: PathBuf,
}

impl Artifact {
    /// Recognise an installed file; `None` if it does not follow the naming convention
    pub fn from_installed(root: &Path, filename: &str, pattern: &ArtifactPattern) -> Option<Self> {
        let version = pattern.convert_to_version(filename)?;
        Some(Self {
            filename: filename.to_string(),
            version: version.to_string(),
            path: root.join(filename),
        })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// One row of the installed-version listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstalledVersion {
    pub filename: String,
    pub version: String,
    pub is_current: bool,
}

impl InstalledVersion {
    pub fn new(artifact: &Artifact, is_current: bool) -> Self {
        Self {
            filename: artifact.filename().to_string(),
            version: artifact.version().to_string(),
            is_current,
        }
    }
}
