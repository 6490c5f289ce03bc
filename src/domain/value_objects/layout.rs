//! Root directory layout
//!
//! Each application owns `<install-prefix>/<app>`, holding every installed
//! artifact plus the current pointer symlink.

use std::path::{Component, Path, PathBuf};

/// Canonical paths for one application's root directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployLayout {
    root: PathBuf,
    current_link: PathBuf,
}

impl DeployLayout {
    /// `root` is the application directory, `current_link_name` the pointer's
    /// file name inside it.
    pub fn new(root: impl Into<PathBuf>, current_link_name: &str) -> Self {
        let root = root.into();
        let current_link = root.join(current_link_name);
        Self { root, current_link }
    }

    /// Layout rooted at `<prefix>/<app>`
    pub fn for_app(prefix: &Path, app: &str, current_link_name: &str) -> Self {
        Self::new(prefix.join(app), current_link_name)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn current_link(&self) -> &Path {
        &self.current_link
    }

    /// Whether a directory entry of the root is the current link itself
    pub fn is_current_link(&self, name: &str) -> bool {
        self.current_link
            .file_name()
            .is_some_and(|link| link == name)
    }

    /// Where an artifact lands once staged: `root/basename(source)`.
    ///
    /// Returns `None` when no file name can be derived (empty path, `..`, `/`).
    pub fn deploy_path(&self, source: &Path) -> Option<PathBuf> {
        let name = match source.components().next_back()? {
            Component::Normal(name) => name,
            _ => return None,
        };
        Some(self.root.join(name))
    }

    /// Sibling name used while swapping the pointer atomically
    pub fn temp_link(&self) -> PathBuf {
        let name = self
            .current_link
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "current".to_string());
        self.root
            .join(format!(".{}.{}.tmp", name, std::process::id()))
    }

    /// Resolve a link target the way the filesystem would (relative to root)
    pub fn resolve_target(&self, target: &Path) -> PathBuf {
        if target.is_absolute() {
            target.to_path_buf()
        } else {
            self.root.join(target)
        }
    }
}
