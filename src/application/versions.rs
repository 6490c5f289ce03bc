//! Installed version listing

use tracing::debug;

use super::DeploymentManager;
use crate::domain::entities::{Artifact, InstalledVersion};
use crate::domain::ports::{DeployEventSink, Privilege, RemoteHost};
use crate::error::DeployResult;

impl<H, E> DeploymentManager<H, E>
where
    H: RemoteHost,
    E: DeployEventSink,
{
    /// Artifacts in the root directory, oldest first, with the active one marked.
    ///
    /// Built from a single directory listing. Fails with `BrokenPointer` when
    /// the current link cannot be resolved.
    pub fn list_installed_versions(&self) -> DeployResult<Vec<InstalledVersion>> {
        let current = self.current_filename()?;
        let current_name = current
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let root = self.layout().root();
        let mut names = self.host.list_dir(&Privilege::Connect, root)?;
        names.sort();
        debug!(root = %root.display(), entries = names.len(), "listed root directory");

        Ok(names
            .iter()
            .filter(|name| !self.layout().is_current_link(name))
            .filter_map(|name| Artifact::from_installed(root, name, self.pattern()))
            .map(|artifact| {
                let is_current = artifact.filename() == current_name;
                InstalledVersion::new(&artifact, is_current)
            })
            .collect())
    }
}
