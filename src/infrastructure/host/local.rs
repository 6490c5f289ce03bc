//! Local Host Implementation
//!
//! Implements the RemoteHost port for the machine rollout runs on.
//! Operations run as the invoking user; requested privileges are only traced.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::trace;

use crate::domain::ports::remote_host::{
    CommandOutput, HostError, HostResult, Privilege, RemoteHost, UploadOptions,
};
use crate::domain::value_objects::ContentHash;

/// Local host implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalHost;

impl LocalHost {
    /// Create a new LocalHost instance
    pub fn new() -> Self {
        Self
    }
}

impl RemoteHost for LocalHost {
    fn describe(&self) -> String {
        "localhost".to_string()
    }

    fn upload(&self, local: &Path, options: &UploadOptions) -> HostResult<PathBuf> {
        trace!(local = %local.display(), user = ?options.user, "upload");
        if !local.is_file() {
            return Err(HostError::NotFound(local.to_path_buf()));
        }

        let temp = tempfile::Builder::new()
            .prefix("rollout-")
            .suffix(".upload")
            .tempfile()?;
        std::fs::copy(local, temp.path()).map_err(|e| HostError::from_io(e, local))?;
        temp.into_temp_path()
            .keep()
            .map_err(|e| HostError::Io(e.error))
    }

    fn copy(&self, privilege: &Privilege, from: &Path, to: &Path) -> HostResult<()> {
        trace!(%privilege, from = %from.display(), to = %to.display(), "copy");
        if !from.exists() {
            return Err(HostError::NotFound(from.to_path_buf()));
        }
        std::fs::copy(from, to).map_err(|e| HostError::from_io(e, to))?;
        Ok(())
    }

    fn remove_file(&self, privilege: &Privilege, path: &Path) -> HostResult<()> {
        trace!(%privilege, path = %path.display(), "remove");
        std::fs::remove_file(path).map_err(|e| HostError::from_io(e, path))
    }

    fn symlink(&self, privilege: &Privilege, target: &Path, link: &Path) -> HostResult<()> {
        trace!(%privilege, target = %target.display(), link = %link.display(), "symlink");
        #[cfg(unix)]
        let result = std::os::unix::fs::symlink(target, link);
        #[cfg(windows)]
        let result = std::os::windows::fs::symlink_file(target, link);
        result.map_err(|e| HostError::from_io(e, link))
    }

    fn rename(&self, privilege: &Privilege, from: &Path, to: &Path) -> HostResult<()> {
        trace!(%privilege, from = %from.display(), to = %to.display(), "rename");
        std::fs::rename(from, to).map_err(|e| HostError::from_io(e, from))
    }

    fn read_link(&self, privilege: &Privilege, path: &Path) -> HostResult<PathBuf> {
        trace!(%privilege, path = %path.display(), "read_link");
        std::fs::read_link(path).map_err(|e| HostError::from_io(e, path))
    }

    fn exists(&self, _privilege: &Privilege, path: &Path) -> HostResult<bool> {
        match std::fs::symlink_metadata(path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(HostError::from_io(e, path)),
        }
    }

    fn list_dir(&self, privilege: &Privilege, dir: &Path) -> HostResult<Vec<String>> {
        trace!(%privilege, dir = %dir.display(), "list_dir");
        let entries = std::fs::read_dir(dir).map_err(|e| HostError::from_io(e, dir))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    fn hash(&self, _privilege: &Privilege, path: &Path) -> HostResult<Option<String>> {
        if !path.is_file() {
            return Ok(None);
        }
        File::open(path)
            .and_then(ContentHash::from_reader)
            .map(|hash| Some(hash.to_string()))
            .map_err(|e| HostError::from_io(e, path))
    }

    fn shell(&self, privilege: &Privilege, command: &str) -> HostResult<CommandOutput> {
        trace!(%privilege, command, "shell");
        let output = Command::new("sh")
            .arg("-c")
            .arg(command)
            .output()
            .map_err(|e| HostError::Connection(format!("failed to spawn sh: {}", e)))?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
