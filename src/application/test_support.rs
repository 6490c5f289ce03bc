//! Shared fixtures for application tests

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::ManagerSettings;
use crate::domain::ports::{
    CommandOutput, DeployEvent, DeployEventSink, HostError, HostResult, Privilege, RemoteHost,
    UploadOptions,
};
use crate::infrastructure::LocalHost;

/// Settings rooted at `<tmp>/myapp` with a restart command that succeeds
pub(crate) fn settings_in(dir: &TempDir) -> ManagerSettings {
    let mut settings = ManagerSettings::for_app(dir.path(), "myapp", "war").unwrap();
    settings.restart_command = "true".to_string();
    std::fs::create_dir_all(settings.layout.root()).unwrap();
    settings
}

/// Write a build output at `<tmp>/build/<name>`
pub(crate) fn build(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let build_dir = dir.path().join("build");
    std::fs::create_dir_all(&build_dir).unwrap();
    let path = build_dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Put installed artifacts straight into the root directory
pub(crate) fn install_files(settings: &ManagerSettings, names: &[&str]) {
    for name in names {
        std::fs::write(settings.layout.root().join(name), name).unwrap();
    }
}

/// Point the current link at an installed file
pub(crate) fn point_current(settings: &ManagerSettings, name: &str) {
    let link = settings.layout.current_link();
    let _ = std::fs::remove_file(link);
    std::os::unix::fs::symlink(settings.layout.root().join(name), link).unwrap();
}

/// LocalHost wrapper that records mutating calls and can fail removals
/// or the next few shell commands
#[derive(Default)]
pub(crate) struct RecordingHost {
    inner: LocalHost,
    pub calls: RefCell<Vec<String>>,
    pub fail_remove: HashSet<PathBuf>,
    /// Shell commands still to fail with a connection error
    pub failing_shells: Cell<usize>,
}

impl RecordingHost {
    pub fn failing_remove(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            fail_remove: paths.into_iter().collect(),
            ..Self::default()
        }
    }

    /// The next `count` shell commands fail as if the connection dropped
    pub fn failing_shell(count: usize) -> Self {
        Self {
            failing_shells: Cell::new(count),
            ..Self::default()
        }
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    pub fn calls_matching(&self, prefix: &str) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .cloned()
            .collect()
    }
}

impl RemoteHost for RecordingHost {
    fn describe(&self) -> String {
        "recording".to_string()
    }

    fn upload(&self, local: &Path, options: &UploadOptions) -> HostResult<PathBuf> {
        self.record(format!("upload {}", local.display()));
        self.inner.upload(local, options)
    }

    fn copy(&self, privilege: &Privilege, from: &Path, to: &Path) -> HostResult<()> {
        self.record(format!("copy {}", to.display()));
        self.inner.copy(privilege, from, to)
    }

    fn remove_file(&self, privilege: &Privilege, path: &Path) -> HostResult<()> {
        self.record(format!("remove {}", path.display()));
        if self.fail_remove.contains(path) {
            return Err(HostError::PermissionDenied(path.to_path_buf()));
        }
        self.inner.remove_file(privilege, path)
    }

    fn symlink(&self, privilege: &Privilege, target: &Path, link: &Path) -> HostResult<()> {
        self.record(format!("symlink {}", target.display()));
        self.inner.symlink(privilege, target, link)
    }

    fn rename(&self, privilege: &Privilege, from: &Path, to: &Path) -> HostResult<()> {
        self.record(format!("rename {}", to.display()));
        self.inner.rename(privilege, from, to)
    }

    fn read_link(&self, privilege: &Privilege, path: &Path) -> HostResult<PathBuf> {
        self.inner.read_link(privilege, path)
    }

    fn exists(&self, privilege: &Privilege, path: &Path) -> HostResult<bool> {
        self.inner.exists(privilege, path)
    }

    fn list_dir(&self, privilege: &Privilege, dir: &Path) -> HostResult<Vec<String>> {
        self.inner.list_dir(privilege, dir)
    }

    fn hash(&self, privilege: &Privilege, path: &Path) -> HostResult<Option<String>> {
        self.inner.hash(privilege, path)
    }

    fn shell(&self, privilege: &Privilege, command: &str) -> HostResult<CommandOutput> {
        self.record(format!("shell {}", command));
        let remaining = self.failing_shells.get();
        if remaining > 0 {
            self.failing_shells.set(remaining - 1);
            return Err(HostError::Connection(
                "ssh app01: connection reset by peer".to_string(),
            ));
        }
        self.inner.shell(privilege, command)
    }
}

/// Event sink that keeps every event
#[derive(Default)]
pub(crate) struct RecordingSink {
    pub events: RefCell<Vec<DeployEvent>>,
}

impl DeployEventSink for RecordingSink {
    fn on_event(&self, event: DeployEvent) {
        self.events.borrow_mut().push(event);
    }
}
