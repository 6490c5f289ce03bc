//! RemoteHost port - abstraction over the target host
//!
//! The deployment manager never touches a filesystem or a shell directly.
//! Every mutation, listing and command goes through this trait, tagged with
//! the privilege it needs. Transport and privilege escalation belong to the
//! implementation.

use std::path::{Path, PathBuf};

/// Result type for host operations
pub type HostResult<T> = Result<T, HostError>;

/// Host operation errors
#[derive(Debug)]
pub enum HostError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// Connection or process spawn failure
    Connection(String),
    /// A command ran but reported failure
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
    /// I/O error
    Io(std::io::Error),
}

impl HostError {
    /// Attach a path to an I/O error, keeping the not-found/permission distinction
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => HostError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => {
                HostError::PermissionDenied(path.to_path_buf())
            }
            _ => HostError::Io(err),
        }
    }
}

impl From<std::io::Error> for HostError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => HostError::NotFound(PathBuf::new()),
            std::io::ErrorKind::PermissionDenied => HostError::PermissionDenied(PathBuf::new()),
            _ => HostError::Io(err),
        }
    }
}

impl std::fmt::Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostError::NotFound(path) => write!(f, "not found: {}", path.display()),
            HostError::PermissionDenied(path) => {
                write!(f, "permission denied: {}", path.display())
            }
            HostError::Connection(msg) => write!(f, "connection error: {}", msg),
            HostError::CommandFailed {
                command,
                code,
                stderr,
            } => {
                match code {
                    Some(code) => write!(f, "'{}' exited with status {}", command, code)?,
                    None => write!(f, "'{}' was terminated by a signal", command)?,
                }
                let stderr = stderr.trim();
                if !stderr.is_empty() {
                    write!(f, ": {}", stderr)?;
                }
                Ok(())
            }
            HostError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HostError::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Identity an operation runs as on the host
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Privilege {
    /// The login identity (no escalation)
    Connect,
    /// A specific system user, e.g. the account owning the root directory
    User(String),
    /// Administrative user
    Root,
}

impl std::fmt::Display for Privilege {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Privilege::Connect => f.write_str("login user"),
            Privilege::User(name) => write!(f, "user '{}'", name),
            Privilege::Root => f.write_str("root"),
        }
    }
}

/// Options for copying a local file onto the host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadOptions {
    /// Owner of the uploaded temporary copy (None = login user)
    pub user: Option<String>,
}

/// Captured output of a shell command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Abstract target host
///
/// Implementations:
/// - `LocalHost` - the machine running rollout
/// - `SshHost` - a remote machine reached through `ssh`/`scp` with `sudo`
pub trait RemoteHost {
    /// Human-readable name of the host for operator output
    fn describe(&self) -> String;

    /// Copy a local file to a temporary location on the host, returning that location
    fn upload(&self, local: &Path, options: &UploadOptions) -> HostResult<PathBuf>;

    /// Copy a file that is already on the host
    fn copy(&self, privilege: &Privilege, from: &Path, to: &Path) -> HostResult<()>;

    /// Remove a file; a missing file is an error
    fn remove_file(&self, privilege: &Privilege, path: &Path) -> HostResult<()>;

    /// Create a symlink at `link` pointing to `target`; `link` must not exist
    fn symlink(&self, privilege: &Privilege, target: &Path, link: &Path) -> HostResult<()>;

    /// Rename `from` over `to`, replacing `to` atomically
    fn rename(&self, privilege: &Privilege, from: &Path, to: &Path) -> HostResult<()>;

    /// Read a symlink's target
    fn read_link(&self, privilege: &Privilege, path: &Path) -> HostResult<PathBuf>;

    /// Whether anything (including a dangling symlink) exists at `path`
    fn exists(&self, privilege: &Privilege, path: &Path) -> HostResult<bool>;

    /// File names directly inside `dir`, in no particular order
    fn list_dir(&self, privilege: &Privilege, dir: &Path) -> HostResult<Vec<String>>;

    /// Content hash (`sha256:<hex>`) of a file, `None` if it does not exist
    fn hash(&self, privilege: &Privilege, path: &Path) -> HostResult<Option<String>>;

    /// Run a shell command and capture its output; a non-zero exit is not an error here
    fn shell(&self, privilege: &Privilege, command: &str) -> HostResult<CommandOutput>;
}

impl<T: RemoteHost + ?Sized> RemoteHost for &T {
    fn describe(&self) -> String {
        (**self).describe()
    }
    fn upload(&self, local: &Path, options: &UploadOptions) -> HostResult<PathBuf> {
        (**self).upload(local, options)
    }
    fn copy(&self, privilege: &Privilege, from: &Path, to: &Path) -> HostResult<()> {
        (**self).copy(privilege, from, to)
    }
    fn remove_file(&self, privilege: &Privilege, path: &Path) -> HostResult<()> {
        (**self).remove_file(privilege, path)
    }
    fn symlink(&self, privilege: &Privilege, target: &Path, link: &Path) -> HostResult<()> {
        (**self).symlink(privilege, target, link)
    }
    fn rename(&self, privilege: &Privilege, from: &Path, to: &Path) -> HostResult<()> {
        (**self).rename(privilege, from, to)
    }
    fn read_link(&self, privilege: &Privilege, path: &Path) -> HostResult<PathBuf> {
        (**self).read_link(privilege, path)
    }
    fn exists(&self, privilege: &Privilege, path: &Path) -> HostResult<bool> {
        (**self).exists(privilege, path)
    }
    fn list_dir(&self, privilege: &Privilege, dir: &Path) -> HostResult<Vec<String>> {
        (**self).list_dir(privilege, dir)
    }
    fn hash(&self, privilege: &Privilege, path: &Path) -> HostResult<Option<String>> {
        (**self).hash(privilege, path)
    }
    fn shell(&self, privilege: &Privilege, command: &str) -> HostResult<CommandOutput> {
        (**self).shell(privilege, command)
    }
}

impl<T: RemoteHost + ?Sized> RemoteHost for Box<T> {
    fn describe(&self) -> String {
        (**self).describe()
    }
    fn upload(&self, local: &Path, options: &UploadOptions) -> HostResult<PathBuf> {
        (**self).upload(local, options)
    }
    fn copy(&self, privilege: &Privilege, from: &Path, to: &Path) -> HostResult<()> {
        (**self).copy(privilege, from, to)
    }
    fn remove_file(&self, privilege: &Privilege, path: &Path) -> HostResult<()> {
        (**self).remove_file(privilege, path)
    }
    fn symlink(&self, privilege: &Privilege, target: &Path, link: &Path) -> HostResult<()> {
        (**self).symlink(privilege, target, link)
    }
    fn rename(&self, privilege: &Privilege, from: &Path, to: &Path) -> HostResult<()> {
        (**self).rename(privilege, from, to)
    }
    fn read_link(&self, privilege: &Privilege, path: &Path) -> HostResult<PathBuf> {
        (**self).read_link(privilege, path)
    }
    fn exists(&self, privilege: &Privilege, path: &Path) -> HostResult<bool> {
        (**self).exists(privilege, path)
    }
    fn list_dir(&self, privilege: &Privilege, dir: &Path) -> HostResult<Vec<String>> {
        (**self).list_dir(privilege, dir)
    }
    fn hash(&self, privilege: &Privilege, path: &Path) -> HostResult<Option<String>> {
        (**self).hash(privilege, path)
    }
    fn shell(&self, privilege: &Privilege, command: &str) -> HostResult<CommandOutput> {
        (**self).shell(privilege, command)
    }
}
