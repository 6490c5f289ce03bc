//! SSH Host Implementation
//!
//! Implements the RemoteHost port for a remote machine via the `ssh` and
//! `scp` binaries. Escalated operations are wrapped in `sudo -n`, so the
//! login user needs passwordless sudo for the stage user and for root.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use super::shell_quote;
use crate::domain::ports::remote_host::{
    CommandOutput, HostError, HostResult, Privilege, RemoteHost, UploadOptions,
};

/// Exit status ssh uses for its own (connection) failures.
///
/// ssh also passes a remote command's status through unchanged, so a remote
/// command that itself exits 255 is indistinguishable from a lost connection
/// and is reported as `HostError::Connection`. Callers that restart services
/// treat both the same way.
const SSH_CONNECTION_FAILURE: i32 = 255;

/// Remote host reached over SSH
#[derive(Debug, Clone)]
pub struct SshHost {
    /// SSH destination (user@host or host)
    destination: String,
}

impl SshHost {
    /// Create a new SshHost for the given SSH destination
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
        }
    }

    /// Get the SSH destination
    pub fn destination(&self) -> &str {
        &self.destination
    }

    fn quote_path(path: &Path) -> String {
        shell_quote(&path.to_string_lossy())
    }

    /// Wrap a command so it runs with the requested privilege
    fn elevate(privilege: &Privilege, command: &str) -> String {
        match privilege {
            Privilege::Connect => command.to_string(),
            Privilege::User(user) => format!(
                "sudo -n -u {} sh -c {}",
                shell_quote(user),
                shell_quote(command)
            ),
            Privilege::Root => format!("sudo -n sh -c {}", shell_quote(command)),
        }
    }

    /// Run a command on the remote host, returning its output whatever the exit status
    fn run_command(&self, privilege: &Privilege, command: &str) -> HostResult<CommandOutput> {
        let remote = Self::elevate(privilege, command);
        trace!(destination = %self.destination, %privilege, command = %remote, "ssh");

        let output = Command::new("ssh")
            .arg(&self.destination)
            .arg(&remote)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| HostError::Connection(format!("failed to spawn ssh: {}", e)))?;

        self.classify(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    /// Turn ssh's own failure status into a connection error
    fn classify(&self, output: CommandOutput) -> HostResult<CommandOutput> {
        if output.code == Some(SSH_CONNECTION_FAILURE) {
            return Err(HostError::Connection(format!(
                "ssh {}: {}",
                self.destination,
                output.stderr.trim()
            )));
        }
        Ok(output)
    }

    /// Run a command and fail on a non-zero exit
    fn run_checked(&self, privilege: &Privilege, command: &str) -> HostResult<String> {
        let output = self.run_command(privilege, command)?;
        if !output.success() {
            return Err(HostError::CommandFailed {
                command: command.to_string(),
                code: output.code,
                stderr: output.stderr,
            });
        }
        Ok(output.stdout)
    }

    fn scp(&self, local: &Path, remote: &Path) -> HostResult<()> {
        let dest = format!("{}:{}", self.destination, remote.display());
        debug!(local = %local.display(), %dest, "scp");

        let output = Command::new("scp")
            .arg("-q")
            .arg("-p") // preserve timestamps
            .arg(local)
            .arg(&dest)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| HostError::Connection(format!("failed to spawn scp: {}", e)))?;

        if !output.status.success() {
            return Err(HostError::CommandFailed {
                command: format!("scp {} {}", local.display(), dest),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(())
    }

    /// Parse `sha256sum`/`shasum` output into the `sha256:<hex>` form
    fn parse_hash(output: &str) -> Option<String> {
        let hex = output.split_whitespace().next()?;
        if hex.len() == 64 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            Some(format!("sha256:{}", hex.to_lowercase()))
        } else {
            None
        }
    }
}

impl RemoteHost for SshHost {
    fn describe(&self) -> String {
        self.destination.clone()
    }

    fn upload(&self, local: &Path, options: &UploadOptions) -> HostResult<PathBuf> {
        if !local.is_file() {
            return Err(HostError::NotFound(local.to_path_buf()));
        }

        let temp = self
            .run_checked(&Privilege::Connect, "mktemp /tmp/rollout.XXXXXXXX")?
            .trim()
            .to_string();
        if temp.is_empty() {
            return Err(HostError::Connection(
                "mktemp returned no path on the remote host".to_string(),
            ));
        }
        let temp = PathBuf::from(temp);

        self.scp(local, &temp)?;

        if let Some(user) = &options.user {
            self.run_checked(
                &Privilege::Root,
                &format!("chown {} {}", shell_quote(user), Self::quote_path(&temp)),
            )?;
        }

        Ok(temp)
    }

    fn copy(&self, privilege: &Privilege, from: &Path, to: &Path) -> HostResult<()> {
        self.run_checked(
            privilege,
            &format!("cp -f {} {}", Self::quote_path(from), Self::quote_path(to)),
        )?;
        Ok(())
    }

    fn remove_file(&self, privilege: &Privilege, path: &Path) -> HostResult<()> {
        self.run_checked(privilege, &format!("rm -- {}", Self::quote_path(path)))?;
        Ok(())
    }

    fn symlink(&self, privilege: &Privilege, target: &Path, link: &Path) -> HostResult<()> {
        self.run_checked(
            privilege,
            &format!(
                "ln -s {} {}",
                Self::quote_path(target),
                Self::quote_path(link)
            ),
        )?;
        Ok(())
    }

    fn rename(&self, privilege: &Privilege, from: &Path, to: &Path) -> HostResult<()> {
        self.run_checked(
            privilege,
            &format!("mv -f {} {}", Self::quote_path(from), Self::quote_path(to)),
        )?;
        Ok(())
    }

    fn read_link(&self, privilege: &Privilege, path: &Path) -> HostResult<PathBuf> {
        let output = self.run_command(privilege, &format!("readlink {}", Self::quote_path(path)))?;
        let target = output.stdout.trim();
        if !output.success() || target.is_empty() {
            return Err(HostError::NotFound(path.to_path_buf()));
        }
        Ok(PathBuf::from(target))
    }

    fn exists(&self, privilege: &Privilege, path: &Path) -> HostResult<bool> {
        let p = Self::quote_path(path);
        let output = self.run_command(privilege, &format!("test -e {} || test -L {}", p, p))?;
        match output.code {
            Some(0) => Ok(true),
            Some(1) => Ok(false),
            code => Err(HostError::CommandFailed {
                command: format!("test -e {}", p),
                code,
                stderr: output.stderr,
            }),
        }
    }

    fn list_dir(&self, privilege: &Privilege, dir: &Path) -> HostResult<Vec<String>> {
        let out = self.run_checked(privilege, &format!("ls -1A {}", Self::quote_path(dir)))?;
        Ok(out
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn hash(&self, privilege: &Privilege, path: &Path) -> HostResult<Option<String>> {
        // sha256sum on Linux, shasum on macOS
        let p = Self::quote_path(path);
        let script = format!(
            "if [ -f {p} ]; then sha256sum {p} 2>/dev/null || shasum -a 256 {p}; else echo missing; fi"
        );
        let out = self.run_checked(privilege, &script)?;
        if out.trim() == "missing" {
            return Ok(None);
        }
        Self::parse_hash(&out).map(Some).ok_or_else(|| HostError::CommandFailed {
            command: format!("sha256sum {}", p),
            code: Some(0),
            stderr: format!("unexpected output: {}", out.trim()),
        })
    }

    fn shell(&self, privilege: &Privilege, command: &str) -> HostResult<CommandOutput> {
        self.run_command(privilege, command)
    }
}
