//! Deployment Manager
//!
//! Owns the paths of one application's root directory and performs the
//! primitive deployment steps against a `RemoteHost`:
//! staging, repointing the current link, restarting and resolving the
//! active artifact. Orchestration (`run`), listing and cleanup live in
//! sibling modules as further `impl` blocks.

use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::domain::ports::{
    DeployEvent, DeployEventSink, DeployStep, HostError, NoopEventSink, Privilege, RemoteHost,
    UploadOptions,
};
use crate::domain::value_objects::{ArtifactPattern, ContentHash, DeployLayout, InstallMode};
use crate::error::{DeployError, DeployResult};

/// Static description of what is deployed where
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerSettings {
    pub layout: DeployLayout,
    pub pattern: ArtifactPattern,
    /// System user that owns staged artifacts (None = administrative user)
    pub stage_user: Option<String>,
    /// Shell command restarting the service
    pub restart_command: String,
    pub install_mode: InstallMode,
    /// Reinstate the previous artifact when the restart fails
    pub rollback_on_restart_failure: bool,
}

impl ManagerSettings {
    /// Settings for `<prefix>/<app>` with the conventional defaults
    pub fn for_app(prefix: &Path, app: &str, extension: &str) -> DeployResult<Self> {
        let pattern = ArtifactPattern::new(app, extension)?;
        let current = format!("current.{}", pattern.extension());
        Ok(Self {
            layout: DeployLayout::for_app(prefix, app, &current),
            restart_command: format!("/etc/init.d/{} restart", app),
            pattern,
            stage_user: None,
            install_mode: InstallMode::default(),
            rollback_on_restart_failure: false,
        })
    }
}

/// Result of staging an artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome {
    /// The artifact was copied to this path
    Copied(PathBuf),
    /// This path already held identical content
    AlreadyStaged(PathBuf),
}

impl StageOutcome {
    pub fn path(&self) -> &Path {
        match self {
            StageOutcome::Copied(p) | StageOutcome::AlreadyStaged(p) => p,
        }
    }
}

/// Deployment manager for one application on one host
pub struct DeploymentManager<H, E = NoopEventSink>
where
    H: RemoteHost,
    E: DeployEventSink,
{
    pub(crate) host: H,
    pub(crate) events: E,
    pub(crate) settings: ManagerSettings,
}

impl<H: RemoteHost> DeploymentManager<H, NoopEventSink> {
    /// Create a silent manager
    pub fn new(host: H, settings: ManagerSettings) -> Self {
        Self {
            host,
            events: NoopEventSink,
            settings,
        }
    }
}

impl<H, E> DeploymentManager<H, E>
where
    H: RemoteHost,
    E: DeployEventSink,
{
    /// Create a manager reporting progress to `events`
    pub fn with_events(host: H, settings: ManagerSettings, events: E) -> Self {
        Self {
            host,
            events,
            settings,
        }
    }

    pub fn settings(&self) -> &ManagerSettings {
        &self.settings
    }

    pub fn layout(&self) -> &DeployLayout {
        &self.settings.layout
    }

    pub fn pattern(&self) -> &ArtifactPattern {
        &self.settings.pattern
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Path the artifact occupies once staged: `root/basename(source)`
    pub fn compute_deploy_path(&self, source: &Path) -> DeployResult<PathBuf> {
        self.layout()
            .deploy_path(source)
            .ok_or_else(|| DeployError::InvalidArtifactPath {
                path: source.to_path_buf(),
            })
    }

    fn stage_privilege(&self) -> Privilege {
        match &self.settings.stage_user {
            Some(user) => Privilege::User(user.clone()),
            None => Privilege::Root,
        }
    }

    /// Copy the artifact into the root directory as the stage user.
    ///
    /// Skips the transfer when the destination already has the same content.
    pub fn stage(&self, source: &Path) -> DeployResult<StageOutcome> {
        let dest = self.compute_deploy_path(source)?;
        let staging_failure = |message: String| DeployError::StagingFailure {
            source_path: source.to_path_buf(),
            message,
        };

        info!(source = %source.display(), root = %self.layout().root().display(), "staging artifact");
        self.events.on_event(DeployEvent::Staging {
            source: source.to_path_buf(),
            root: self.layout().root().to_path_buf(),
        });

        let local_hash = File::open(source)
            .and_then(ContentHash::from_reader)
            .map_err(|e| staging_failure(format!("cannot read {}: {}", source.display(), e)))?;

        let privilege = self.stage_privilege();
        let existing = self
            .host
            .hash(&privilege, &dest)
            .map_err(|e| staging_failure(e.to_string()))?;
        if existing.is_some_and(|h| local_hash.matches_str(&h)) {
            debug!(dest = %dest.display(), "destination already has identical content");
            self.events
                .on_event(DeployEvent::AlreadyStaged { path: dest.clone() });
            return Ok(StageOutcome::AlreadyStaged(dest));
        }

        let upload_options = UploadOptions {
            user: self.settings.stage_user.clone(),
        };
        let temp = self
            .host
            .upload(source, &upload_options)
            .map_err(|e| staging_failure(e.to_string()))?;

        let copied = self.host.copy(&privilege, &temp, &dest);
        if let Err(e) = self.host.remove_file(&privilege, &temp) {
            warn!(temp = %temp.display(), error = %e, "failed to remove uploaded temporary copy");
        }
        copied.map_err(|e| staging_failure(e.to_string()))?;

        self.events.on_event(DeployEvent::StepCompleted {
            step: DeployStep::Stage,
        });
        Ok(StageOutcome::Copied(dest))
    }

    /// Point the current link at the staged copy of `source`
    pub fn install(&self, source: &Path) -> DeployResult<PathBuf> {
        let target = self.compute_deploy_path(source)?;
        self.point_current_at(&target)?;
        self.events.on_event(DeployEvent::StepCompleted {
            step: DeployStep::Install,
        });
        Ok(target)
    }

    /// Repoint the current link using the configured install mode
    pub(crate) fn point_current_at(&self, target: &Path) -> DeployResult<()> {
        let link = self.layout().current_link();
        let install_failure = |e: HostError| DeployError::InstallFailure {
            link: link.to_path_buf(),
            message: e.to_string(),
        };

        info!(target = %target.display(), link = %link.display(), mode = %self.settings.install_mode, "installing");
        self.events.on_event(DeployEvent::Installing {
            target: target.to_path_buf(),
            link: link.to_path_buf(),
        });

        let privilege = Privilege::Root;
        if !self
            .host
            .exists(&privilege, target)
            .map_err(install_failure)?
        {
            return Err(DeployError::InstallFailure {
                link: link.to_path_buf(),
                message: format!("{} has not been staged", target.display()),
            });
        }

        match self.settings.install_mode {
            InstallMode::RemoveThenLink => {
                match self.host.remove_file(&privilege, link) {
                    Ok(()) | Err(HostError::NotFound(_)) => {}
                    Err(e) => {
                        // Some hosts cannot tell "missing" apart from other failures.
                        if self.host.exists(&privilege, link).map_err(install_failure)? {
                            return Err(install_failure(e));
                        }
                    }
                }
                self.host
                    .symlink(&privilege, target, link)
                    .map_err(install_failure)?;
            }
            InstallMode::AtomicRename => {
                let temp = self.layout().temp_link();
                if self.host.exists(&privilege, &temp).map_err(install_failure)? {
                    self.host
                        .remove_file(&privilege, &temp)
                        .map_err(install_failure)?;
                }
                self.host
                    .symlink(&privilege, target, &temp)
                    .map_err(install_failure)?;
                if let Err(e) = self.host.rename(&privilege, &temp, link) {
                    let _ = self.host.remove_file(&privilege, &temp);
                    return Err(install_failure(e));
                }
            }
        }
        Ok(())
    }

    /// Run the service restart command with elevated privilege
    pub fn restart(&self) -> DeployResult<()> {
        let command = self.settings.restart_command.clone();
        info!(%command, "restarting service");
        self.events.on_event(DeployEvent::Restarting {
            command: command.clone(),
        });

        // A host that cannot run the command is a failed restart all the same
        let output = match self.host.shell(&Privilege::Root, &command) {
            Ok(output) => output,
            Err(e) => {
                warn!(%command, error = %e, "restart command did not run");
                return Err(DeployError::RestartFailure {
                    command,
                    code: None,
                    stderr: e.to_string(),
                    rolled_back_to: None,
                    rollback_error: None,
                });
            }
        };
        if !output.success() {
            warn!(%command, code = ?output.code, "restart command failed");
            return Err(DeployError::RestartFailure {
                command,
                code: output.code,
                stderr: output.stderr,
                rolled_back_to: None,
                rollback_error: None,
            });
        }

        self.events.on_event(DeployEvent::StepCompleted {
            step: DeployStep::Restart,
        });
        Ok(())
    }

    /// Resolve the current link to the artifact it points at.
    ///
    /// A missing, unreadable or dangling link is a `BrokenPointer`.
    pub fn current_filename(&self) -> DeployResult<PathBuf> {
        let link = self.layout().current_link();
        let broken = || DeployError::BrokenPointer {
            link: link.to_path_buf(),
        };

        let target = self
            .host
            .read_link(&Privilege::Connect, link)
            .map_err(|e| {
                debug!(link = %link.display(), error = %e, "current pointer unreadable");
                broken()
            })?;
        let target = self.layout().resolve_target(&target);

        match self.host.exists(&Privilege::Connect, &target) {
            Ok(true) => Ok(target),
            Ok(false) => Err(broken()),
            Err(e) => {
                debug!(target = %target.display(), error = %e, "current target unreadable");
                Err(broken())
            }
        }
    }
}
