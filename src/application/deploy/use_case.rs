//! Deploy Use Case
//!
//! Stage, install and restart in order, stopping at the first failure.
//! Nothing already done is undone, except for the optional rollback of the
//! current link after a failed restart.

use std::path::Path;

use tracing::{info, warn};

use super::result::DeployReport;
use crate::application::DeploymentManager;
use crate::domain::ports::{DeployEvent, DeployEventSink, DeployStep, RemoteHost};
use crate::error::{DeployError, DeployResult};

impl<H, E> DeploymentManager<H, E>
where
    H: RemoteHost,
    E: DeployEventSink,
{
    /// Deploy `source`: stage it, point the current link at it, restart.
    ///
    /// The service is restarted only after the link has been switched. When
    /// the restart fails and rollback is enabled, the link is pointed back at
    /// the previously active artifact and the service restarted once more;
    /// the original `RestartFailure` is still returned, with `rollback_error`
    /// set if the rollback did not succeed.
    pub fn run(&self, source: &Path) -> DeployResult<DeployReport> {
        let previous = self.current_filename().ok();
        info!(
            source = %source.display(),
            host = %self.host.describe(),
            previous = ?previous,
            "deploying artifact"
        );

        let staged = self.stage(source)?;
        let installed = self.install(source)?;

        if let Err(err) = self.restart() {
            return Err(self.after_failed_restart(err, previous.as_deref(), &installed));
        }

        info!(artifact = %installed.display(), "deployment complete");
        Ok(DeployReport {
            artifact: installed,
            staged,
            previous,
        })
    }

    fn after_failed_restart(
        &self,
        err: DeployError,
        previous: Option<&Path>,
        installed: &Path,
    ) -> DeployError {
        let DeployError::RestartFailure {
            command,
            code,
            stderr,
            ..
        } = err
        else {
            return err;
        };

        let previous = match previous {
            Some(p) if self.settings.rollback_on_restart_failure && p != installed => p,
            _ => {
                warn!(artifact = %installed.display(), "restart failed; new version left installed");
                return DeployError::RestartFailure {
                    command,
                    code,
                    stderr,
                    rolled_back_to: None,
                    rollback_error: None,
                };
            }
        };

        warn!(previous = %previous.display(), "restart failed; rolling back");
        self.events.on_event(DeployEvent::RollingBack {
            previous: previous.to_path_buf(),
        });

        let (rolled_back_to, rollback_error) = match self.point_current_at(previous) {
            Ok(()) => {
                self.events.on_event(DeployEvent::StepCompleted {
                    step: DeployStep::Rollback,
                });
                let restarted = self.restart();
                if let Err(e) = &restarted {
                    warn!(error = %e, "restart after rollback also failed");
                }
                (Some(previous.to_path_buf()), restarted.err().map(|e| rollback_reason(&e)))
            }
            Err(e) => {
                warn!(error = %e, "rollback could not repoint the current link");
                (None, Some(e.to_string()))
            }
        };

        DeployError::RestartFailure {
            command,
            code,
            stderr,
            rolled_back_to,
            rollback_error,
        }
    }
}

/// Short reason for a failed restart after rollback, without the rollback suffix
fn rollback_reason(err: &DeployError) -> String {
    match err {
        DeployError::RestartFailure {
            code: Some(code), ..
        } => format!("exited with status {}", code),
        DeployError::RestartFailure { stderr, .. } if !stderr.trim().is_empty() => {
            stderr.trim().to_string()
        }
        DeployError::RestartFailure { .. } => "did not complete".to_string(),
        other => other.to_string(),
    }
}
