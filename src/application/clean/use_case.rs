//! Clean Use Case
//!
//! Plans and executes retention cleanup.

use tracing::{info, warn};

use super::result::{CleanReport, CleanupPlan};
use crate::application::DeploymentManager;
use crate::domain::ports::{DeployEvent, DeployEventSink, Privilege, RemoteHost};
use crate::domain::services::plan_removals;
use crate::error::{CleanupFailure, DeployError, DeployResult};

impl<H, E> DeploymentManager<H, E>
where
    H: RemoteHost,
    E: DeployEventSink,
{
    /// Decide which old versions to remove without deleting anything.
    ///
    /// Keeps the current artifact plus the newest `retain - 1` others.
    pub fn plan_cleanup(&self, retain: usize) -> DeployResult<CleanupPlan> {
        if retain == 0 {
            return Err(DeployError::InvalidRetention { retain });
        }

        let current = self.current_filename()?;
        let current_name = current
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let root = self.layout().root();
        let installed: Vec<String> = self
            .host
            .list_dir(&Privilege::Root, root)?
            .into_iter()
            .filter(|name| !self.layout().is_current_link(name) && self.pattern().matches(name))
            .collect();

        let files = plan_removals(&installed, &current_name, retain)
            .into_iter()
            .map(|name| root.join(name))
            .collect();

        Ok(CleanupPlan {
            current,
            files,
            retain,
        })
    }

    /// Delete every file in the plan.
    ///
    /// The plan is announced before the first deletion. A failed deletion
    /// does not stop the others; failures are returned together as
    /// `CleanupPartialFailure`.
    pub fn execute_cleanup(&self, plan: &CleanupPlan) -> DeployResult<CleanReport> {
        if plan.is_empty() {
            info!("no cleanable versions installed");
            self.events.on_event(DeployEvent::NothingToClean);
            return Ok(CleanReport::new());
        }

        info!(count = plan.files.len(), "removing old installed versions");
        self.events.on_event(DeployEvent::CleanupPlanned {
            files: plan.files.clone(),
        });

        let mut report = CleanReport::new();
        let mut failures = Vec::new();
        for path in &plan.files {
            if *path == plan.current {
                warn!(path = %path.display(), "refusing to remove the current artifact");
                continue;
            }
            match self.host.remove_file(&Privilege::Root, path) {
                Ok(()) => {
                    self.events
                        .on_event(DeployEvent::Removed { path: path.clone() });
                    report.add_removed(path.clone());
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to remove old version");
                    self.events.on_event(DeployEvent::RemoveFailed {
                        path: path.clone(),
                        error: e.to_string(),
                    });
                    failures.push(CleanupFailure {
                        path: path.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        if !failures.is_empty() {
            return Err(DeployError::CleanupPartialFailure {
                removed: report.removed,
                failures,
            });
        }
        Ok(report)
    }

    /// Plan and execute retention cleanup in one step
    pub fn clean_installed(&self, retain: usize) -> DeployResult<CleanReport> {
        let plan = self.plan_cleanup(retain)?;
        self.execute_cleanup(&plan)
    }
}
