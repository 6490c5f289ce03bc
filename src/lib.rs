//! rollout - versioned artifact deployment manager
//!
//! rollout installs `<app>-<version>.<ext>` artifacts into an application
//! root directory, switches a `current` link between them, restarts the
//! service, and retires old versions beyond a retention window. The same
//! operations run on the local machine or on a remote host over SSH.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployReport, DeploymentManager, ManagerSettings, StageOutcome};
pub use config::Config;
pub use domain::entities::InstalledVersion;
pub use domain::ports::{DeployEvent, DeployEventSink, RemoteHost};
pub use domain::value_objects::{ArtifactPattern, InstallMode};
pub use error::{DeployError, DeployResult};
pub use infrastructure::{LocalHost, SshHost};
