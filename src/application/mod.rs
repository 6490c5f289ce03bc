//! Application Layer
//!
//! Deployment operations against one application's root directory.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates a `RemoteHost` and a `DeployEventSink`
//!
//! ## Operations
//!
//! All operations are methods on `DeploymentManager`:
//!
//! - `stage`, `install`, `restart`, `current_filename` - primitive steps (`manager`)
//! - `run` - stage, install and restart in order (`deploy`)
//! - `list_installed_versions` - installed artifacts with the current one marked (`versions`)
//! - `plan_cleanup`, `execute_cleanup`, `clean_installed` - retention (`clean`)

pub mod clean;
pub mod deploy;
mod manager;
mod versions;

#[cfg(all(test, unix))]
pub(crate) mod test_support;

pub use clean::{CleanReport, CleanupPlan};
pub use deploy::DeployReport;
pub use manager::{DeploymentManager, ManagerSettings, StageOutcome};
