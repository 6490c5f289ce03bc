//! Deploy Module
//!
//! Runs the full rollout of one artifact: stage, install, restart.
//!
//! ## Structure
//!
//! - `result` - Outcome of a successful run (`DeployReport`)
//! - `use_case` - The `run` operation on `DeploymentManager`
//!
//! ## Usage
//!
//! ```ignore
//! use rollout::application::{DeploymentManager, ManagerSettings};
//!
//! let manager = DeploymentManager::new(host, settings);
//! let report = manager.run(Path::new("target/myapp-1.2.war"))?;
//! ```

mod result;
mod use_case;

pub use result::DeployReport;
