//! Value Objects
//!
//! Immutable types that describe how artifacts are named and where they live.

mod artifact_pattern;
mod hash;
mod install_mode;
mod layout;

pub use artifact_pattern::ArtifactPattern;
pub use hash::ContentHash;
pub use install_mode::InstallMode;
pub use layout::DeployLayout;
