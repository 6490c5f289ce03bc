//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Resolving configuration and wiring the manager to a host
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates the manager with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use rollout::presentation::factory;
//!
//! let (config, _warnings) = factory::resolve_config(&cli)?;
//! let manager = factory::create_manager(&config, NoopEventSink)?;
//! let versions = manager.list_installed_versions()?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{create_manager, resolve_config};
