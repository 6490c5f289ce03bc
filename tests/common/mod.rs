//! Common test utilities for rollout CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated install prefix, working directory and config home
//! - Assertion macros: `assert_output_contains!`, `assert_installed!`

pub mod assertions;
pub mod env;

#[allow(unused_imports)]
pub use assertions::*;
pub use env::*;
