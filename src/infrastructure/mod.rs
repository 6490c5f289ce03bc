//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `host/` - RemoteHost implementations (local machine, SSH)

pub mod host;

pub use host::{LocalHost, SshHost};
