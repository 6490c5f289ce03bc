//! Host Implementations
//!
//! Concrete implementations of the RemoteHost port.

mod local;
mod ssh;

pub use local::LocalHost;
pub use ssh::SshHost;

/// Quote a string for safe use as one POSIX shell word
pub(crate) fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}
