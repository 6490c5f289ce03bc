//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod deploy_events;
pub mod remote_host;

pub use deploy_events::{DeployEvent, DeployEventSink, DeployStep, NoopEventSink};
pub use remote_host::{
    CommandOutput, HostError, HostResult, Privilege, RemoteHost, UploadOptions,
};
