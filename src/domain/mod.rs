//! Domain Layer
//!
//! Pure deployment rules without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Artifacts and installed-version rows
//! - `value_objects/` - Naming pattern, root directory layout, install mode
//! - `services/` - Retention planning
//! - `ports/` - Interface definitions for infrastructure (host, events)
//!
//! Everything that touches a filesystem or a shell goes through `ports::RemoteHost`.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
