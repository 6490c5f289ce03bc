//! Domain Services
//!
//! Stateless rules that operate on domain values.

pub mod retention;

pub use retention::plan_removals;
