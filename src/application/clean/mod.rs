//! Clean Use Case
//!
//! Retires old artifact versions beyond the retention window.
//!
//! This module handles:
//! - Listing installed artifacts and resolving the current one
//! - Planning removals (current artifact never included)
//! - Announcing the plan before anything is deleted
//! - Deleting each file independently and aggregating failures

mod result;
mod use_case;

pub use result::{CleanReport, CleanupPlan};
