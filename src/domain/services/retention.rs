//! Retention planning
//!
//! Decides which installed artifacts are old enough to remove. The current
//! artifact is never a candidate. Of the remaining artifacts, the newest
//! `retain - 1` (by file name, which orders chronologically under the naming
//! convention) are kept, so about `retain` versions survive including the
//! current one.

/// Default number of versions kept on the host
pub const DEFAULT_RETAIN: usize = 5;

/// File names to remove, oldest first.
///
/// `installed` may be in any order and may contain `current`.
/// A `retain` of zero is treated like one: the active version is always kept.
pub fn plan_removals<S: AsRef<str>>(installed: &[S], current: &str, retain: usize) -> Vec<String> {
    let mut candidates: Vec<&str> = installed
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| *name != current)
        .collect();
    candidates.sort_unstable();
    candidates.dedup();

    let keep = retain.saturating_sub(1);
    let remove = candidates.len().saturating_sub(keep);
    candidates[..remove].iter().map(|s| s.to_string()).collect()
}
