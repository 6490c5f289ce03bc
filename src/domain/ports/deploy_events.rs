//! Deploy Event Port
//!
//! Provides an observable interface for deployment operations.
//! The presentation layer turns these into progress lines or NDJSON.

use std::path::PathBuf;

/// A step of the deploy sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployStep {
    Stage,
    Install,
    Restart,
    Rollback,
}

impl DeployStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeployStep::Stage => "stage",
            DeployStep::Install => "install",
            DeployStep::Restart => "restart",
            DeployStep::Rollback => "rollback",
        }
    }
}

/// Event emitted during deployment operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Copying the artifact into the root directory
    Staging { source: PathBuf, root: PathBuf },

    /// Destination already holds identical content
    AlreadyStaged { path: PathBuf },

    /// Repointing the current link
    Installing { target: PathBuf, link: PathBuf },

    /// Running the restart command
    Restarting { command: String },

    /// A step finished successfully
    StepCompleted { step: DeployStep },

    /// Restart failed and the previous artifact is being reinstated
    RollingBack { previous: PathBuf },

    /// Old versions selected for removal, announced before any deletion
    CleanupPlanned { files: Vec<PathBuf> },

    /// Nothing old enough to remove
    NothingToClean,

    /// One old version removed
    Removed { path: PathBuf },

    /// One old version could not be removed
    RemoveFailed { path: PathBuf, error: String },
}

/// Trait for receiving deploy events
///
/// Implementations:
/// - `ConsoleEventSink`: progress lines for operators
/// - `JsonEventSink`: NDJSON stream for CI
/// - `NoopEventSink`: silent operation
pub trait DeployEventSink {
    fn on_event(&self, event: DeployEvent);
}

impl<T: DeployEventSink + ?Sized> DeployEventSink for &T {
    fn on_event(&self, event: DeployEvent) {
        (**self).on_event(event)
    }
}

impl<T: DeployEventSink + ?Sized> DeployEventSink for Box<T> {
    fn on_event(&self, event: DeployEvent) {
        (**self).on_event(event)
    }
}

/// No-op event sink for silent operation
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingEventSink {
        events: RefCell<Vec<DeployEvent>>,
    }

    impl DeployEventSink for RecordingEventSink {
        fn on_event(&self, event: DeployEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    #[test]
    fn recording_sink_captures_events_through_reference() {
        let sink = RecordingEventSink {
            events: RefCell::new(Vec::new()),
        };
        let by_ref: &dyn DeployEventSink = &sink;
        by_ref.on_event(DeployEvent::NothingToClean);
        by_ref.on_event(DeployEvent::StepCompleted {
            step: DeployStep::Stage,
        });

        assert_eq!(sink.events.borrow().len(), 2);
    }

    #[test]
    fn step_names() {
        assert_eq!(DeployStep::Rollback.as_str(), "rollback");
    }
}
