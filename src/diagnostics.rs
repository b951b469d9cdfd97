use std::sync::{Mutex, PoisonError};

/// Sink for the advisory events the reconciliation engine emits.
///
/// The engine is a pure function of its inputs; anything worth telling the
/// user about travels through a sink handed in by the caller instead of a
/// process-wide logger. Nothing reported here ever stops a reconciliation.
pub trait Diagnostics {
    /// Low-level detail, interesting when debugging a reconciliation.
    fn debug(&self, message: &str);

    /// Something the user should see, but never a reason to abort.
    fn warn(&self, message: &str);
}

/// Forwards events to the [`log`] facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn debug(&self, message: &str) {
        log::debug!("{message}");
    }

    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn debug(&self, _message: &str) {}

    fn warn(&self, _message: &str) {}
}

/// Severity of a recorded reconciliation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Debug,
    Warning,
}

/// Collects events in memory, for callers that present engine output
/// themselves and for asserting on reported events in tests.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    events: Mutex<Vec<(Severity, String)>>,
}

impl RecordingDiagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded event, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<(Severity, String)> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Messages recorded at [`Severity::Warning`].
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|(severity, _)| *severity == Severity::Warning)
            .map(|(_, message)| message)
            .collect()
    }

    fn record(&self, severity: Severity, message: &str) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((severity, message.to_owned()));
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn debug(&self, message: &str) {
        self.record(Severity::Debug, message);
    }

    fn warn(&self, message: &str) {
        self.record(Severity::Warning, message);
    }
}
