//! # Diagnostics
//!
//! Structured, injectable warning collection.
//!
//! Translation is best-effort: unsupported fields are dropped and bad model
//! references are degraded rather than aborting the call. Every such
//! degradation is reported to a [`DiagnosticSink`] supplied by the caller,
//! keeping the swallow-and-continue policy observable and testable instead
//! of hiding it behind a global logger.

use serde::Serialize;
use serde_json::Value;
use std::sync::Mutex;

/// One recorded degradation event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    /// The component that raised the event (e.g. `"SchemaTranslator"`).
    pub component: String,
    /// Human-readable description naming the field/value dropped.
    pub message: String,
    /// Structured payload (the offending value, ignored field names, ...).
    pub context: Value,
}

/// Receiver for degradation events.
///
/// Fire-and-forget: no return value is consumed. Implementations must be
/// callable from concurrent translation calls, hence `Send + Sync` and
/// emission through `&self`.
pub trait DiagnosticSink: Send + Sync {
    /// Records one event.
    fn emit(&self, component: &str, message: &str, context: Value);
}

/// Sink that drops every event. Useful for callers that only care about the
/// produced fragment.
#[derive(Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _component: &str, _message: &str, _context: Value) {}
}

/// Sink that retains every event in order, for inspection after the call.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the events recorded so far.
    pub fn events(&self) -> Vec<Diagnostic> {
        self.events.lock().expect("diagnostic sink poisoned").clone()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.lock().expect("diagnostic sink poisoned").is_empty()
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, component: &str, message: &str, context: Value) {
        self.events
            .lock()
            .expect("diagnostic sink poisoned")
            .push(Diagnostic {
                component: component.to_string(),
                message: message.to_string(),
                context,
            });
    }
}
