//! Extraction diagnostics channel.
//!
//! The parser reports recoverable conditions (unmatched data lines,
//! unparseable numeric tokens) to a sink and moves on; sinks never affect
//! extraction.

use std::sync::Mutex;

use tracing::warn;

/// One recoverable extraction event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A line carried numeric tokens but matched no row label.
    UnmatchedRow(String),
    /// A token matched the numeric pattern but failed to parse.
    MalformedToken { token: String, line: String },
}

/// Receiver for extraction diagnostics. Fire-and-forget.
pub trait DiagnosticSink: Send + Sync {
    /// A data line matched no row label and was skipped.
    fn unmatched_row(&self, line: &str);

    /// A numeric token failed to parse and was skipped.
    fn malformed_token(&self, token: &str, line: &str) {
        let _ = (token, line);
    }
}

/// Default sink: structured log records via `tracing`.
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn unmatched_row(&self, line: &str) {
        warn!("no label match for: {}", line);
    }

    fn malformed_token(&self, token: &str, line: &str) {
        warn!("unparseable numeric token {:?} in: {}", token, line);
    }
}

/// Sink that records every event, for tests and embedders that post-process
/// diagnostics.
#[derive(Default)]
pub struct CollectingSink {
    events: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far.
    pub fn events(&self) -> Vec<Diagnostic> {
        self.events.lock().unwrap().clone()
    }
}

impl DiagnosticSink for CollectingSink {
    fn unmatched_row(&self, line: &str) {
        self.events
            .lock()
            .unwrap()
            .push(Diagnostic::UnmatchedRow(line.to_string()));
    }

    fn malformed_token(&self, token: &str, line: &str) {
        self.events.lock().unwrap().push(Diagnostic::MalformedToken {
            token: token.to_string(),
            line: line.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_sink_records_in_order() {
        let sink = CollectingSink::new();
        sink.unmatched_row("first");
        sink.malformed_token("1,2x", "second");

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], Diagnostic::UnmatchedRow("first".to_string()));
    }
}
