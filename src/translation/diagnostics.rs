/*!
 * Diagnostics sinks for the translator.
 *
 * The translator reports chunk previews, attempt numbers and failures through
 * a `DiagnosticsSink` handed to it at construction time. `LogSink` forwards to
 * the `log` facade; `CapturedLog` keeps the entries in memory.
 */

use log::Level;
use parking_lot::Mutex;
use std::fmt::Debug;
use std::sync::Arc;

/// Log entry for capturing translation process logs
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub level: Level,
    pub message: String,
}

/// Receiver for translator diagnostics
pub trait DiagnosticsSink: Send + Sync + Debug {
    fn record(&self, level: Level, message: String);
}

/// Forwards every entry to the global `log` logger
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticsSink for LogSink {
    fn record(&self, level: Level, message: String) {
        log::log!(target: "cascadeanime::translation", level, "{}", message);
    }
}

/// Keeps entries in memory, shared between clones
#[derive(Debug, Default, Clone)]
pub struct CapturedLog {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CapturedLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    /// Messages recorded at exactly `level`
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter(|e| e.level == level)
            .map(|e| e.message.clone())
            .collect()
    }
}

impl DiagnosticsSink for CapturedLog {
    fn record(&self, level: Level, message: String) {
        self.entries.lock().push(LogEntry { level, message });
    }
}
