use std::fmt::Display;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::Span;

use super::LogSink;

/// One record captured by a [`Recorder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Rendered error message.
    pub message: String,
    /// Name of the span the record was emitted in, if any.
    pub span: Option<&'static str>,
}

/// In-memory sink. Clones share the same buffer.
///
/// # Examples
///
/// ```
/// use error_decorate::sink::{LogSink, Recorder};
///
/// let recorder = Recorder::new();
/// recorder.log_error(&"lost connection");
///
/// assert_eq!(recorder.len(), 1);
/// assert_eq!(recorder.records()[0].message, "lost connection");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl Recorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every record captured so far.
    #[must_use]
    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().clone()
    }

    /// Returns the messages of every record captured so far.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|record| record.message.clone()).collect()
    }

    /// Number of captured records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if nothing has been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Discards every captured record.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn push(&self, message: &dyn Display, span: Option<&'static str>) {
        self.lock().push(LogRecord { message: message.to_string(), span });
    }

    // A panic while holding the lock cannot leave a half-written record.
    fn lock(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LogSink for Recorder {
    fn log_error(&self, message: &dyn Display) {
        self.push(message, None);
    }

    fn log_error_in(&self, span: &Span, message: &dyn Display) {
        self.push(message, span.metadata().map(|metadata| metadata.name()));
    }
}
