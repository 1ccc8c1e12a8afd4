//! Logging sinks that receive records from log-on-error decoration.
//!
//! A [`LogSink`] needs two capabilities: emit an error-severity record with a
//! string payload, and emit it within an ambient [`Span`] so the span's fields
//! enrich the record.
//!
//! - [`TracingSink`] forwards to the installed `tracing` subscriber. It is the
//!   sink used by the free functions in [`crate::decorate`].
//! - [`Recorder`] keeps records in memory, for tests and diagnostics.
//!
//! # Examples
//!
//! ```
//! use error_decorate::decorate::Decorator;
//! use error_decorate::sink::Recorder;
//!
//! let recorder = Recorder::new();
//! let decorator = Decorator::new(recorder.clone());
//!
//! decorator.log_fn_on_error(|| Err::<(), _>("disk full"));
//!
//! assert_eq!(recorder.messages(), vec!["disk full".to_string()]);
//! ```
use std::fmt::Display;
use std::sync::Arc;

use tracing::Span;

mod recorder;
mod tracing_sink;

pub use recorder::{LogRecord, Recorder};
pub use tracing_sink::TracingSink;

/// Destination for error records emitted by log-on-error decoration.
///
/// Implementations must tolerate concurrent calls; decoration adds no
/// locking of its own.
pub trait LogSink {
    /// Emits one error-severity record whose message is `message`.
    fn log_error(&self, message: &dyn Display);

    /// Emits one error-severity record inside `span`.
    ///
    /// The span only contributes fields. It never decides whether the record
    /// is emitted; a disabled span still logs.
    fn log_error_in(&self, span: &Span, message: &dyn Display) {
        span.in_scope(|| self.log_error(message));
    }
}

impl<L: LogSink + ?Sized> LogSink for &L {
    #[inline]
    fn log_error(&self, message: &dyn Display) {
        (**self).log_error(message);
    }

    #[inline]
    fn log_error_in(&self, span: &Span, message: &dyn Display) {
        (**self).log_error_in(span, message);
    }
}

impl<L: LogSink + ?Sized> LogSink for Box<L> {
    #[inline]
    fn log_error(&self, message: &dyn Display) {
        (**self).log_error(message);
    }

    #[inline]
    fn log_error_in(&self, span: &Span, message: &dyn Display) {
        (**self).log_error_in(span, message);
    }
}

impl<L: LogSink + ?Sized> LogSink for Arc<L> {
    #[inline]
    fn log_error(&self, message: &dyn Display) {
        (**self).log_error(message);
    }

    #[inline]
    fn log_error_in(&self, span: &Span, message: &dyn Display) {
        (**self).log_error_in(span, message);
    }
}
