//! Deferred decoration of error slots.
//!
//! Each operation schedules an action that runs when the enclosing scope
//! completes, however it completes. The action looks at the final value of
//! the slot and does nothing when the slot holds absence.
//!
//! | Operation | Guard / function |
//! |-----------|------------------|
//! | annotate on error | [`OnError`], [`on_error`], [`on_error!`](crate::on_error) |
//! | log on error | [`LogOnError`], [`log_on_error`] |
//! | log on error, with span | [`log_on_error_in`] |
//! | log a function's error | [`log_fn_on_error`] |
//! | log a function's error, with span | [`log_fn_on_error_in`] |
//!
//! Logging goes through a [`LogSink`]. The free functions use
//! [`TracingSink`]; a [`Decorator`] carries any other sink.
//!
//! # Stacking
//!
//! Guards dereference to their slot, so one guard can be taken over
//! another. Guards drop in reverse order: an annotation guard stacked on a
//! log guard annotates first, and the record carries the annotated text.
//!
//! ```
//! use error_decorate::decorate::{on_error, Decorator};
//! use error_decorate::sink::Recorder;
//! use error_decorate::DecoratedError;
//!
//! let recorder = Recorder::new();
//! let decorator = Decorator::new(recorder.clone());
//!
//! let mut result: Result<(), DecoratedError> = Ok(());
//! {
//!     let mut logged = decorator.log_on_error(&mut result);
//!     let mut annotated = on_error(&mut *logged, "publishing batch");
//!     *annotated = Err(DecoratedError::new("broker unavailable"));
//! }
//!
//! assert_eq!(recorder.messages(), vec!["publishing batch: broker unavailable".to_string()]);
//! ```
use std::fmt::Display;

use tracing::Span;

use crate::sink::{LogSink, TracingSink};
use crate::traits::{Annotate, ErrorSlot, IntoAnnotation};

mod log_fn;
mod log_on_error;
mod on_error;

pub use log_fn::{log_fn_on_error, log_fn_on_error_in};
pub use log_on_error::LogOnError;
pub use on_error::{on_error, OnError};

/// Entry point for log-on-error decoration with an injected [`LogSink`].
///
/// # Examples
///
/// ```
/// use error_decorate::decorate::Decorator;
/// use error_decorate::sink::Recorder;
///
/// let recorder = Recorder::new();
/// let decorator = Decorator::new(recorder.clone());
///
/// let span = tracing::info_span!("checkout", order = 1234);
/// decorator.log_fn_on_error_in(&span, || Some("card declined"));
///
/// let records = recorder.records();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].message, "card declined");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Decorator<L = TracingSink> {
    sink: L,
}

impl Decorator<TracingSink> {
    /// Decorator that logs through `tracing`.
    #[inline]
    pub const fn tracing() -> Self {
        Self { sink: TracingSink }
    }
}

impl<L: LogSink> Decorator<L> {
    /// Creates a decorator that logs to `sink`.
    #[inline]
    pub fn new(sink: L) -> Self {
        Self { sink }
    }

    /// Returns the sink records are sent to.
    #[inline]
    pub fn sink(&self) -> &L {
        &self.sink
    }

    /// Schedules logging of `slot` when the returned guard drops.
    #[inline]
    pub fn log_on_error<'s, S>(&self, slot: &'s mut S) -> LogOnError<'s, S, &L>
    where
        S: ErrorSlot,
        S::Error: Display,
    {
        LogOnError::new(slot, &self.sink)
    }

    /// Schedules logging of `slot`, inside `span`, when the returned guard drops.
    #[inline]
    pub fn log_on_error_in<'s, S>(&self, span: &Span, slot: &'s mut S) -> LogOnError<'s, S, &L>
    where
        S: ErrorSlot,
        S::Error: Display,
    {
        LogOnError::new(slot, &self.sink).in_span(span.clone())
    }

    /// Runs `op` once and logs its error, if any.
    pub fn log_fn_on_error<F, R>(&self, op: F)
    where
        F: FnOnce() -> R,
        R: ErrorSlot,
        R::Error: Display,
    {
        let result = op();
        log_slot(&self.sink, None, &result);
    }

    /// Runs `op` once and logs its error, if any, inside `span`.
    pub fn log_fn_on_error_in<F, R>(&self, span: &Span, op: F)
    where
        F: FnOnce() -> R,
        R: ErrorSlot,
        R::Error: Display,
    {
        let result = op();
        log_slot(&self.sink, Some(span), &result);
    }
}

/// Schedules logging of `slot` through `tracing` when the returned guard drops.
///
/// # Examples
///
/// ```
/// use error_decorate::decorate::log_on_error;
///
/// fn remove_lock_file() -> Result<(), std::io::Error> {
///     let mut result: Result<(), std::io::Error> = Ok(());
///     {
///         let mut guard = log_on_error(&mut result);
///         *guard = std::fs::remove_file("/nonexistent/app.lock");
///     }
///     result
/// }
///
/// assert!(remove_lock_file().is_err());
/// ```
#[inline]
pub fn log_on_error<S>(slot: &mut S) -> LogOnError<'_, S>
where
    S: ErrorSlot,
    S::Error: Display,
{
    LogOnError::new(slot, TracingSink)
}

/// Schedules logging of `slot` through `tracing`, inside `span`, when the
/// returned guard drops.
///
/// The span attaches its fields to the record. It does not affect whether
/// the record is emitted.
#[inline]
pub fn log_on_error_in<'s, S>(span: &Span, slot: &'s mut S) -> LogOnError<'s, S>
where
    S: ErrorSlot,
    S::Error: Display,
{
    LogOnError::new(slot, TracingSink).in_span(span.clone())
}

pub(crate) fn annotate_slot<S, A>(slot: &mut S, annotation: A)
where
    S: ErrorSlot + ?Sized,
    S::Error: Annotate,
    A: IntoAnnotation,
{
    if let Some(error) = slot.error_mut() {
        error.annotate(annotation.into_annotation());
    }
}

pub(crate) fn log_slot<S, L>(sink: &L, span: Option<&Span>, slot: &S)
where
    S: ErrorSlot + ?Sized,
    S::Error: Display,
    L: LogSink + ?Sized,
{
    if let Some(error) = slot.error() {
        match span {
            Some(span) => sink.log_error_in(span, error),
            None => sink.log_error(error),
        }
    }
}
