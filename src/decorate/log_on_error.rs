//! Log-on-error scope guard.
use std::fmt::Display;
use std::ops::{Deref, DerefMut};

use tracing::Span;

use super::log_slot;
use crate::sink::{LogSink, TracingSink};
use crate::traits::ErrorSlot;

/// Guard that logs the error in a slot when it goes out of scope.
///
/// Emits exactly one error record, with the error's `Display` text, if the
/// slot holds an error when the guard drops. The slot is never modified.
///
/// Obtain one from [`log_on_error`](super::log_on_error),
/// [`log_on_error_in`](super::log_on_error_in) or a
/// [`Decorator`](super::Decorator).
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
/// let mut slot: Result<u32, &str> = Ok(0);
/// {
///     let mut guard = decorator.log_on_error(&mut slot);
///     *guard = Err("quota exceeded");
/// }
///
/// assert_eq!(slot, Err("quota exceeded"));
/// assert_eq!(recorder.messages(), vec!["quota exceeded".to_string()]);
/// ```
#[must_use = "the error is logged when the guard is dropped; binding it to `_` logs immediately"]
pub struct LogOnError<'a, S, L = TracingSink>
where
    S: ErrorSlot,
    S::Error: Display,
    L: LogSink,
{
    slot: &'a mut S,
    sink: L,
    span: Option<Span>,
    pending: bool,
}

impl<'a, S, L> LogOnError<'a, S, L>
where
    S: ErrorSlot,
    S::Error: Display,
    L: LogSink,
{
    /// Schedules logging of `slot` to `sink` when the guard drops.
    #[inline]
    pub fn new(slot: &'a mut S, sink: L) -> Self {
        Self { slot, sink, span: None, pending: true }
    }

    /// Emits the record inside `span`, so the span's fields enrich it.
    #[inline]
    pub fn in_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Logs now instead of at scope exit. Dropping a finished guard does nothing.
    #[inline]
    pub fn finish(mut self) {
        self.apply();
    }

    fn apply(&mut self) {
        if self.pending {
            self.pending = false;
            log_slot(&self.sink, self.span.as_ref(), &*self.slot);
        }
    }
}

impl<S, L> Deref for LogOnError<'_, S, L>
where
    S: ErrorSlot,
    S::Error: Display,
    L: LogSink,
{
    type Target = S;

    #[inline]
    fn deref(&self) -> &S {
        &*self.slot
    }
}

impl<S, L> DerefMut for LogOnError<'_, S, L>
where
    S: ErrorSlot,
    S::Error: Display,
    L: LogSink,
{
    #[inline]
    fn deref_mut(&mut self) -> &mut S {
        &mut *self.slot
    }
}

impl<S, L> Drop for LogOnError<'_, S, L>
where
    S: ErrorSlot,
    S::Error: Display,
    L: LogSink,
{
    fn drop(&mut self) {
        self.apply();
    }
}
