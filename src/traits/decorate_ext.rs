//! Eager decoration of slot values.
//!
//! [`DecorateExt`] is the non-deferred counterpart of the scope guards in
//! [`crate::decorate`], for call sites that already hold the final value.
//!
//! # Examples
//!
//! ```
//! use error_decorate::traits::DecorateExt;
//! use error_decorate::DecoratedError;
//!
//! fn parse_port(raw: &str) -> Result<u16, DecoratedError> {
//!     raw.parse::<u16>()
//!         .map_err(|err| DecoratedError::new(err.to_string()))
//!         .annotate_err("parsing port")
//! }
//!
//! assert_eq!(parse_port("8080").unwrap(), 8080);
//! assert!(parse_port("http").unwrap_err().to_string().starts_with("parsing port: "));
//! ```
use std::fmt::Display;

use tracing::Span;

use crate::decorate::{annotate_slot, log_slot};
use crate::sink::{LogSink, TracingSink};
use crate::traits::{Annotate, ErrorSlot, IntoAnnotation};

/// Annotate or log the error held by a slot value, right away.
pub trait DecorateExt: ErrorSlot + Sized {
    /// Annotates the error, if any, and returns the slot.
    ///
    /// The annotation is only rendered when an error is present.
    #[inline]
    fn annotate_err<A: IntoAnnotation>(mut self, annotation: A) -> Self
    where
        Self::Error: Annotate,
    {
        annotate_slot(&mut self, annotation);
        self
    }

    /// Logs the error, if any, through `tracing` and returns the slot unchanged.
    #[inline]
    fn log_err(self) -> Self
    where
        Self::Error: Display,
    {
        log_slot(&TracingSink, None, &self);
        self
    }

    /// Logs the error, if any, through `tracing` inside `span`.
    #[inline]
    fn log_err_in(self, span: &Span) -> Self
    where
        Self::Error: Display,
    {
        log_slot(&TracingSink, Some(span), &self);
        self
    }

    /// Logs the error, if any, to `sink` and returns the slot unchanged.
    #[inline]
    fn log_err_to<L: LogSink + ?Sized>(self, sink: &L) -> Self
    where
        Self::Error: Display,
    {
        log_slot(sink, None, &self);
        self
    }
}

impl<S: ErrorSlot> DecorateExt for S {}
