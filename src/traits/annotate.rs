//! In-place annotation of error values.
//!
//! [`Annotate`] rewrites an error so that it renders as
//! `annotation: original`, keeping the original reachable as a cause where
//! the error type can carry one.
//!
//! | Error type | Result of annotation |
//! |------------|----------------------|
//! | [`DecoratedError`] | new `DecoratedError`, original as cause |
//! | `Box<DecoratedError>` | same, in the box |
//! | [`BoxError`] | boxed `DecoratedError`, original as cause |
//! | `std::io::Error` | same kind, `DecoratedError` as inner error |
//! | `String` | annotation prepended to the text |
//!
//! # Examples
//!
//! ```
//! use std::io;
//! use error_decorate::traits::Annotate;
//! use error_decorate::Annotation;
//!
//! let mut err = io::Error::new(io::ErrorKind::TimedOut, "deadline exceeded");
//! err.annotate(Annotation::new("syncing replica"));
//!
//! assert_eq!(err.kind(), io::ErrorKind::TimedOut);
//! assert_eq!(err.to_string(), "syncing replica: deadline exceeded");
//! ```
use std::io;
use std::mem;

use crate::traits::IntoAnnotation;
use crate::types::{Annotation, BoxError, DecoratedError};

/// Error types that can absorb an annotation in place.
pub trait Annotate {
    /// Rewrites `self` so it renders as `annotation: <previous self>`.
    fn annotate(&mut self, annotation: Annotation);

    /// By-value form of [`annotate`](Annotate::annotate).
    #[inline]
    fn annotated<A: IntoAnnotation>(mut self, annotation: A) -> Self
    where
        Self: Sized,
    {
        self.annotate(annotation.into_annotation());
        self
    }
}

impl Annotate for DecoratedError {
    fn annotate(&mut self, annotation: Annotation) {
        let cause = mem::replace(self, DecoratedError::placeholder());
        *self = DecoratedError::wrap(annotation, cause);
    }
}

impl Annotate for Box<DecoratedError> {
    #[inline]
    fn annotate(&mut self, annotation: Annotation) {
        (**self).annotate(annotation);
    }
}

impl Annotate for BoxError {
    fn annotate(&mut self, annotation: Annotation) {
        let cause = mem::replace(self, Box::new(DecoratedError::placeholder()));
        *self = Box::new(DecoratedError::wrap(annotation, cause));
    }
}

impl Annotate for io::Error {
    fn annotate(&mut self, annotation: Annotation) {
        let kind = self.kind();
        let cause = mem::replace(self, io::Error::from(kind));
        *self = io::Error::new(kind, DecoratedError::wrap(annotation, cause));
    }
}

impl Annotate for String {
    fn annotate(&mut self, annotation: Annotation) {
        let prefix = format!("{}: ", annotation);
        self.insert_str(0, &prefix);
    }
}
