//! Error value made of a message and an optional underlying cause.
//!
//! [`DecoratedError`] is what annotate-on-error produces: the annotation
//! becomes the message and the previous error becomes the cause. It renders
//! as `message: cause`, so repeated annotation reads outermost first.
//!
//! # Examples
//!
//! ```
//! use std::error::Error;
//! use error_decorate::DecoratedError;
//!
//! let err = DecoratedError::wrap("opening database", DecoratedError::new("permission denied"));
//!
//! assert_eq!(err.to_string(), "opening database: permission denied");
//! assert_eq!(err.message(), "opening database");
//! assert_eq!(err.source().unwrap().to_string(), "permission denied");
//! ```
use std::borrow::Cow;
use std::error::Error;
use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::traits::IntoAnnotation;

/// Boxed, thread-safe error used as the cause of a [`DecoratedError`].
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// An error message, optionally wrapping the error that caused it.
#[derive(Debug)]
pub struct DecoratedError {
    message: Cow<'static, str>,
    cause: Option<BoxError>,
}

impl DecoratedError {
    /// Creates an error with a message and no cause.
    #[inline]
    pub fn new<S: Into<Cow<'static, str>>>(message: S) -> Self {
        Self { message: message.into(), cause: None }
    }

    /// Creates an error whose message is `annotation` and whose cause is `cause`.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_decorate::{annotation, DecoratedError};
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    /// let err = DecoratedError::wrap(annotation!("reading {}", "a.txt"), io);
    ///
    /// assert_eq!(err.to_string(), "reading a.txt: no such file");
    /// assert!(err.find_cause::<std::io::Error>().is_some());
    /// ```
    pub fn wrap<A, C>(annotation: A, cause: C) -> Self
    where
        A: IntoAnnotation,
        C: Into<BoxError>,
    {
        Self { message: annotation.into_annotation().into_message(), cause: Some(cause.into()) }
    }

    /// Empty value left in a slot while its previous error is being moved out.
    #[inline]
    pub(crate) const fn placeholder() -> Self {
        Self { message: Cow::Borrowed(""), cause: None }
    }

    /// Returns this error's own message, without the cause.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the wrapped cause, if any.
    #[inline]
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Consumes the error, returning the wrapped cause.
    #[inline]
    pub fn into_cause(self) -> Option<BoxError> {
        self.cause
    }

    /// Iterates over this error and every error in its source chain.
    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    /// Returns the innermost error of the source chain.
    pub fn root_cause(&self) -> &(dyn Error + 'static) {
        let mut current: &(dyn Error + 'static) = self;
        while let Some(source) = current.source() {
            current = source;
        }
        current
    }

    /// Finds the first error of type `T` among the causes of this error.
    ///
    /// The error itself is not considered, only its causes.
    pub fn find_cause<T: Error + 'static>(&self) -> Option<&T> {
        self.chain().skip(1).find_map(|err| err.downcast_ref::<T>())
    }
}

impl Display for DecoratedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{}: {}", self.message, cause),
            None => f.write_str(&self.message),
        }
    }
}

impl Error for DecoratedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_ref().map(|cause| &**cause as &(dyn Error + 'static))
    }
}

impl From<&'static str> for DecoratedError {
    #[inline]
    fn from(message: &'static str) -> Self {
        Self::new(message)
    }
}

impl From<String> for DecoratedError {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

#[cfg(feature = "serde")]
impl Serialize for DecoratedError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DecoratedError", 2)?;
        state.serialize_field("message", &self.message)?;
        state.serialize_field("cause", &self.cause.as_ref().map(|cause| cause.to_string()))?;
        state.end()
    }
}

/// Iterator over an error and its sources, outermost first.
///
/// Created by [`DecoratedError::chain`].
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}
