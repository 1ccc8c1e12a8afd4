//! The prefix message applied to an error by annotate-on-error decoration.
//!
//! # Examples
//!
//! ```
//! use error_decorate::Annotation;
//!
//! let annotation = Annotation::new("loading configuration");
//! assert_eq!(annotation.message(), "loading configuration");
//! assert_eq!(annotation.to_string(), "loading configuration");
//! ```
use std::borrow::Cow;
use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// Rendered annotation text.
///
/// Static strings are stored without allocating; formatted annotations own
/// their `String`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Annotation {
    message: Cow<'static, str>,
}

impl Annotation {
    /// Creates an annotation from any static or owned string.
    #[inline]
    pub fn new<S: Into<Cow<'static, str>>>(message: S) -> Self {
        Self { message: message.into() }
    }

    /// Returns the annotation text.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the annotation, returning its text.
    #[inline]
    pub fn into_message(self) -> Cow<'static, str> {
        self.message
    }
}

impl Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Annotation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.message)
    }
}
