//! Trait for converting values into an [`Annotation`].
//!
//! # Implementations
//!
//! - `&'static str`, `String`, `Cow<'static, str>` - used verbatim
//! - [`Annotation`] - identity conversion
//! - [`LazyAnnotation`](crate::LazyAnnotation) - renders its closure
//!
//! # Examples
//!
//! ```
//! use error_decorate::traits::IntoAnnotation;
//!
//! let a = "static message".into_annotation();
//! let b = String::from("owned message").into_annotation();
//!
//! assert_eq!(a.message(), "static message");
//! assert_eq!(b.message(), "owned message");
//! ```
use std::borrow::Cow;

use crate::types::annotation::Annotation;

/// Converts a value into the [`Annotation`] prefixed to a decorated error.
///
/// Conversion happens only when an error is present, so implementations may
/// do real work (formatting, lookups) without slowing the success path.
///
/// ```
/// use error_decorate::{traits::IntoAnnotation, Annotation};
///
/// struct Request { id: u64 }
///
/// impl IntoAnnotation for &Request {
///     fn into_annotation(self) -> Annotation {
///         Annotation::new(format!("handling request {}", self.id))
///     }
/// }
///
/// let request = Request { id: 7 };
/// assert_eq!((&request).into_annotation().message(), "handling request 7");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as an error annotation",
    label = "this type does not implement `IntoAnnotation`",
    note = "use a string, `Annotation::new(..)`, or the `annotation!` macro"
)]
pub trait IntoAnnotation {
    /// Converts `self` into an [`Annotation`].
    fn into_annotation(self) -> Annotation;
}

impl IntoAnnotation for Annotation {
    #[inline]
    fn into_annotation(self) -> Annotation {
        self
    }
}

impl IntoAnnotation for &'static str {
    #[inline]
    fn into_annotation(self) -> Annotation {
        Annotation::new(self)
    }
}

impl IntoAnnotation for String {
    #[inline]
    fn into_annotation(self) -> Annotation {
        Annotation::new(self)
    }
}

impl IntoAnnotation for Cow<'static, str> {
    #[inline]
    fn into_annotation(self) -> Annotation {
        Annotation::new(self)
    }
}
