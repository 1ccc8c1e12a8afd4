//! Deferred rendering of annotation templates.
//!
//! [`LazyAnnotation`] holds a closure that renders the annotation text. The
//! closure captures the template arguments when the decoration is scheduled
//! but is only called when an error is actually present, so the success path
//! never formats anything.
//!
//! The [`annotation!`](crate::annotation) macro builds one from `format!`
//! syntax.
//!
//! # Examples
//!
//! ```
//! use error_decorate::{annotation, DecoratedError};
//! use error_decorate::traits::DecorateExt;
//!
//! let path = "config.toml";
//! let result: Result<(), DecoratedError> = Err(DecoratedError::new("file not found"));
//! let err = result.annotate_err(annotation!("loading {}", path)).unwrap_err();
//!
//! assert_eq!(err.to_string(), "loading config.toml: file not found");
//! ```
use crate::traits::IntoAnnotation;
use crate::types::annotation::Annotation;

/// A lazily-rendered annotation.
///
/// # Type Parameters
///
/// * `F` - A closure type that implements `FnOnce() -> String`.
///
/// # Examples
///
/// ```
/// use error_decorate::LazyAnnotation;
/// use error_decorate::traits::IntoAnnotation;
///
/// let user_id = 42;
/// let lazy = LazyAnnotation::new(move || format!("user {}", user_id));
/// assert_eq!(lazy.into_annotation().message(), "user 42");
/// ```
#[repr(transparent)]
pub struct LazyAnnotation<F> {
    render: F,
}

impl<F> LazyAnnotation<F> {
    /// Wraps a rendering closure. The closure runs at most once.
    #[inline]
    pub fn new(render: F) -> Self {
        Self { render }
    }
}

impl<F> IntoAnnotation for LazyAnnotation<F>
where
    F: FnOnce() -> String,
{
    #[inline]
    fn into_annotation(self) -> Annotation {
        Annotation::new((self.render)())
    }
}
