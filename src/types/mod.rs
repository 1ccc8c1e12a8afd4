//! Value types used by decoration.
//!
//! # Examples
//!
//! ```
//! use error_decorate::{Annotation, DecoratedError};
//! use error_decorate::traits::Annotate;
//!
//! let mut err = DecoratedError::new("connection refused");
//! err.annotate(Annotation::new("dialing primary"));
//! err.annotate(Annotation::new("starting replica"));
//!
//! assert_eq!(err.to_string(), "starting replica: dialing primary: connection refused");
//! ```

pub mod annotation;
pub mod decorated_error;
pub mod lazy_annotation;

pub use annotation::*;
pub use decorated_error::*;
pub use lazy_annotation::*;

/// Result alias whose failure is a [`DecoratedError`].
///
/// # Type Parameters
///
/// * `T` - The success value type
pub type DecoratedResult<T> = Result<T, DecoratedError>;
