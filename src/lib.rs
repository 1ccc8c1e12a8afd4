//! Deferred annotation and logging of error return values.
//!
//! An operation registers a decoration at the top of its scope, bound to the
//! slot that will hold its outcome. When the scope ends, on every exit path,
//! the decoration looks at the slot's final value: if it holds an error, the
//! error is annotated or logged; if it holds absence, nothing happens.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! depend on `error_decorate::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Annotate on error
//!
//! ```
//! use error_decorate::{on_error, DecoratedError};
//!
//! fn failing() -> Result<(), DecoratedError> {
//!     let mut err: Option<DecoratedError> = None;
//!     {
//!         let mut err = on_error!(&mut err, "My format with {} as argument", "arg");
//!         *err = Some(DecoratedError::new("Some error"));
//!     }
//!     err.map_or(Ok(()), Err)
//! }
//!
//! assert_eq!(failing().unwrap_err().to_string(), "My format with arg as argument: Some error");
//! ```
//!
//! ## Log on error
//!
//! ```
//! use error_decorate::decorate::log_on_error;
//!
//! fn sync_index() -> Result<usize, String> {
//!     let mut result: Result<usize, String> = Ok(0);
//!     {
//!         let mut result = log_on_error(&mut result);
//!         *result = Err("index locked".to_string());
//!     }
//!     result
//! }
//!
//! assert!(sync_index().is_err());
//! ```
//!
//! ## Log a function's error
//!
//! ```
//! use error_decorate::decorate::log_fn_on_error;
//!
//! log_fn_on_error(|| std::fs::remove_dir("/nonexistent/scratch"));
//! ```

/// Future adapters for decoration (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;
/// Scope guards and functions that decorate error slots
pub mod decorate;
/// `format!`-style annotation macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Logging sinks for log-on-error decoration
pub mod sink;
/// Core traits for slots, annotation and eager decoration
pub mod traits;
/// Annotation and error value types
pub mod types;

pub use traits::*;
pub use types::{Annotation, BoxError, Chain, DecoratedError, DecoratedResult, LazyAnnotation};
