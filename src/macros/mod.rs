//! Macros for `format!`-style annotations.
//!
//! - [`macro@crate::annotation`] - captures a template and its arguments into a
//!   [`LazyAnnotation`](crate::types::LazyAnnotation) rendered only on error.
//! - [`macro@crate::on_error`] - schedules an annotate-on-error guard on a slot
//!   with a `format!`-style annotation.
//!
//! # Examples
//!
//! ```
//! use error_decorate::{on_error, DecoratedError};
//!
//! fn open(name: &str) -> Result<(), DecoratedError> {
//!     let mut result: Result<(), DecoratedError> = Ok(());
//!     {
//!         let mut guard = on_error!(&mut result, "opening {}", name);
//!         *guard = Err(DecoratedError::new("not found"));
//!     }
//!     result
//! }
//!
//! assert_eq!(open("ledger").unwrap_err().to_string(), "opening ledger: not found");
//! ```

/// Creates a lazily-rendered annotation from `format!` arguments.
///
/// The arguments are moved into a closure when the macro is evaluated, and
/// the closure runs only if an error has to be annotated. To keep using a
/// non-`Copy` value afterwards, bind a reference to it first.
///
/// # Examples
///
/// ```
/// use error_decorate::{annotation, traits::IntoAnnotation};
///
/// let shard = 3;
/// let lazy = annotation!("rebalancing shard {}", shard);
/// assert_eq!(lazy.into_annotation().message(), "rebalancing shard 3");
/// ```
#[macro_export]
macro_rules! annotation {
    ($($arg:tt)*) => {
        $crate::types::LazyAnnotation::new(move || format!($($arg)*))
    };
}

/// Schedules annotate-on-error for a slot with a `format!`-style annotation.
///
/// `on_error!(slot, "template {}", arg)` is
/// `OnError::new(slot, annotation!("template {}", arg))`. Bind the result to
/// a named variable: the annotation applies when it is dropped.
///
/// # Examples
///
/// ```
/// use error_decorate::{on_error, DecoratedError};
///
/// let mut slot: Option<DecoratedError> = None;
/// {
///     let mut guard = on_error!(&mut slot, "My format with {} as argument", "arg");
///     *guard = Some(DecoratedError::new("Some error"));
/// }
///
/// assert_eq!(slot.unwrap().to_string(), "My format with arg as argument: Some error");
/// ```
#[macro_export]
macro_rules! on_error {
    ($slot:expr, $($arg:tt)+) => {
        $crate::decorate::OnError::new($slot, $crate::annotation!($($arg)+))
    };
}
