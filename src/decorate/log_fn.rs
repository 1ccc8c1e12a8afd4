//! Log-function-result-on-error.
use std::fmt::Display;

use tracing::Span;

use super::Decorator;
use crate::traits::ErrorSlot;

/// Runs `op` once and logs its error, if any, through `tracing`.
///
/// The result is discarded after logging. Nothing is logged when `op`
/// returns absence.
///
/// # Examples
///
/// ```
/// use error_decorate::decorate::log_fn_on_error;
///
/// fn close_session() -> Result<(), std::io::Error> {
///     Ok(())
/// }
///
/// log_fn_on_error(close_session);
/// ```
#[inline]
pub fn log_fn_on_error<F, R>(op: F)
where
    F: FnOnce() -> R,
    R: ErrorSlot,
    R::Error: Display,
{
    Decorator::tracing().log_fn_on_error(op);
}

/// Runs `op` once and logs its error, if any, inside `span`.
///
/// The span only enriches the record with its fields.
///
/// # Examples
///
/// ```
/// use error_decorate::decorate::log_fn_on_error_in;
///
/// let span = tracing::info_span!("shutdown", worker = 3);
/// log_fn_on_error_in(&span, || Err::<(), _>("worker did not stop"));
/// ```
#[inline]
pub fn log_fn_on_error_in<F, R>(span: &Span, op: F)
where
    F: FnOnce() -> R,
    R: ErrorSlot,
    R::Error: Display,
{
    Decorator::tracing().log_fn_on_error_in(span, op);
}
