//! Annotate-on-error scope guard.
use std::ops::{Deref, DerefMut};

use super::annotate_slot;
use crate::traits::{Annotate, ErrorSlot, IntoAnnotation};

/// Guard that annotates the error in a slot when it goes out of scope.
///
/// The guard borrows the slot exclusively and dereferences to it, so the
/// enclosing scope writes its outcome through the guard. Whatever the slot
/// holds when the guard drops is what gets annotated, on every exit path
/// including panic unwinding. Absence is left untouched and the annotation is
/// never rendered.
///
/// # Examples
///
/// ```
/// use error_decorate::decorate::OnError;
/// use error_decorate::DecoratedError;
///
/// fn load() -> Result<(), DecoratedError> {
///     let mut result: Result<(), DecoratedError> = Ok(());
///     {
///         let mut guard = OnError::new(&mut result, "loading settings");
///         *guard = Err(DecoratedError::new("missing key `port`"));
///     }
///     result
/// }
///
/// assert_eq!(load().unwrap_err().to_string(), "loading settings: missing key `port`");
/// ```
#[must_use = "the annotation is applied when the guard is dropped; binding it to `_` applies it immediately"]
pub struct OnError<'a, S, A>
where
    S: ErrorSlot,
    S::Error: Annotate,
    A: IntoAnnotation,
{
    slot: &'a mut S,
    annotation: Option<A>,
}

impl<'a, S, A> OnError<'a, S, A>
where
    S: ErrorSlot,
    S::Error: Annotate,
    A: IntoAnnotation,
{
    /// Schedules `annotation` to be applied to `slot` when the guard drops.
    #[inline]
    pub fn new(slot: &'a mut S, annotation: A) -> Self {
        Self { slot, annotation: Some(annotation) }
    }

    /// Applies the annotation now instead of at scope exit.
    ///
    /// The annotation still runs only once; dropping a finished guard does
    /// nothing.
    #[inline]
    pub fn finish(mut self) {
        self.apply();
    }

    fn apply(&mut self) {
        if let Some(annotation) = self.annotation.take() {
            annotate_slot(&mut *self.slot, annotation);
        }
    }
}

impl<S, A> Deref for OnError<'_, S, A>
where
    S: ErrorSlot,
    S::Error: Annotate,
    A: IntoAnnotation,
{
    type Target = S;

    #[inline]
    fn deref(&self) -> &S {
        &*self.slot
    }
}

impl<S, A> DerefMut for OnError<'_, S, A>
where
    S: ErrorSlot,
    S::Error: Annotate,
    A: IntoAnnotation,
{
    #[inline]
    fn deref_mut(&mut self) -> &mut S {
        &mut *self.slot
    }
}

impl<S, A> Drop for OnError<'_, S, A>
where
    S: ErrorSlot,
    S::Error: Annotate,
    A: IntoAnnotation,
{
    fn drop(&mut self) {
        self.apply();
    }
}

/// Schedules `annotation` for `slot`. Shorthand for [`OnError::new`].
///
/// See [`on_error!`](crate::on_error) for the `format!`-style form.
///
/// # Examples
///
/// ```
/// use error_decorate::decorate::on_error;
///
/// let mut slot: Option<String> = None;
/// {
///     let mut guard = on_error(&mut slot, "flushing cache");
///     *guard = Some("disk full".to_string());
/// }
/// assert_eq!(slot.as_deref(), Some("flushing cache: disk full"));
/// ```
#[inline]
pub fn on_error<S, A>(slot: &mut S, annotation: A) -> OnError<'_, S, A>
where
    S: ErrorSlot,
    S::Error: Annotate,
    A: IntoAnnotation,
{
    OnError::new(slot, annotation)
}
