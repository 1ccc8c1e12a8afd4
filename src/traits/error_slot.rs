//! Abstraction over values that hold either "no error" or one error.
//!
//! Decoration works on any [`ErrorSlot`]. Two shapes are supported out of
//! the box:
//!
//! | Slot | Absence | Error |
//! |------|---------|-------|
//! | `Option<E>` | `None` | `Some(e)` |
//! | `Result<T, E>` | `Ok(_)` | `Err(e)` |
//!
//! # Examples
//!
//! ```
//! use error_decorate::traits::ErrorSlot;
//!
//! let ok: Result<u8, &str> = Ok(1);
//! let failed: Option<&str> = Some("boom");
//!
//! assert!(ok.error().is_none());
//! assert_eq!(failed.error(), Some(&"boom"));
//! ```

/// A slot holding either absence or a single error value.
pub trait ErrorSlot {
    /// The error type stored in the slot.
    type Error;

    /// Returns the error, or `None` when the slot holds absence.
    fn error(&self) -> Option<&Self::Error>;

    /// Returns mutable access to the error, or `None` when the slot holds absence.
    fn error_mut(&mut self) -> Option<&mut Self::Error>;

    /// Returns `true` when the slot holds an error.
    #[inline]
    fn has_error(&self) -> bool {
        self.error().is_some()
    }
}

impl<E> ErrorSlot for Option<E> {
    type Error = E;

    #[inline]
    fn error(&self) -> Option<&E> {
        self.as_ref()
    }

    #[inline]
    fn error_mut(&mut self) -> Option<&mut E> {
        self.as_mut()
    }
}

impl<T, E> ErrorSlot for Result<T, E> {
    type Error = E;

    #[inline]
    fn error(&self) -> Option<&E> {
        self.as_ref().err()
    }

    #[inline]
    fn error_mut(&mut self) -> Option<&mut E> {
        self.as_mut().err()
    }
}
