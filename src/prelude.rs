//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_decorate::prelude::*;
//!
//! fn checkpoint(step: u32) -> DecoratedResult<()> {
//!     let mut result: DecoratedResult<()> = Ok(());
//!     {
//!         let mut logged = log_on_error(&mut result);
//!         let mut guard = on_error!(&mut *logged, "checkpoint {}", step);
//!         *guard = Err(DecoratedError::new("journal closed"));
//!     }
//!     result
//! }
//!
//! assert_eq!(checkpoint(2).unwrap_err().to_string(), "checkpoint 2: journal closed");
//! ```

// Macros
pub use crate::{annotation, on_error};

// Core types
pub use crate::types::{Annotation, DecoratedError, DecoratedResult, LazyAnnotation};

// Decoration
pub use crate::decorate::{
    log_fn_on_error, log_fn_on_error_in, log_on_error, log_on_error_in, on_error, Decorator,
};
pub use crate::sink::{LogSink, TracingSink};

// Traits
pub use crate::traits::{Annotate, DecorateExt, ErrorSlot, IntoAnnotation};
