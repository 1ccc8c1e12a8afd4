//! Core traits for error decoration.
//!
//! - [`ErrorSlot`]: a value holding either absence or one error
//! - [`Annotate`]: in-place rewriting of an error with a prefix message
//! - [`IntoAnnotation`]: conversion into the prefix message
//! - [`DecorateExt`]: eager annotate/log on slot values
//!
//! # Examples
//!
//! ```
//! use error_decorate::traits::{DecorateExt, ErrorSlot};
//!
//! let slot: Option<String> = Some("timed out".to_string());
//! let slot = slot.annotate_err("waiting for lease");
//!
//! assert_eq!(slot.error().map(String::as_str), Some("waiting for lease: timed out"));
//! ```

pub mod annotate;
pub mod decorate_ext;
pub mod error_slot;
pub mod into_annotation;

pub use annotate::Annotate;
pub use decorate_ext::DecorateExt;
pub use error_slot::ErrorSlot;
pub use into_annotation::IntoAnnotation;
