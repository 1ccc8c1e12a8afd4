//! Async extensions for error decoration.
//!
//! Requires the `async` feature:
//!
//! ```toml
//! [dependencies]
//! error-decorate = { version = "0.1", features = ["async"] }
//! ```
//!
//! A future cannot hold a guard across its own completion the way a
//! synchronous scope does, so decoration is attached to the future instead
//! and runs when it resolves.

mod future_ext;

pub use future_ext::{AnnotateOnError, FutureDecorateExt, LogOnErrorFuture};
