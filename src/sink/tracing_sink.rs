use std::fmt::Display;

use super::LogSink;

/// Sink that emits records through `tracing::error!`.
///
/// Records go to whichever subscriber is current for the calling thread, so
/// output destination and formatting belong to the subscriber.
///
/// # Examples
///
/// ```
/// use error_decorate::sink::{LogSink, TracingSink};
///
/// TracingSink.log_error(&"replica lagging");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TracingSink;

impl LogSink for TracingSink {
    #[inline]
    fn log_error(&self, message: &dyn Display) {
        tracing::error!("{}", message);
    }
}
