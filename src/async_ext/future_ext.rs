//! Future adapters that decorate a future's output once it resolves.
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::fmt::Display;

use pin_project_lite::pin_project;
use tracing::Span;

use crate::decorate::{annotate_slot, log_slot};
use crate::sink::{LogSink, TracingSink};
use crate::traits::{Annotate, ErrorSlot, IntoAnnotation};

/// Extension trait that schedules decoration of a future's output.
///
/// The output must be an [`ErrorSlot`], typically a `Result`. The action runs
/// once, when the inner future resolves; pending polls pass through.
///
/// # Example
///
/// ```rust,ignore
/// use error_decorate::async_ext::FutureDecorateExt;
///
/// async fn fetch_profile(id: u64) -> Result<Profile, DecoratedError> {
///     client.get_profile(id)
///         .annotate_on_error(annotation!("fetching profile {}", id))
///         .log_on_error()
///         .await
/// }
/// ```
pub trait FutureDecorateExt: Future + Sized {
    /// Annotates the output's error when the future resolves.
    fn annotate_on_error<A>(self, annotation: A) -> AnnotateOnError<Self, A>
    where
        Self::Output: ErrorSlot,
        <Self::Output as ErrorSlot>::Error: Annotate,
        A: IntoAnnotation,
    {
        AnnotateOnError { inner: self, annotation: Some(annotation) }
    }

    /// Logs the output's error through `tracing` when the future resolves.
    fn log_on_error(self) -> LogOnErrorFuture<Self, TracingSink>
    where
        Self::Output: ErrorSlot,
        <Self::Output as ErrorSlot>::Error: Display,
    {
        LogOnErrorFuture { inner: self, sink: TracingSink, span: None }
    }

    /// Logs the output's error through `tracing`, inside `span`.
    fn log_on_error_in(self, span: Span) -> LogOnErrorFuture<Self, TracingSink>
    where
        Self::Output: ErrorSlot,
        <Self::Output as ErrorSlot>::Error: Display,
    {
        LogOnErrorFuture { inner: self, sink: TracingSink, span: Some(span) }
    }

    /// Logs the output's error to `sink` when the future resolves.
    fn log_on_error_to<L>(self, sink: L) -> LogOnErrorFuture<Self, L>
    where
        Self::Output: ErrorSlot,
        <Self::Output as ErrorSlot>::Error: Display,
        L: LogSink,
    {
        LogOnErrorFuture { inner: self, sink, span: None }
    }
}

impl<F: Future> FutureDecorateExt for F {}

pin_project! {
    /// Future that annotates its output's error on completion.
    ///
    /// Created by [`FutureDecorateExt::annotate_on_error`].
    #[must_use = "futures do nothing unless polled"]
    pub struct AnnotateOnError<F, A> {
        #[pin]
        inner: F,
        annotation: Option<A>,
    }
}

impl<F, A> Future for AnnotateOnError<F, A>
where
    F: Future,
    F::Output: ErrorSlot,
    <F::Output as ErrorSlot>::Error: Annotate,
    A: IntoAnnotation,
{
    type Output = F::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.inner.poll(cx) {
            Poll::Ready(mut output) => {
                if let Some(annotation) = this.annotation.take() {
                    annotate_slot(&mut output, annotation);
                }
                Poll::Ready(output)
            },
            Poll::Pending => Poll::Pending,
        }
    }
}

pin_project! {
    /// Future that logs its output's error on completion.
    ///
    /// Created by [`FutureDecorateExt::log_on_error`] and friends.
    #[must_use = "futures do nothing unless polled"]
    pub struct LogOnErrorFuture<F, L> {
        #[pin]
        inner: F,
        sink: L,
        span: Option<Span>,
    }
}

impl<F, L> LogOnErrorFuture<F, L> {
    /// Emits the record inside `span`.
    #[inline]
    pub fn in_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}

impl<F, L> Future for LogOnErrorFuture<F, L>
where
    F: Future,
    F::Output: ErrorSlot,
    <F::Output as ErrorSlot>::Error: Display,
    L: LogSink,
{
    type Output = F::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.inner.poll(cx) {
            Poll::Ready(output) => {
                log_slot(&*this.sink, this.span.as_ref(), &output);
                Poll::Ready(output)
            },
            Poll::Pending => Poll::Pending,
        }
    }
}
