use std::cell::Cell;

use error_decorate::decorate::{log_fn_on_error, log_fn_on_error_in};
use error_decorate::DecoratedError;
use tracing::Span;

use crate::support::capture_logs;

#[test]
fn log_fn_on_error_without_error_logs_nothing() {
    let out = capture_logs(|| {
        log_fn_on_error(|| -> Result<(), DecoratedError> { Ok(()) });
    });

    assert!(out.is_empty(), "no error, no log: {out:?}");
}

#[test]
fn log_fn_on_error_logs_error() {
    let out = capture_logs(|| {
        log_fn_on_error(|| Err::<(), _>(DecoratedError::new("Some error")));
    });

    assert!(out.contains("Some error"), "the error should be logged: {out:?}");
}

#[test]
fn log_fn_on_error_invokes_once() {
    let calls = Cell::new(0);
    capture_logs(|| {
        log_fn_on_error(|| {
            calls.set(calls.get() + 1);
            Some("Some error")
        });
    });

    assert_eq!(calls.get(), 1);
}

#[test]
fn log_fn_on_error_accepts_option_results() {
    let out = capture_logs(|| {
        log_fn_on_error(|| None::<String>);
        log_fn_on_error(|| Some("lease expired".to_string()));
    });

    assert_eq!(out.lines().count(), 1);
    assert!(out.contains("lease expired"));
}

#[test]
fn log_fn_on_error_in_without_error_logs_nothing() {
    let out = capture_logs(|| {
        log_fn_on_error_in(&Span::current(), || Ok::<u8, &str>(1));
    });

    assert!(out.is_empty(), "no error, no log: {out:?}");
}

#[test]
fn log_fn_on_error_in_logs_with_span_fields() {
    let out = capture_logs(|| {
        let span = tracing::info_span!("job", job_id = "nightly");
        log_fn_on_error_in(&span, || Err::<(), _>("Some error"));
    });

    assert!(out.contains("Some error"), "the error should be logged: {out:?}");
    assert!(out.contains("job_id=\"nightly\""), "{out:?}");
}
