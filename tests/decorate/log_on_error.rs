use error_decorate::decorate::{log_on_error, log_on_error_in, on_error};
use error_decorate::DecoratedError;
use tracing::Span;

use crate::support::capture_logs;

fn logged_operation(fail: bool) -> Result<(), DecoratedError> {
    let mut result: Result<(), DecoratedError> = Ok(());
    {
        let mut result = log_on_error(&mut result);
        if fail {
            *result = Err(DecoratedError::new("Some error"));
        }
    }
    result
}

#[test]
fn log_on_error_without_error_logs_nothing() {
    let out = capture_logs(|| {
        assert!(logged_operation(false).is_ok());
    });

    assert!(out.is_empty(), "no error, no log: {out:?}");
}

#[test]
fn log_on_error_logs_error_once() {
    let mut err = None;
    let out = capture_logs(|| {
        err = logged_operation(true).err();
    });

    let err = err.unwrap();
    assert!(out.contains(&err.to_string()), "the error should be logged: {out:?}");
    assert!(out.contains("ERROR"));
    assert_eq!(out.matches("Some error").count(), 1);
}

#[test]
fn log_on_error_leaves_slot_unchanged() {
    let mut slot: Option<String> = None;
    capture_logs(|| {
        let mut guard = log_on_error(&mut slot);
        *guard = Some("Some error".to_string());
    });

    assert_eq!(slot.as_deref(), Some("Some error"));
}

#[test]
fn log_on_error_in_span_without_error_logs_nothing() {
    let out = capture_logs(|| {
        let span = tracing::info_span!("request", request_id = 42);
        let mut slot: Result<(), &str> = Ok(());
        let _guard = log_on_error_in(&span, &mut slot);
    });

    assert!(out.is_empty(), "no error, no log: {out:?}");
}

#[test]
fn log_on_error_in_span_attaches_span_fields() {
    let out = capture_logs(|| {
        let span = tracing::info_span!("request", request_id = 42);
        let mut slot: Result<(), &str> = Ok(());
        let mut guard = log_on_error_in(&span, &mut slot);
        *guard = Err("Some error");
    });

    assert!(out.contains("Some error"), "the error should be logged: {out:?}");
    assert!(out.contains("request_id=42"), "span fields should enrich the record: {out:?}");
}

#[test]
fn log_on_error_in_disabled_span_still_logs() {
    let out = capture_logs(|| {
        let mut slot: Option<&str> = None;
        let mut guard = log_on_error_in(&Span::none(), &mut slot);
        *guard = Some("Some error");
    });

    assert!(out.contains("Some error"));
}

#[test]
fn log_on_error_records_annotated_message() {
    let mut slot: Result<(), DecoratedError> = Ok(());
    let out = capture_logs(|| {
        let mut logged = log_on_error(&mut slot);
        let mut annotated = on_error(&mut *logged, "compacting segment 9");
        *annotated = Err(DecoratedError::new("Some error"));
    });

    assert!(out.contains("compacting segment 9: Some error"), "{out:?}");
    assert_eq!(slot.unwrap_err().to_string(), "compacting segment 9: Some error");
}

#[test]
fn finish_logs_exactly_once() {
    let out = capture_logs(|| {
        let mut slot: Option<&str> = Some("Some error");
        let guard = log_on_error(&mut slot);
        guard.finish();
    });

    assert_eq!(out.matches("Some error").count(), 1);
}
