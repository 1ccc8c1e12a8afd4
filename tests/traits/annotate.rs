use std::error::Error;
use std::io;

use error_decorate::traits::Annotate;
use error_decorate::{Annotation, BoxError, DecoratedError};

#[test]
fn decorated_error_annotation_wraps_previous() {
    let err = DecoratedError::new("refused").annotated("connecting to 10.0.0.1");

    assert_eq!(err.message(), "connecting to 10.0.0.1");
    assert_eq!(err.cause().unwrap().to_string(), "refused");
    assert_eq!(err.to_string(), "connecting to 10.0.0.1: refused");
}

#[test]
fn boxed_decorated_error_annotates_in_place() {
    let mut err = Box::new(DecoratedError::new("refused"));
    err.annotate(Annotation::new("connecting"));

    assert_eq!(err.to_string(), "connecting: refused");
}

#[test]
fn box_error_becomes_decorated_error() {
    let original: BoxError = Box::new(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
    let err = original.annotated("streaming response");

    assert_eq!(err.to_string(), "streaming response: pipe closed");
    let decorated = err.downcast_ref::<DecoratedError>().unwrap();
    assert_eq!(decorated.find_cause::<io::Error>().unwrap().kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn io_error_keeps_kind_and_source() {
    let err = io::Error::new(io::ErrorKind::PermissionDenied, "read-only filesystem")
        .annotated("writing snapshot");

    assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    assert_eq!(err.to_string(), "writing snapshot: read-only filesystem");
    assert!(err.source().is_some());
}

#[test]
fn io_error_from_kind_only() {
    let err = io::Error::from(io::ErrorKind::UnexpectedEof).annotated("reading header");

    assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    assert!(err.to_string().starts_with("reading header: "));
}

#[test]
fn string_annotation_prepends() {
    let err = String::from("timeout").annotated("waiting for ack").annotated("sending batch");
    assert_eq!(err, "sending batch: waiting for ack: timeout");
}
