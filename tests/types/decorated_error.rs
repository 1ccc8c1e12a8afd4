use std::error::Error;
use std::fmt;
use std::io;

use error_decorate::{annotation, DecoratedError};

#[derive(Debug)]
struct ParseFailure {
    line: usize,
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unexpected token on line {}", self.line)
    }
}

impl Error for ParseFailure {}

#[test]
fn plain_error_has_no_cause() {
    let err = DecoratedError::new("Some error");

    assert_eq!(err.to_string(), "Some error");
    assert!(err.cause().is_none());
    assert!(err.source().is_none());
    assert_eq!(err.chain().count(), 1);
    assert_eq!(err.root_cause().to_string(), "Some error");
}

#[test]
fn wrapped_error_renders_message_then_cause() {
    let err = DecoratedError::wrap(annotation!("loading {}", "schema.sql"), ParseFailure { line: 12 });

    assert_eq!(err.to_string(), "loading schema.sql: unexpected token on line 12");
    assert_eq!(err.message(), "loading schema.sql");
    assert_eq!(err.find_cause::<ParseFailure>().unwrap().line, 12);
}

#[test]
fn chain_walks_every_source() {
    let inner = DecoratedError::wrap("reading block", io::Error::new(io::ErrorKind::Other, "bad sector"));
    let outer = DecoratedError::wrap("restoring backup", inner);

    let rendered: Vec<String> = outer.chain().map(|err| err.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "restoring backup: reading block: bad sector".to_string(),
            "reading block: bad sector".to_string(),
            "bad sector".to_string(),
        ]
    );
    assert!(outer.root_cause().downcast_ref::<io::Error>().is_some());
}

#[test]
fn find_cause_skips_self() {
    let err = DecoratedError::new("alone");
    assert!(err.find_cause::<DecoratedError>().is_none());
}

#[test]
fn into_cause_returns_wrapped_error() {
    let err = DecoratedError::wrap("saving", ParseFailure { line: 1 });
    let cause = err.into_cause().unwrap();

    assert!(cause.downcast_ref::<ParseFailure>().is_some());
}

#[test]
fn conversions_from_strings() {
    let from_static: DecoratedError = "static".into();
    let from_owned: DecoratedError = String::from("owned").into();

    assert_eq!(from_static.message(), "static");
    assert_eq!(from_owned.message(), "owned");
}

#[test]
fn decorated_error_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<DecoratedError>();
}

#[cfg(feature = "serde")]
#[test]
fn decorated_error_serializes_message_and_cause() {
    let err = DecoratedError::wrap("compacting", DecoratedError::new("Some error"));
    let json = serde_json::to_value(&err).unwrap();

    assert_eq!(json, serde_json::json!({ "message": "compacting", "cause": "Some error" }));

    let plain = serde_json::to_value(DecoratedError::new("Some error")).unwrap();
    assert_eq!(plain, serde_json::json!({ "message": "Some error", "cause": null }));
}
