use std::borrow::Cow;

use error_decorate::Annotation;

#[test]
fn static_annotation_borrows() {
    let annotation = Annotation::new("flushing wal");

    assert_eq!(annotation.message(), "flushing wal");
    assert!(matches!(annotation.into_message(), Cow::Borrowed("flushing wal")));
}

#[test]
fn owned_annotation_displays_message() {
    let annotation = Annotation::new(format!("shard {}", 5));
    assert_eq!(format!("{annotation}"), "shard 5");
}

#[cfg(feature = "serde")]
#[test]
fn annotation_serializes_as_string() {
    let json = serde_json::to_string(&Annotation::new("resizing pool")).unwrap();
    assert_eq!(json, "\"resizing pool\"");
}
