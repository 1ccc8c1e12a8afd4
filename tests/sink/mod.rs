use error_decorate::sink::{LogRecord, LogSink, Recorder, TracingSink};

use crate::support::capture_logs;

#[test]
fn recorder_clones_share_records() {
    let recorder = Recorder::new();
    let clone = recorder.clone();

    clone.log_error(&"disk quota exceeded");

    assert_eq!(recorder.len(), 1);
    assert_eq!(
        recorder.records(),
        vec![LogRecord { message: "disk quota exceeded".to_string(), span: None }]
    );
}

#[test]
fn recorder_clear_discards_records() {
    let recorder = Recorder::new();
    recorder.log_error(&"a");
    recorder.log_error(&"b");
    assert_eq!(recorder.messages(), vec!["a".to_string(), "b".to_string()]);

    recorder.clear();
    assert!(recorder.is_empty());
}

#[test]
fn tracing_sink_emits_error_level_record() {
    let out = capture_logs(|| TracingSink.log_error(&"index corrupted"));

    assert!(out.contains("ERROR"), "{out:?}");
    assert!(out.contains("index corrupted"), "{out:?}");
}

#[test]
fn tracing_sink_enters_span_for_context() {
    let out = capture_logs(|| {
        let span = tracing::warn_span!("migration", version = 12);
        TracingSink.log_error_in(&span, &"column missing");
    });

    assert!(out.contains("migration"), "{out:?}");
    assert!(out.contains("version=12"), "{out:?}");
    assert!(out.contains("column missing"), "{out:?}");
}

#[test]
fn sink_references_forward() {
    let recorder = Recorder::new();
    let by_ref: &dyn LogSink = &recorder;

    by_ref.log_error(&format_args!("retry {} of {}", 3, 5));

    assert_eq!(recorder.messages(), vec!["retry 3 of 5".to_string()]);
}
