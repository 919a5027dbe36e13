#![allow(clippy::unwrap_used, clippy::expect_used)]

use execlog_core::logging_facility::test_capture::init_test_capture;
use execlog_core::{log_method_end, log_method_start, ExecutionLogger};
use execlog_core_types::schema::{
    EVENT_END_IGNORED, EVENT_METHOD_END, EVENT_METHOD_START, EVENT_METHOD_STEP, EVENT_REJECTED,
    FIELD_DEPTH, FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_ERR_OP, FIELD_LOGGER_ID,
};

#[test]
fn test_every_line_is_mirrored_once() {
    let capture = init_test_capture();
    let mut logger = ExecutionLogger::new("mirror_unique_1");

    logger.start_method("Outer");
    logger.start_method("Inner");
    logger.log_method_step("work").unwrap();
    logger.end_method();
    logger.end_method();

    let events = capture.events_for_logger("mirror_unique_1");
    let kinds: Vec<&str> = events.iter().filter_map(|e| e.event.as_deref()).collect();
    assert_eq!(
        kinds,
        vec![
            EVENT_METHOD_START,
            EVENT_METHOD_START,
            EVENT_METHOD_STEP,
            EVENT_METHOD_END,
            EVENT_METHOD_END,
        ]
    );
    assert_eq!(events.len(), logger.get_log().lines().count());
}

#[test]
fn test_events_carry_depth_and_timing() {
    let capture = init_test_capture();
    let mut logger = ExecutionLogger::new("mirror_unique_2");

    logger.start_method("Outer");
    logger.start_method("Inner");
    logger.end_method();

    let events = capture.events_for_logger("mirror_unique_2");
    let inner_start = events
        .iter()
        .find(|e| e.method.as_deref() == Some("Inner") && e.event.as_deref() == Some(EVENT_METHOD_START))
        .expect("Should have inner start event");
    assert_eq!(inner_start.fields.get(FIELD_DEPTH), Some(&"1".to_string()));

    let inner_end = events
        .iter()
        .find(|e| e.method.as_deref() == Some("Inner") && e.event.as_deref() == Some(EVENT_METHOD_END))
        .expect("Should have inner end event");
    assert!(inner_end.fields.contains_key(FIELD_DURATION_MS));
    assert_eq!(
        inner_end.fields.get(FIELD_LOGGER_ID),
        Some(&logger.logger_id().to_string())
    );
}

#[test]
fn test_rejected_step_emits_warning_with_code() {
    let capture = init_test_capture();
    let mut logger = ExecutionLogger::new("mirror_unique_3");

    assert!(logger.log_method_step("idle").is_err());

    let rejected = capture.count_events(|e| {
        e.logger.as_deref() == Some("mirror_unique_3")
            && e.event.as_deref() == Some(EVENT_REJECTED)
            && e.fields.get(FIELD_ERR_CODE).map(String::as_str) == Some("ERR_INVALID_OPERATION")
    });
    assert_eq!(rejected, 1);
}

#[test]
fn test_rejected_event_names_operation_and_kind() {
    let capture = init_test_capture();
    let mut logger = ExecutionLogger::new("mirror_unique_6");

    assert!(logger.log_method_step("idle").is_err());

    let rejected = capture
        .events_for_logger("mirror_unique_6")
        .into_iter()
        .find(|e| e.event.as_deref() == Some(EVENT_REJECTED))
        .expect("Should have rejected event");
    assert_eq!(
        rejected.fields.get(FIELD_ERR_OP).map(String::as_str),
        Some("log_method_step")
    );
    assert_eq!(
        rejected.fields.get(FIELD_ERR_KIND).map(String::as_str),
        Some("InvalidOperation")
    );
    let message = rejected.fields.get("message").expect("Should have message");
    assert!(message.contains("(logger: mirror_unique_6)"));
}

#[test]
fn test_ignored_end_emits_event() {
    let capture = init_test_capture();
    let mut logger = ExecutionLogger::new("mirror_unique_4");

    logger.end_method();

    let ignored = capture.count_events(|e| {
        e.logger.as_deref() == Some("mirror_unique_4") && e.event.as_deref() == Some(EVENT_END_IGNORED)
    });
    assert_eq!(ignored, 1);
}

#[test]
fn test_macros_directly() {
    let capture = init_test_capture();

    log_method_start!("mirror_unique_5", "Direct", depth = 0u64);
    log_method_end!("mirror_unique_5", "Direct", duration_ms = 42u64);

    capture.assert_event_exists("Direct", EVENT_METHOD_START);
    let end = capture
        .events_for_logger("mirror_unique_5")
        .into_iter()
        .find(|e| e.event.as_deref() == Some(EVENT_METHOD_END))
        .expect("Should have end event");
    assert_eq!(end.fields.get(FIELD_DURATION_MS), Some(&"42".to_string()));
}
