#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{indent_of, lines, manual_logger, START_STAMP};
use execlog_core::{ExErrorKind, ExecutionLogger};

#[test]
fn test_nested_start_end_produces_mirrored_lines() {
    let (mut logger, _clock) = manual_logger("L");

    logger.start_method("Main");
    logger.start_method("Inner");
    logger.end_method();
    logger.end_method();

    let lines = lines(&logger);
    assert_eq!(lines.len(), 4);

    assert!(lines[0].contains(">> Method 'Main'"));
    assert!(lines[1].contains(">> Method 'Inner'"));
    assert!(lines[2].contains("<< Method 'Inner'"));
    assert!(lines[3].contains("<< Method 'Main'"));

    let indents: Vec<usize> = lines.iter().map(|l| indent_of(l)).collect();
    assert_eq!(indents, vec![0, 1, 1, 0]);
}

#[test]
fn test_exact_default_lines() {
    let (mut logger, clock) = manual_logger("L");

    logger.start_method("Main");
    clock.advance_ms(7);
    logger.log_method_step("did X").unwrap();
    clock.advance_ms(3);
    logger.end_method();

    let expected = format!(
        "[L]  >> Method 'Main' start at {start}\n\
         \t[L]  Method 'Main': did X at 2024-05-01 09:30:00.007, elapsed from start: 7 ms, delta=0 ms\n\
         [L]  << Method 'Main' end at 2024-05-01 09:30:00.010, duration: 10 ms\n",
        start = START_STAMP
    );
    assert_eq!(logger.get_log(), expected);
}

#[test]
fn test_step_is_nested_under_its_method_and_keeps_depth() {
    let (mut logger, _clock) = manual_logger("L");

    logger.start_method("M");
    logger.log_method_step("did X").unwrap();
    assert_eq!(logger.nesting_level(), 1);
    logger.end_method();

    let lines = lines(&logger);
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("did X"));
    assert_eq!(indent_of(&lines[0]), 0);
    assert_eq!(indent_of(&lines[1]), 1);
    assert_eq!(indent_of(&lines[2]), 0);
}

#[test]
fn test_named_steps_report_delta_between_steps() {
    let (mut logger, clock) = manual_logger("L");

    logger.start_method("M");
    clock.advance_ms(10);
    logger.log_named_method_step("a", "first").unwrap();
    clock.advance_ms(15);
    logger.log_named_method_step("b", "second").unwrap();

    let lines = lines(&logger);
    assert!(lines[1].contains("[Step: a]: first"));
    assert!(lines[1].ends_with("elapsed from start: 10 ms, delta=0 ms"));
    assert!(lines[2].contains("[Step: b]: second"));
    assert!(lines[2].ends_with("elapsed from start: 25 ms, delta=15 ms"));
}

#[test]
fn test_clear_log_keeps_stack_depth() {
    let (mut logger, _clock) = manual_logger("L");
    logger.start_method("A");
    logger.start_method("B");

    logger.clear_log();

    assert!(logger.get_log().is_empty());
    assert_eq!(logger.nesting_level(), 2);
    assert_eq!(logger.current_method(), Some("B"));
}

#[test]
fn test_clear_stack_keeps_text() {
    let (mut logger, _clock) = manual_logger("L");
    logger.start_method("A");
    logger.start_method("B");
    let before = logger.get_log();

    logger.clear_logged_methods_stack();

    assert_eq!(logger.nesting_level(), 0);
    assert!(logger.is_idle());
    assert_eq!(logger.get_log(), before);
}

#[test]
fn test_clear_all_resets_everything() {
    let (mut logger, _clock) = manual_logger("L");
    logger.start_method("A");

    logger.clear_all();

    assert!(logger.get_log().is_empty());
    assert_eq!(logger.nesting_level(), 0);

    // A fresh method after clearing starts at the outermost level again
    logger.start_method("B");
    assert_eq!(indent_of(&lines(&logger)[0]), 0);
}

#[test]
fn test_end_on_empty_stack_does_not_touch_buffer() {
    let (mut logger, _clock) = manual_logger("L");
    logger.start_method("A");
    logger.end_method();
    let before = logger.get_log();

    assert!(logger.end_method().is_none());
    assert!(logger.end_method().is_none());

    assert_eq!(logger.get_log(), before);
}

#[test]
fn test_step_without_active_method_is_invalid_operation() {
    let (mut logger, _clock) = manual_logger("L");

    let err = logger.log_named_method_step("s", "nothing running").unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidOperation);
    assert!(logger.get_log().is_empty());
}

#[test]
fn test_get_log_twice_is_identical() {
    let (mut logger, _clock) = manual_logger("L");
    logger.start_method("A");
    logger.log_method_step("x").unwrap();

    assert_eq!(logger.get_log(), logger.get_log());
}

#[test]
fn test_disabled_logger_name_never_appears() {
    let (mut logger, _clock) = manual_logger("Named");
    logger.set_logger_name_enabled(false);

    logger.start_method("A");
    logger.log_method_step("x").unwrap();
    logger.end_method();

    assert!(!logger.get_log().contains("[Named]"));
    assert!(lines(&logger)[0].starts_with(" >> Method 'A'"));
}

#[test]
fn test_independent_instances_do_not_share_state() {
    let mut first = ExecutionLogger::new("first");
    let mut second = ExecutionLogger::new("second");

    first.start_method("A");
    first.start_method("B");
    second.start_method("C");

    assert_eq!(first.nesting_level(), 2);
    assert_eq!(second.nesting_level(), 1);
    assert!(!second.get_log().contains("'A'"));
    assert_ne!(first.logger_id(), second.logger_id());
}

#[test]
fn test_unmatched_starts_stay_on_stack() {
    let (mut logger, _clock) = manual_logger("L");
    logger.start_method("A");
    logger.start_method("B");
    logger.end_method();

    assert_eq!(logger.nesting_level(), 1);
    assert_eq!(logger.current_method(), Some("A"));
}

#[test]
fn test_end_method_returns_finished_record() {
    let (mut logger, clock) = manual_logger("L");
    logger.start_method("A");
    clock.advance_ms(4);
    logger.log_method_step("one").unwrap();
    clock.advance_ms(6);

    let info = logger.end_method().unwrap();

    assert_eq!(info.method_identity(), "A");
    assert!(info.is_stopped());
    assert_eq!(info.elapsed_milliseconds(), 10);
    assert_eq!(info.steps().len(), 1);
    assert_eq!(info.steps()[0].elapsed_milliseconds(), 4);
}
