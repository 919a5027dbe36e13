use std::sync::Arc;

use chrono::{Local, TimeZone};
use execlog_core::{ExecutionLogger, LoggerConfig, ManualClock};

/// Wall-clock time every manual clock starts at
#[allow(dead_code)]
pub const START_STAMP: &str = "2024-05-01 09:30:00.000";

/// Create a manual clock frozen at 2024-05-01 09:30:00 local time
#[allow(dead_code)]
pub fn fixed_clock() -> ManualClock {
    let wall = Local
        .with_ymd_and_hms(2024, 5, 1, 9, 30, 0)
        .single()
        .unwrap();
    ManualClock::new(wall)
}

/// Create a logger driven by a fixed manual clock
///
/// The returned clock shares state with the logger's, so advancing it moves
/// the logger's time too.
#[allow(dead_code)]
pub fn manual_logger(name: &str) -> (ExecutionLogger, ManualClock) {
    let clock = fixed_clock();
    let logger = ExecutionLogger::new(name).with_clock(Arc::new(clock.clone()));
    (logger, clock)
}

/// Same as `manual_logger`, with a custom configuration
#[allow(dead_code)]
pub fn manual_logger_with(name: &str, config: LoggerConfig) -> (ExecutionLogger, ManualClock) {
    let clock = fixed_clock();
    let logger = ExecutionLogger::with_config(name, config)
        .unwrap()
        .with_clock(Arc::new(clock.clone()));
    (logger, clock)
}

/// Number of leading tab characters on a line
#[allow(dead_code)]
pub fn indent_of(line: &str) -> usize {
    line.chars().take_while(|c| *c == '\t').count()
}

/// Lines of the logger's buffer, owned
#[allow(dead_code)]
pub fn lines(logger: &ExecutionLogger) -> Vec<String> {
    logger.get_log().lines().map(str::to_string).collect()
}
