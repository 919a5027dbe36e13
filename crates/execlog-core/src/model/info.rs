use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};

use super::step::ExecutionStep;
use crate::clock::{system_clock, Clock};
use crate::errors::{ExecLogError, Result};

/// Stopwatch phases: not yet started, running since a monotonic reading,
/// or frozen at a total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Stopwatch {
    #[default]
    Idle,
    Running { started: Duration },
    Stopped { total: Duration },
}

/// One method invocation being (or having been) logged
///
/// Lifecycle is `new` → `start` → any number of `add_step` → `stop`.
/// Calls out of that order fail with an `InvalidState` kind error and leave
/// the record unchanged.
#[derive(Debug, Clone)]
pub struct ExecutionInfo {
    method_identity: String,
    start_timestamp: Option<DateTime<Local>>,
    end_timestamp: Option<DateTime<Local>>,
    stopwatch: Stopwatch,
    steps: Vec<ExecutionStep>,
    clock: Arc<dyn Clock>,
    /// Assigned by the owning logger; 0 for records built outside one.
    frame_id: u64,
}

impl ExecutionInfo {
    /// Create an unstarted record timed by the system clock
    pub fn new(method_identity: impl Into<String>) -> Self {
        Self::with_clock(method_identity, system_clock())
    }

    /// Create an unstarted record timed by `clock`
    pub fn with_clock(method_identity: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        Self {
            method_identity: method_identity.into(),
            start_timestamp: None,
            end_timestamp: None,
            stopwatch: Stopwatch::Idle,
            steps: Vec::new(),
            clock,
            frame_id: 0,
        }
    }

    pub(crate) fn with_frame_id(mut self, frame_id: u64) -> Self {
        self.frame_id = frame_id;
        self
    }

    pub(crate) fn frame_id(&self) -> u64 {
        self.frame_id
    }

    /// Wall-clock reading from the clock timing this record
    pub(crate) fn wall_now(&self) -> DateTime<Local> {
        self.clock.wall_now()
    }

    /// Record the start timestamp and start the timer
    ///
    /// # Errors
    /// * `AlreadyStarted` - If the record was started before
    pub fn start(&mut self) -> Result<()> {
        if self.stopwatch != Stopwatch::Idle {
            return Err(ExecLogError::AlreadyStarted {
                method: self.method_identity.clone(),
            });
        }
        self.start_timestamp = Some(self.clock.wall_now());
        self.stopwatch = Stopwatch::Running {
            started: self.clock.monotonic_now(),
        };
        Ok(())
    }

    /// Append an unnamed step timed against the running timer
    ///
    /// # Errors
    /// * `NotStarted` - If `start` was never called
    /// * `AlreadyStopped` - If `stop` was already called
    pub fn add_step(&mut self, description: impl Into<String>) -> Result<&ExecutionStep> {
        self.push_step(None, description.into())
    }

    /// Append a named step timed against the running timer
    ///
    /// # Errors
    /// * `NotStarted` - If `start` was never called
    /// * `AlreadyStopped` - If `stop` was already called
    pub fn add_named_step(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<&ExecutionStep> {
        self.push_step(Some(name.into()), description.into())
    }

    fn push_step(&mut self, name: Option<String>, description: String) -> Result<&ExecutionStep> {
        let started = self.running_since("add_step")?;
        let elapsed = to_millis(self.clock.monotonic_now().saturating_sub(started));
        let delta = self
            .steps
            .last()
            .map(|previous| elapsed.saturating_sub(previous.elapsed_milliseconds()))
            .unwrap_or(0);

        self.steps
            .push(ExecutionStep::new(name, description, elapsed, delta));
        let index = self.steps.len() - 1;
        Ok(&self.steps[index])
    }

    /// Record the end timestamp and freeze the timer
    ///
    /// # Errors
    /// * `NotStarted` - If `start` was never called
    /// * `AlreadyStopped` - If `stop` was already called
    pub fn stop(&mut self) -> Result<()> {
        let started = self.running_since("stop")?;
        let total = self.clock.monotonic_now().saturating_sub(started);
        self.end_timestamp = Some(self.clock.wall_now());
        self.stopwatch = Stopwatch::Stopped { total };
        Ok(())
    }

    fn running_since(&self, op: &str) -> Result<Duration> {
        match self.stopwatch {
            Stopwatch::Running { started } => Ok(started),
            Stopwatch::Idle => Err(ExecLogError::NotStarted {
                method: self.method_identity.clone(),
                op: op.to_string(),
            }),
            Stopwatch::Stopped { .. } => Err(ExecLogError::AlreadyStopped {
                method: self.method_identity.clone(),
                op: op.to_string(),
            }),
        }
    }

    /// Delta recorded on the most recent step, 0 when there are no steps
    pub fn delta_with_previous_step(&self) -> u64 {
        self.steps
            .last()
            .map(ExecutionStep::delta_with_previous_step)
            .unwrap_or(0)
    }

    /// Timer reading: 0 before start, live while running, frozen after stop
    pub fn elapsed(&self) -> Duration {
        match self.stopwatch {
            Stopwatch::Idle => Duration::ZERO,
            Stopwatch::Running { started } => self.clock.monotonic_now().saturating_sub(started),
            Stopwatch::Stopped { total } => total,
        }
    }

    pub fn elapsed_milliseconds(&self) -> u64 {
        to_millis(self.elapsed())
    }

    pub fn method_identity(&self) -> &str {
        &self.method_identity
    }

    pub fn start_timestamp(&self) -> Option<DateTime<Local>> {
        self.start_timestamp
    }

    pub fn end_timestamp(&self) -> Option<DateTime<Local>> {
        self.end_timestamp
    }

    /// Steps in the order they were added
    pub fn steps(&self) -> &[ExecutionStep] {
        &self.steps
    }

    pub fn last_step(&self) -> Option<&ExecutionStep> {
        self.steps.last()
    }

    pub fn is_running(&self) -> bool {
        matches!(self.stopwatch, Stopwatch::Running { .. })
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self.stopwatch, Stopwatch::Stopped { .. })
    }
}

fn to_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
