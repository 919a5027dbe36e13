//! The execution logger
//!
//! An `ExecutionLogger` keeps a stack of in-flight method invocations and a
//! text buffer. `start_method` writes a "started" line and pushes,
//! `log_method_step` writes a step line for the active invocation,
//! `end_method` pops and writes an "ended" line. A started line and its
//! matching ended line are written at the same indentation: the depth of
//! that call frame, 0 for the outermost.
//!
//! A logger is a plain mutable value with no internal locking. Use one
//! instance per thread, task or request, or serialize access yourself.

use std::sync::Arc;

use chrono::{DateTime, Local};
use execlog_core_types::schema::EVENT_END_IGNORED;
use execlog_core_types::LoggerId;

use crate::clock::{system_clock, Clock};
use crate::config::{LoggerConfig, StepIdentity};
use crate::errors::{ExecLogError, Result};
use crate::format::render;
use crate::model::ExecutionInfo;
use crate::{log_method_end, log_method_start, log_method_step, log_rejected};

/// Per-instance method execution logger
#[derive(Debug)]
pub struct ExecutionLogger {
    name: String,
    id: LoggerId,
    config: LoggerConfig,
    clock: Arc<dyn Clock>,
    call_stack: Vec<ExecutionInfo>,
    /// Identity passed to the most recent `start_method`; survives pops.
    last_started: Option<String>,
    /// Last frame id handed out; never reset, so ids stay unique per logger.
    last_frame_id: u64,
    log: String,
}

impl ExecutionLogger {
    /// Create a logger with the default configuration and the system clock
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: LoggerId::new(),
            config: LoggerConfig::default(),
            clock: system_clock(),
            call_stack: Vec::new(),
            last_started: None,
            last_frame_id: 0,
            log: String::new(),
        }
    }

    /// Create a logger with a custom configuration
    ///
    /// # Errors
    /// * `InvalidFormat` / `InvalidConfig` - If the configuration fails validation
    pub fn with_config(name: impl Into<String>, config: LoggerConfig) -> Result<Self> {
        config.validate()?;
        let mut logger = Self::new(name);
        logger.config = config;
        Ok(logger)
    }

    /// Replace the time source used for invocations started from now on
    ///
    /// Invocations already on the stack keep the clock they started with,
    /// for their timing and for the timestamps on their step lines.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn logger_id(&self) -> &LoggerId {
        &self.id
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Replace the configuration
    ///
    /// Lines already in the buffer keep their old formatting. On error the
    /// current configuration stays in place.
    ///
    /// # Errors
    /// * `InvalidFormat` / `InvalidConfig` - If the configuration fails validation
    pub fn set_config(&mut self, config: LoggerConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Toggle the logger-name prefix on subsequent lines
    pub fn set_logger_name_enabled(&mut self, enabled: bool) {
        self.config.enable_logger_name = enabled;
    }

    /// Number of started, not yet ended methods
    pub fn nesting_level(&self) -> usize {
        self.call_stack.len()
    }

    pub fn is_idle(&self) -> bool {
        self.call_stack.is_empty()
    }

    /// Identity of the innermost active method
    pub fn current_method(&self) -> Option<&str> {
        self.call_stack.last().map(ExecutionInfo::method_identity)
    }

    pub fn current_execution(&self) -> Option<&ExecutionInfo> {
        self.call_stack.last()
    }

    pub(crate) fn top_frame_id(&self) -> Option<u64> {
        self.call_stack.last().map(ExecutionInfo::frame_id)
    }

    /// Begin logging a method invocation
    ///
    /// Writes the "started" line at the current depth, then pushes.
    pub fn start_method(&mut self, method_identity: impl Into<String>) {
        let identity = method_identity.into();
        self.last_frame_id += 1;
        let mut info = ExecutionInfo::with_clock(identity.clone(), Arc::clone(&self.clock))
            .with_frame_id(self.last_frame_id);
        if let Err(err) = info.start() {
            log_rejected!(self.name.as_str(), err);
        }
        let depth = self.call_stack.len();
        let started_at = info
            .start_timestamp()
            .unwrap_or_else(|| self.clock.wall_now());

        let mut body = String::new();
        body.push_str(&self.config.method_started_log_prefix);
        body.push_str(&self.quoted(&identity));
        body.push_str(&self.config.start_at_string);
        body.push_str(&self.stamp(started_at));
        self.append_line(depth, &body);

        log_method_start!(
            self.name.as_str(),
            identity.as_str(),
            logger_id = %self.id,
            depth = depth as u64,
        );

        self.last_started = Some(identity);
        self.call_stack.push(info);
    }

    /// Log an unnamed step of the active method
    ///
    /// # Errors
    /// * `NoActiveMethod` - If no method is active; the buffer is left as is
    pub fn log_method_step(&mut self, description: impl Into<String>) -> Result<()> {
        self.record_step(None, description.into())
    }

    /// Log a named step of the active method
    ///
    /// # Errors
    /// * `NoActiveMethod` - If no method is active; the buffer is left as is
    pub fn log_named_method_step(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<()> {
        self.record_step(Some(name.into()), description.into())
    }

    fn record_step(&mut self, name: Option<String>, description: String) -> Result<()> {
        match self.try_record_step(name, description) {
            Ok(()) => Ok(()),
            Err(err) => {
                log_rejected!(self.name.as_str(), err.clone());
                Err(err)
            }
        }
    }

    fn try_record_step(&mut self, name: Option<String>, description: String) -> Result<()> {
        let depth = self.call_stack.len();
        let Some(top) = self.call_stack.last_mut() else {
            return Err(ExecLogError::NoActiveMethod {
                op: "log_method_step".to_string(),
            });
        };

        let elapsed = match &name {
            Some(step_name) => top.add_named_step(step_name.clone(), description.clone())?,
            None => top.add_step(description.clone())?,
        }
        .elapsed_milliseconds();
        let delta = top.delta_with_previous_step();
        let step_at = top.wall_now();

        let identity = match self.config.step_identity {
            StepIdentity::StackTop => top.method_identity().to_string(),
            StepIdentity::LastStarted => self
                .last_started
                .clone()
                .unwrap_or_else(|| top.method_identity().to_string()),
        };

        let mut body = String::new();
        body.push_str(&self.config.method_step_log_prefix);
        body.push_str(&self.quoted(&identity));
        body.push_str(&self.config.step_name_separator);
        if let Some(step_name) = &name {
            body.push_str(&render(&self.config.step_name_format, &[step_name]));
        }
        body.push_str(&description);
        body.push_str(&self.config.at_string);
        body.push_str(&self.stamp(step_at));
        body.push_str(&render(
            &self.config.method_step_duration_format,
            &[&elapsed, &delta],
        ));
        self.append_line(depth, &body);

        log_method_step!(
            self.name.as_str(),
            identity.as_str(),
            logger_id = %self.id,
            depth = depth as u64,
            step_name = name.as_deref().unwrap_or_default(),
            description = description.as_str(),
            elapsed_ms = elapsed,
            delta_ms = delta,
        );
        Ok(())
    }

    /// Finish the innermost active method
    ///
    /// Pops, stops the timer and writes the "ended" line at the depth left
    /// after the pop. Returns the finished invocation. With no active method
    /// this does nothing and returns `None`.
    pub fn end_method(&mut self) -> Option<ExecutionInfo> {
        let Some(mut info) = self.call_stack.pop() else {
            tracing::warn!(
                component = module_path!(),
                logger = self.name.as_str(),
                event = EVENT_END_IGNORED,
                "end_method called with no active method"
            );
            return None;
        };

        if let Err(err) = info.stop() {
            log_rejected!(self.name.as_str(), err);
        }

        let depth = self.call_stack.len();
        let ended_at = info.end_timestamp().unwrap_or_else(|| self.clock.wall_now());
        let duration = info.elapsed_milliseconds();

        let mut body = String::new();
        body.push_str(&self.config.method_ended_log_prefix);
        body.push_str(&self.quoted(info.method_identity()));
        body.push_str(&self.config.end_at_string);
        body.push_str(&self.stamp(ended_at));
        body.push_str(&render(
            &self.config.method_execution_duration_format,
            &[&duration],
        ));
        self.append_line(depth, &body);

        log_method_end!(
            self.name.as_str(),
            info.method_identity(),
            duration_ms = duration,
            logger_id = %self.id,
            depth = depth as u64,
            steps = info.steps().len() as u64,
        );

        Some(info)
    }

    /// Empty the text buffer; the call stack is untouched
    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    /// Drop every active invocation; the text buffer is untouched
    pub fn clear_logged_methods_stack(&mut self) {
        self.call_stack.clear();
        self.last_started = None;
    }

    pub fn clear_all(&mut self) {
        self.clear_log();
        self.clear_logged_methods_stack();
    }

    /// Snapshot of the text buffer
    pub fn get_log(&self) -> String {
        self.log.clone()
    }

    /// Borrowed view of the text buffer
    pub fn log(&self) -> &str {
        &self.log
    }

    fn append_line(&mut self, depth: usize, body: &str) {
        for _ in 0..depth {
            self.log.push_str(&self.config.tabulation_prefix);
        }
        if self.config.enable_logger_name {
            self.log
                .push_str(&render(&self.config.logger_name_format, &[&self.name]));
        }
        self.log.push_str(body);
        self.log.push_str(&self.config.line_terminator);
    }

    fn quoted(&self, identity: &str) -> String {
        let quote = &self.config.method_name_quote_string;
        format!("{quote}{identity}{quote}")
    }

    fn stamp(&self, at: DateTime<Local>) -> String {
        at.format(&self.config.timestamp_format).to_string()
    }
}
