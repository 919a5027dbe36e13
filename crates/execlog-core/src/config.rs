//! Logger configuration
//!
//! `LoggerConfig` holds every string that goes into a log line. It can be
//! built in code (plain fields over `Default`) or read from a TOML document
//! where missing keys fall back to the defaults. Templates are checked by
//! [`LoggerConfig::validate`] before a logger accepts the value, so a
//! malformed template never reaches line formatting.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::errors::{ExecLogError, Result};
use crate::format::placeholder_indices;

/// Which method identity a step line names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepIdentity {
    /// The method at the top of the call stack
    #[default]
    StackTop,
    /// The method most recently passed to `start_method`, even if it has ended
    LastStarted,
}

/// Formatting configuration for an `ExecutionLogger`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Repeated once per nesting level at the start of every line
    pub tabulation_prefix: String,
    pub method_started_log_prefix: String,
    pub method_step_log_prefix: String,
    pub method_ended_log_prefix: String,
    /// One placeholder: the logger name
    pub logger_name_format: String,
    pub enable_logger_name: bool,
    /// One placeholder: the step name
    pub step_name_format: String,
    pub start_at_string: String,
    pub end_at_string: String,
    pub at_string: String,
    pub method_name_quote_string: String,
    pub step_name_separator: String,
    /// One placeholder: total duration in milliseconds
    pub method_execution_duration_format: String,
    /// Two placeholders: elapsed since start, delta with previous step
    pub method_step_duration_format: String,
    /// chrono strftime pattern for displayed timestamps
    pub timestamp_format: String,
    pub line_terminator: String,
    pub step_identity: StepIdentity,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            tabulation_prefix: "\t".to_string(),
            method_started_log_prefix: " >> Method ".to_string(),
            method_step_log_prefix: " Method ".to_string(),
            method_ended_log_prefix: " << Method ".to_string(),
            logger_name_format: "[{0}] ".to_string(),
            enable_logger_name: true,
            step_name_format: "[Step: {0}]: ".to_string(),
            start_at_string: " start at ".to_string(),
            end_at_string: " end at ".to_string(),
            at_string: " at ".to_string(),
            method_name_quote_string: "'".to_string(),
            step_name_separator: ": ".to_string(),
            method_execution_duration_format: ", duration: {0} ms".to_string(),
            method_step_duration_format: ", elapsed from start: {0} ms, delta={1} ms".to_string(),
            timestamp_format: "%Y-%m-%d %H:%M:%S%.3f".to_string(),
            line_terminator: "\n".to_string(),
            step_identity: StepIdentity::StackTop,
        }
    }
}

impl LoggerConfig {
    /// Parse a TOML document; absent keys take their default values
    ///
    /// # Errors
    /// * `InvalidConfig` - If the document is not valid TOML for this shape
    /// * `InvalidFormat` - If a template has the wrong placeholders
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: LoggerConfig =
            toml::from_str(source).map_err(|e| ExecLogError::InvalidConfig {
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Render as a TOML document
    ///
    /// # Errors
    /// * `InvalidConfig` - If serialization fails
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| ExecLogError::InvalidConfig {
            reason: e.to_string(),
        })
    }

    /// Check every template for its expected placeholders
    ///
    /// # Errors
    /// * `InvalidFormat` - If a template uses other placeholders than expected
    /// * `InvalidConfig` - If the timestamp pattern is not a valid strftime pattern
    pub fn validate(&self) -> Result<()> {
        let templates: [(&str, &str, &[usize]); 4] = [
            ("logger_name_format", self.logger_name_format.as_str(), &[0]),
            ("step_name_format", self.step_name_format.as_str(), &[0]),
            (
                "method_execution_duration_format",
                self.method_execution_duration_format.as_str(),
                &[0],
            ),
            (
                "method_step_duration_format",
                self.method_step_duration_format.as_str(),
                &[0, 1],
            ),
        ];

        for (field, template, expected) in templates {
            let found = placeholder_indices(template);
            if found.as_slice() != expected {
                return Err(ExecLogError::InvalidFormat {
                    field: field.to_string(),
                    expected: expected.to_vec(),
                    found,
                });
            }
        }

        if StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(ExecLogError::InvalidConfig {
                reason: format!("invalid timestamp_format '{}'", self.timestamp_format),
            });
        }

        Ok(())
    }
}
