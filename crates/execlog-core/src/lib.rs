//! execlog core - per-instance method execution logging
//!
//! This crate records entry and exit of nested method calls and renders
//! them as an indented text log:
//! - `ExecutionLogger`: call stack, indentation and text buffer
//! - `ExecutionInfo` / `ExecutionStep`: per-invocation timing and steps
//! - `LoggerConfig`: every prefix, separator and template used in lines
//! - `Clock`: monotonic and wall-clock time source, swappable for tests
//! - `logging_facility`: `tracing` mirror of every written line
//!
//! Method identity is always passed in by the caller.

pub mod clock;
pub mod config;
pub mod errors;
pub mod format;
pub mod logger;
pub mod logging_facility;
pub mod model;
pub mod scope;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{LoggerConfig, StepIdentity};
pub use errors::{ExError, ExErrorKind, ExecLogError, Result};
pub use logger::ExecutionLogger;
pub use model::{ExecutionInfo, ExecutionStep};
pub use scope::MethodScope;
