//! Structured tracing mirror for execution loggers
//!
//! Every line an `ExecutionLogger` appends to its text buffer is also
//! emitted as a `tracing` event, so a host application sees the same call
//! tree through its own subscriber. This module provides:
//! - Single initialization point via `init(profile)`
//! - Event macros (`log_method_start!`, `log_method_step!`, `log_method_end!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use execlog_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
