//! Execution records
//!
//! - [`ExecutionInfo`]: one method invocation with its timer and steps
//! - [`ExecutionStep`]: one immutable sub-action logged inside an invocation

pub mod info;
pub mod step;

pub use info::ExecutionInfo;
pub use step::ExecutionStep;
