//! Canonical schema constants for the tracing events mirrored by loggers
//!
//! These constants keep field names identical between the emitting macros
//! and anything that inspects captured events.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_LOGGER: &str = "logger";
pub const FIELD_LOGGER_ID: &str = "logger_id";
pub const FIELD_METHOD: &str = "method";
pub const FIELD_DEPTH: &str = "depth";

// Timing fields
pub const FIELD_ELAPSED_MS: &str = "elapsed_ms";
pub const FIELD_DELTA_MS: &str = "delta_ms";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Step fields
pub const FIELD_STEP_NAME: &str = "step_name";
pub const FIELD_DESCRIPTION: &str = "description";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";
pub const FIELD_ERR_OP: &str = "err_op";

// Canonical event names
pub const EVENT_METHOD_START: &str = "method_start";
pub const EVENT_METHOD_STEP: &str = "method_step";
pub const EVENT_METHOD_END: &str = "method_end";
pub const EVENT_END_IGNORED: &str = "end_ignored";
pub const EVENT_REJECTED: &str = "rejected";
