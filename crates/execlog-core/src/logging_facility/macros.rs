//! Event macros mirroring log lines into `tracing`
//!
//! Each macro takes the logger name and the method identity first, then any
//! extra `tracing` fields.

/// Emit the event for a "method started" line
///
/// # Example
///
/// ```
/// # use execlog_core::log_method_start;
/// log_method_start!("orders", "Checkout", depth = 0);
/// ```
#[macro_export]
macro_rules! log_method_start {
    ($logger:expr, $method:expr) => {
        tracing::debug!(
            component = module_path!(),
            logger = $logger,
            method = $method,
            event = execlog_core_types::schema::EVENT_METHOD_START,
        );
    };
    ($logger:expr, $method:expr, $($field:tt)*) => {
        tracing::debug!(
            component = module_path!(),
            logger = $logger,
            method = $method,
            event = execlog_core_types::schema::EVENT_METHOD_START,
            $($field)*
        );
    };
}

/// Emit the event for a step line
///
/// # Example
///
/// ```
/// # use execlog_core::log_method_step;
/// log_method_step!("orders", "Checkout", elapsed_ms = 12, delta_ms = 4);
/// ```
#[macro_export]
macro_rules! log_method_step {
    ($logger:expr, $method:expr, $($field:tt)*) => {
        tracing::debug!(
            component = module_path!(),
            logger = $logger,
            method = $method,
            event = execlog_core_types::schema::EVENT_METHOD_STEP,
            $($field)*
        );
    };
}

/// Emit the event for a "method ended" line
///
/// # Example
///
/// ```
/// # use execlog_core::log_method_end;
/// log_method_end!("orders", "Checkout", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_method_end {
    ($logger:expr, $method:expr, duration_ms = $duration:expr) => {
        tracing::debug!(
            component = module_path!(),
            logger = $logger,
            method = $method,
            event = execlog_core_types::schema::EVENT_METHOD_END,
            duration_ms = $duration,
        );
    };
    ($logger:expr, $method:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::debug!(
            component = module_path!(),
            logger = $logger,
            method = $method,
            event = execlog_core_types::schema::EVENT_METHOD_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Emit a warning for a rejected operation
///
/// The error is converted into an `ExError` tagged with the logger name;
/// its kind, code and operation become event fields.
///
/// # Example
///
/// ```
/// # use execlog_core::log_rejected;
/// # use execlog_core::errors::ExecLogError;
/// let err = ExecLogError::NoActiveMethod { op: "log_method_step".to_string() };
/// log_rejected!("orders", err);
/// ```
#[macro_export]
macro_rules! log_rejected {
    ($logger:expr, $err:expr) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = ExError::from($err).with_logger($logger);
        tracing::warn!(
            component = module_path!(),
            logger = ex_err.logger().unwrap_or_default(),
            event = execlog_core_types::schema::EVENT_REJECTED,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            err_op = ex_err.op().unwrap_or_default(),
            message = %ex_err,
        );
    }};
}
