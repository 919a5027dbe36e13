use thiserror::Error;

/// Result type alias using ExecLogError
pub type Result<T> = std::result::Result<T, ExecLogError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure surfaced by a logger or an execution record maps onto one
/// of these kinds. Each kind carries a stable code that callers and tests can
/// match on without depending on message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Usage
    /// An operation needs an active method but the call stack is empty
    InvalidOperation,
    /// An execution record was driven out of its start/stop order
    InvalidState,

    // Configuration
    InvalidFormat,
    InvalidConfig,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidOperation => "ERR_INVALID_OPERATION",
            ExErrorKind::InvalidState => "ERR_INVALID_STATE",
            ExErrorKind::InvalidFormat => "ERR_INVALID_FORMAT",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification plus whatever context the failing operation
/// knew about (operation name, method identity, logger name).
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    method: Option<String>,
    logger: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            method: None,
            logger: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add method identity context
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Add logger name context
    pub fn with_logger(mut self, logger: impl Into<String>) -> Self {
        self.logger = Some(logger.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the method identity context, if any
    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    /// Get the logger name context, if any
    pub fn logger(&self) -> Option<&str> {
        self.logger.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(method) = &self.method {
            write!(f, " (method: {})", method)?;
        }
        if let Some(logger) = &self.logger {
            write!(f, " (logger: {})", logger)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for logger and execution record operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExecLogError {
    /// A step was logged while no method was active
    #[error("No active method on the call stack for {op}")]
    NoActiveMethod { op: String },

    /// The execution record was used before `start`
    #[error("Execution of '{method}' was not started before {op}")]
    NotStarted { method: String, op: String },

    /// `start` was called twice on the same execution record
    #[error("Execution of '{method}' was already started")]
    AlreadyStarted { method: String },

    /// The execution record was used after `stop`
    #[error("Execution of '{method}' was already stopped before {op}")]
    AlreadyStopped { method: String, op: String },

    /// A format template has the wrong placeholders
    #[error("Format '{field}' must use placeholders {expected:?}, found {found:?}")]
    InvalidFormat {
        field: String,
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    /// A configuration source could not be read
    #[error("Invalid logger configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl ExecLogError {
    /// Stable kind of this error
    pub fn kind(&self) -> ExErrorKind {
        match self {
            ExecLogError::NoActiveMethod { .. } => ExErrorKind::InvalidOperation,
            ExecLogError::NotStarted { .. }
            | ExecLogError::AlreadyStarted { .. }
            | ExecLogError::AlreadyStopped { .. } => ExErrorKind::InvalidState,
            ExecLogError::InvalidFormat { .. } => ExErrorKind::InvalidFormat,
            ExecLogError::InvalidConfig { .. } => ExErrorKind::InvalidConfig,
        }
    }
}

impl From<ExecLogError> for ExError {
    fn from(err: ExecLogError) -> Self {
        let message = err.to_string();
        let kind = err.kind();
        match err {
            ExecLogError::NoActiveMethod { op } => {
                ExError::new(kind).with_op(op).with_message(message)
            }
            ExecLogError::NotStarted { method, op } | ExecLogError::AlreadyStopped { method, op } => {
                ExError::new(kind)
                    .with_op(op)
                    .with_method(method)
                    .with_message(message)
            }
            ExecLogError::AlreadyStarted { method } => ExError::new(kind)
                .with_op("start")
                .with_method(method)
                .with_message(message),
            ExecLogError::InvalidFormat { .. } => ExError::new(kind)
                .with_op("validate_config")
                .with_message(message),
            ExecLogError::InvalidConfig { .. } => ExError::new(kind)
                .with_op("load_config")
                .with_message(message),
        }
    }
}
