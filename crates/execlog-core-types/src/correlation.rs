//! Correlation types for telling logger instances apart
//!
//! Several loggers may be alive in one process (one per request, per task,
//! per component). Every logger carries a `LoggerId` so that the tracing
//! events it mirrors can be grouped even when two loggers share a name.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a single logger instance
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoggerId(String);

impl LoggerId {
    /// Generate a new random LoggerId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for LoggerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LoggerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
