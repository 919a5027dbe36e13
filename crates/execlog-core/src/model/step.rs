use serde::{Deserialize, Serialize};

/// One logged sub-action inside a method invocation
///
/// Steps are created by [`ExecutionInfo`](super::ExecutionInfo) when a step
/// is added and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionStep {
    name: Option<String>,
    description: String,
    elapsed_milliseconds: u64,
    delta_with_previous_step: u64,
}

impl ExecutionStep {
    pub(crate) fn new(
        name: Option<String>,
        description: String,
        elapsed_milliseconds: u64,
        delta_with_previous_step: u64,
    ) -> Self {
        Self {
            name,
            description,
            elapsed_milliseconds,
            delta_with_previous_step,
        }
    }

    /// Step name, absent for unnamed steps
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Milliseconds since the owning invocation started
    pub fn elapsed_milliseconds(&self) -> u64 {
        self.elapsed_milliseconds
    }

    /// Milliseconds since the previous step of the same invocation (0 for the first)
    pub fn delta_with_previous_step(&self) -> u64 {
        self.delta_with_previous_step
    }
}
