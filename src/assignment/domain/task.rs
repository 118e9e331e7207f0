//! Concrete task value handed to a worker.

use serde::{Deserialize, Serialize};

use super::WorkerId;

/// A materialised unit of work.
///
/// Tasks are built by the task factory, immutable once returned, and not
/// retained by the engine after being handed to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    name: String,
    description: String,
    expected_output: String,
    assigned_worker: WorkerId,
    context: String,
}

impl Task {
    /// Creates a task from fully resolved text and an assigned worker.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        expected_output: impl Into<String>,
        assigned_worker: WorkerId,
        context: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            expected_output: expected_output.into(),
            assigned_worker,
            context: context.into(),
        }
    }

    /// Returns the template key or synthesised identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the resolved task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the resolved expected-output contract.
    #[must_use]
    pub fn expected_output(&self) -> &str {
        &self.expected_output
    }

    /// Returns the worker the task is assigned to.
    #[must_use]
    pub const fn assigned_worker(&self) -> &WorkerId {
        &self.assigned_worker
    }

    /// Returns the project-state snapshot text stamped at creation time.
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }
}
