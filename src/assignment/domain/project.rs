//! Mutable project state and read-only status reporting.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::Backlog;

/// Mutable key-value substrate the engine owns exclusively.
///
/// Holds the bug and feature backlogs plus arbitrary keys external
/// collaborators may set through the generic state-update operation. The
/// state is cloned into the completion ledger as a snapshot every time a
/// task finishes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectState {
    #[serde(flatten)]
    backlog: Backlog,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

impl ProjectState {
    /// Creates an empty project state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the backlog.
    #[must_use]
    pub const fn backlog(&self) -> &Backlog {
        &self.backlog
    }

    /// Returns the backlog for mutation.
    pub const fn backlog_mut(&mut self) -> &mut Backlog {
        &mut self.backlog
    }

    /// Sets an arbitrary state key, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.extra.insert(key.into(), value);
    }

    /// Returns an arbitrary state value, if set.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Renders a single-line JSON summary for task context stamps.
    #[must_use]
    pub fn summary(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }
}

/// Read-only project status for reporting collaborators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectStatus {
    /// Names of completed tasks in completion order.
    pub completed_tasks: Vec<String>,
    /// Number of backlog bug entries.
    pub pending_bug_count: usize,
    /// Number of backlog feature entries.
    pub pending_feature_count: usize,
    /// Clone of the raw project state.
    pub state: ProjectState,
}
