//! Append-only ledger of finished tasks.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::ProjectState;

/// Record of one finished task.
///
/// Created exactly once per completion report and never edited or removed;
/// the state snapshot is frozen at the moment of completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRecord {
    task_name: String,
    output: String,
    state: ProjectState,
    recorded_at: DateTime<Utc>,
}

impl CompletionRecord {
    /// Returns the completed task name.
    #[must_use]
    pub fn task_name(&self) -> &str {
        &self.task_name
    }

    /// Returns the free-text output the worker reported.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Returns the project-state snapshot taken at completion time.
    #[must_use]
    pub const fn state(&self) -> &ProjectState {
        &self.state
    }

    /// Returns the completion timestamp.
    #[must_use]
    pub const fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

/// Append-only record of finished tasks, alive for the process lifetime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletionLedger {
    records: Vec<CompletionRecord>,
}

impl CompletionLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Appends a completion record with a state snapshot. No dedup: the
    /// ledger grows permanently.
    pub fn record(
        &mut self,
        task_name: impl Into<String>,
        output: impl Into<String>,
        state: ProjectState,
        clock: &impl Clock,
    ) {
        self.records.push(CompletionRecord {
            task_name: task_name.into(),
            output: output.into(),
            state,
            recorded_at: clock.utc(),
        });
    }

    /// Returns the set of completed task names for phase derivation.
    ///
    /// Membership is by exact name match.
    #[must_use]
    pub fn completed_task_names(&self) -> BTreeSet<String> {
        self.records
            .iter()
            .map(|record| record.task_name.clone())
            .collect()
    }

    /// Returns completed task names in completion order, duplicates kept.
    #[must_use]
    pub fn task_names(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|record| record.task_name.clone())
            .collect()
    }

    /// Returns all records in completion order.
    #[must_use]
    pub fn records(&self) -> &[CompletionRecord] {
        &self.records
    }

    /// Number of completion records.
    #[must_use]
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Whether the ledger is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
