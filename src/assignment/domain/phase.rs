//! Phase gate derived from completed milestone names.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::template::{
    FINAL_INTEGRATION_TASK, IMPLEMENTATION_TASKS, MARKET_RESEARCH_TASK, REVIEW_TASKS,
    TECHNICAL_ARCHITECTURE_TASK,
};

/// Project phase, recomputed from the completion ledger on every query.
///
/// The gate checks for the *presence* of milestone names, not their count:
/// a single completion of any task in a multi-task phase satisfies that
/// phase for all workers. Phase order is strictly one-directional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Market research has not been completed yet.
    Research,
    /// Technical architecture has not been designed yet.
    Architecture,
    /// No implementation milestone has been completed yet.
    Implementation,
    /// No review milestone has been completed yet.
    Review,
    /// Final integration has not been completed yet.
    Integration,
    /// All milestones are satisfied; assignment is backlog-driven.
    SteadyState,
}

impl Phase {
    /// Derives the current phase from an immutable snapshot of completed
    /// task names.
    ///
    /// Being a pure function over the snapshot, this also supports replay:
    /// feed it any prefix of the ledger to see historical phase state.
    #[must_use]
    pub fn derive(completed: &BTreeSet<String>) -> Self {
        if !completed.contains(MARKET_RESEARCH_TASK) {
            return Self::Research;
        }
        if !completed.contains(TECHNICAL_ARCHITECTURE_TASK) {
            return Self::Architecture;
        }
        if !contains_any(completed, &IMPLEMENTATION_TASKS) {
            return Self::Implementation;
        }
        if !contains_any(completed, &REVIEW_TASKS) {
            return Self::Review;
        }
        if !completed.contains(FINAL_INTEGRATION_TASK) {
            return Self::Integration;
        }
        Self::SteadyState
    }

    /// Returns the canonical textual representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Research => "research",
            Self::Architecture => "architecture",
            Self::Implementation => "implementation",
            Self::Review => "review",
            Self::Integration => "integration",
            Self::SteadyState => "steady_state",
        }
    }
}

fn contains_any(completed: &BTreeSet<String>, names: &[&str]) -> bool {
    names.iter().any(|name| completed.contains(*name))
}
