//! Bug and feature backlog entries with FIFO ordering.

use serde::{Deserialize, Serialize};

use super::ParsePriorityError;

/// Component tag recorded when the reporter did not name one.
pub const DEFAULT_COMPONENT: &str = "unknown";

/// Kind of work a backlog entry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BacklogKind {
    /// A defect in existing behaviour.
    Bug,
    /// A requested new capability.
    Feature,
}

/// Informational urgency attached to a backlog entry.
///
/// Priority is metadata for reporting collaborators only: retrieval order
/// is strictly insertion order and never sorts by priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Can wait indefinitely.
    Low,
    /// Normal urgency.
    #[default]
    Medium,
    /// Should be handled soon.
    High,
    /// Blocks users right now.
    Critical,
}

impl Priority {
    /// Returns the canonical textual representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

/// Resolution state of a backlog entry.
///
/// The core only ever writes [`BacklogStatus::Pending`]; later transitions
/// belong to external collaborators, and the core never filters on status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BacklogStatus {
    /// Awaiting assignment.
    #[default]
    Pending,
    /// Picked up by a worker.
    InProgress,
    /// Externally confirmed as done.
    Resolved,
}

/// A bug or feature request awaiting assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BacklogEntry {
    /// Whether the entry is a bug or a feature request.
    pub kind: BacklogKind,
    /// Free-text description of the work.
    pub description: String,
    /// Informational urgency.
    #[serde(default)]
    pub priority: Priority,
    /// Free-text component tag used for worker routing.
    #[serde(default = "default_component")]
    pub component: String,
    /// Resolution state, written as pending by the core.
    #[serde(default)]
    pub status: BacklogStatus,
}

fn default_component() -> String {
    DEFAULT_COMPONENT.to_owned()
}

impl BacklogEntry {
    /// Creates a pending entry with default priority and component.
    #[must_use]
    pub fn new(kind: BacklogKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            priority: Priority::default(),
            component: default_component(),
            status: BacklogStatus::Pending,
        }
    }

    /// Sets the entry priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the component tag.
    #[must_use]
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = component.into();
        self
    }
}

/// FIFO backlog of pending bugs and feature requests.
///
/// Entries are appended on insertion and never removed or reordered by the
/// core; an entry stays visible until an external collaborator clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backlog {
    #[serde(default, rename = "pending_bugs")]
    bugs: Vec<BacklogEntry>,
    #[serde(default, rename = "pending_features")]
    features: Vec<BacklogEntry>,
}

impl Backlog {
    /// Creates an empty backlog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bugs: Vec::new(),
            features: Vec::new(),
        }
    }

    /// Appends a pending bug entry. Duplicate descriptions are allowed.
    pub fn add_bug(
        &mut self,
        description: impl Into<String>,
        priority: Priority,
        component: impl Into<String>,
    ) {
        self.bugs.push(
            BacklogEntry::new(BacklogKind::Bug, description)
                .with_priority(priority)
                .with_component(component),
        );
    }

    /// Appends a pending feature entry. Duplicate descriptions are allowed.
    pub fn add_feature(
        &mut self,
        description: impl Into<String>,
        priority: Priority,
        component: impl Into<String>,
    ) {
        self.features.push(
            BacklogEntry::new(BacklogKind::Feature, description)
                .with_priority(priority)
                .with_component(component),
        );
    }

    /// Returns all bug entries in insertion order.
    #[must_use]
    pub fn pending_bugs(&self) -> &[BacklogEntry] {
        &self.bugs
    }

    /// Returns all feature entries in insertion order.
    #[must_use]
    pub fn pending_features(&self) -> &[BacklogEntry] {
        &self.features
    }

    /// Number of bug entries.
    #[must_use]
    pub fn bug_count(&self) -> usize {
        self.bugs.len()
    }

    /// Number of feature entries.
    #[must_use]
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }
}
