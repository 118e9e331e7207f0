//! Worker identity and roster roles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity a worker announces itself with when asking for work.
///
/// Identities are accepted as-is: an identity outside the known roster is a
/// recoverable condition the engine answers with "no task", never an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkerId(String);

impl WorkerId {
    /// Creates a worker identity from any string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WorkerId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<WorkerRole> for WorkerId {
    fn from(role: WorkerRole) -> Self {
        Self(role.as_str().to_owned())
    }
}

impl AsRef<str> for WorkerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Roles in the fixed worker roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerRole {
    /// Owns planning and market research.
    ProductManager,
    /// Implements frontend work and takes backlog entries.
    SeniorEngineerFrontend,
    /// Implements backend work and takes backlog entries.
    SeniorEngineerBackend,
    /// Sets up deployment and infrastructure.
    SeniorEngineerDevops,
    /// Challenges technical decisions during review.
    TechnicalSkeptic,
    /// Owns architecture and code review.
    StaffEngineer,
}

impl WorkerRole {
    /// Returns the canonical identity string for the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProductManager => "product_manager",
            Self::SeniorEngineerFrontend => "senior_engineer_frontend",
            Self::SeniorEngineerBackend => "senior_engineer_backend",
            Self::SeniorEngineerDevops => "senior_engineer_devops",
            Self::TechnicalSkeptic => "technical_skeptic",
            Self::StaffEngineer => "staff_engineer",
        }
    }

    /// Resolves a worker identity to a roster role, if the identity is known.
    #[must_use]
    pub fn from_id(id: &WorkerId) -> Option<Self> {
        match id.as_str() {
            "product_manager" => Some(Self::ProductManager),
            "senior_engineer_frontend" => Some(Self::SeniorEngineerFrontend),
            "senior_engineer_backend" => Some(Self::SeniorEngineerBackend),
            "senior_engineer_devops" => Some(Self::SeniorEngineerDevops),
            "technical_skeptic" => Some(Self::TechnicalSkeptic),
            "staff_engineer" => Some(Self::StaffEngineer),
            _ => None,
        }
    }

    /// Whether the role takes bug and feature work in steady state.
    #[must_use]
    pub const fn handles_backlog(self) -> bool {
        matches!(self, Self::SeniorEngineerFrontend | Self::SeniorEngineerBackend)
    }
}

impl fmt::Display for WorkerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
