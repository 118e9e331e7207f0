//! Domain model for task assignment.
//!
//! The assignment domain models the completion ledger, the derived phase
//! gate, the bug and feature backlog, and the task templates used to
//! materialise concrete work items, while keeping all infrastructure
//! concerns outside of the domain boundary.

mod backlog;
mod completion;
mod error;
mod phase;
mod project;
mod task;
mod template;
mod worker;

pub use backlog::{Backlog, BacklogEntry, BacklogKind, BacklogStatus, DEFAULT_COMPONENT, Priority};
pub use completion::{CompletionLedger, CompletionRecord};
pub use error::{ParsePriorityError, TemplateError};
pub use phase::Phase;
pub use project::{ProjectState, ProjectStatus};
pub use task::Task;
pub use template::{
    BACKEND_IMPLEMENTATION_TASK, BUG_FIX_TASK, CODE_REVIEW_TASK, DEVOPS_SETUP_TASK,
    FEATURE_IMPLEMENTATION_TASK, FINAL_INTEGRATION_TASK, FRONTEND_IMPLEMENTATION_TASK,
    IMPLEMENTATION_TASKS, MARKET_RESEARCH_TASK, NEXT_STEPS_PLANNING_TASK, PARAM_ASSIGNED_AGENT,
    PARAM_BUG_DESCRIPTION, PARAM_FEATURE_DESCRIPTION, PARAM_PROJECT_NAME, PARAM_RESEARCH_TOPIC,
    REVIEW_TASKS, TECHNICAL_ARCHITECTURE_TASK, TECHNICAL_RESEARCH_TASK,
    TECHNICAL_SKEPTIC_REVIEW_TASK, TaskParameters, TaskTemplate, default_parameters,
};
pub use worker::{WorkerId, WorkerRole};
