//! Orchestration services for the assignment context.

mod engine;
mod factory;

pub use engine::{AssignmentEngine, AssignmentError, AssignmentResult};
pub use factory::{ProjectContext, TaskFactory};
