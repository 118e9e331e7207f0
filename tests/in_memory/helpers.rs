//! Shared helpers for in-memory integration tests.

use std::sync::Arc;

use gaffer::assignment::adapters::memory::InMemoryTemplateRegistry;
use gaffer::assignment::domain::{
    CODE_REVIEW_TASK, FINAL_INTEGRATION_TASK, FRONTEND_IMPLEMENTATION_TASK, MARKET_RESEARCH_TASK,
    TECHNICAL_ARCHITECTURE_TASK, WorkerId,
};
use gaffer::assignment::services::{AssignmentEngine, TaskFactory};
use mockable::DefaultClock;

/// Engine type under test.
pub type TestEngine = AssignmentEngine<InMemoryTemplateRegistry, DefaultClock>;

/// Builds an engine over the built-in template set.
pub fn engine() -> TestEngine {
    AssignmentEngine::new(
        TaskFactory::new(Arc::new(InMemoryTemplateRegistry::new())),
        Arc::new(DefaultClock),
    )
}

/// Reports every milestone as completed, reaching steady state.
pub fn complete_all_milestones(engine: &TestEngine) {
    for name in [
        MARKET_RESEARCH_TASK,
        TECHNICAL_ARCHITECTURE_TASK,
        FRONTEND_IMPLEMENTATION_TASK,
        CODE_REVIEW_TASK,
        FINAL_INTEGRATION_TASK,
    ] {
        engine
            .mark_completed(name, "done")
            .expect("completion report");
    }
}

/// Queries the engine and returns the assigned template name, if any.
pub fn next_task_name(engine: &TestEngine, worker: &str) -> Option<String> {
    engine
        .determine_next_task(&WorkerId::new(worker))
        .expect("assignment query")
        .map(|task| task.name().to_owned())
}
