//! End-to-end phase progression scenarios.

use gaffer::assignment::domain::{
    BACKEND_IMPLEMENTATION_TASK, CODE_REVIEW_TASK, FINAL_INTEGRATION_TASK,
    FRONTEND_IMPLEMENTATION_TASK, MARKET_RESEARCH_TASK, NEXT_STEPS_PLANNING_TASK,
    TECHNICAL_ARCHITECTURE_TASK, WorkerId,
};
use rstest::rstest;

use super::helpers::{TestEngine, engine, next_task_name};

#[rstest]
fn full_project_lifecycle_reaches_steady_state() {
    let under_test: TestEngine = engine();

    // Research is handed to whichever worker asks first.
    assert_eq!(
        next_task_name(&under_test, "product_manager"),
        Some(MARKET_RESEARCH_TASK.to_owned())
    );
    under_test
        .mark_completed(MARKET_RESEARCH_TASK, "market summary")
        .expect("completion report");

    assert_eq!(
        next_task_name(&under_test, "staff_engineer"),
        Some(TECHNICAL_ARCHITECTURE_TASK.to_owned())
    );
    under_test
        .mark_completed(TECHNICAL_ARCHITECTURE_TASK, "architecture doc")
        .expect("completion report");

    // Implementation routes engineers to their own milestones.
    assert_eq!(
        next_task_name(&under_test, "senior_engineer_frontend"),
        Some(FRONTEND_IMPLEMENTATION_TASK.to_owned())
    );
    under_test
        .mark_completed(FRONTEND_IMPLEMENTATION_TASK, "frontend build")
        .expect("completion report");
    under_test
        .mark_completed(BACKEND_IMPLEMENTATION_TASK, "backend build")
        .expect("completion report");

    assert_eq!(
        next_task_name(&under_test, "staff_engineer"),
        Some(CODE_REVIEW_TASK.to_owned())
    );
    under_test
        .mark_completed(CODE_REVIEW_TASK, "review findings")
        .expect("completion report");

    // Integration goes to any worker.
    assert_eq!(
        next_task_name(&under_test, "senior_engineer_devops"),
        Some(FINAL_INTEGRATION_TASK.to_owned())
    );
    under_test
        .mark_completed(FINAL_INTEGRATION_TASK, "integrated build")
        .expect("completion report");

    // Steady state, empty backlog: only the product manager has work.
    assert_eq!(
        next_task_name(&under_test, "product_manager"),
        Some(NEXT_STEPS_PLANNING_TASK.to_owned())
    );
    assert_eq!(next_task_name(&under_test, "senior_engineer_frontend"), None);
    assert_eq!(next_task_name(&under_test, "staff_engineer"), None);
}

#[rstest]
fn duplicate_completions_do_not_disturb_gating() {
    let under_test = engine();
    under_test
        .mark_completed(MARKET_RESEARCH_TASK, "first run")
        .expect("completion report");
    under_test
        .mark_completed(MARKET_RESEARCH_TASK, "second run")
        .expect("completion report");

    // The gate checks presence, not count; the ledger still grew.
    assert_eq!(
        next_task_name(&under_test, "product_manager"),
        Some(TECHNICAL_ARCHITECTURE_TASK.to_owned())
    );
    let status = under_test.project_status().expect("status report");
    assert_eq!(
        status.completed_tasks,
        vec![
            MARKET_RESEARCH_TASK.to_owned(),
            MARKET_RESEARCH_TASK.to_owned()
        ]
    );
}

#[rstest]
fn assignment_queries_never_mutate_state() {
    let under_test = engine();
    let worker = WorkerId::new("senior_engineer_backend");

    let first = under_test
        .determine_next_task(&worker)
        .expect("assignment query");
    let second = under_test
        .determine_next_task(&worker)
        .expect("assignment query");
    assert_eq!(first, second);

    let status = under_test.project_status().expect("status report");
    assert!(status.completed_tasks.is_empty());
    assert_eq!(status.pending_bug_count, 0);
    assert_eq!(status.pending_feature_count, 0);
}
