//! Backlog ingestion and steady-state routing scenarios.

use gaffer::assignment::domain::{
    BUG_FIX_TASK, FEATURE_IMPLEMENTATION_TASK, MARKET_RESEARCH_TASK, Priority, WorkerId,
};
use rstest::rstest;

use super::helpers::{complete_all_milestones, engine, next_task_name};

#[rstest]
fn backlog_is_ignored_until_steady_state() {
    let under_test = engine();
    under_test
        .add_bug("Login fails", Priority::High, "frontend")
        .expect("backlog insert");

    // Phase gating dominates: the bug waits until every milestone is done.
    assert_eq!(
        next_task_name(&under_test, "senior_engineer_frontend"),
        Some(MARKET_RESEARCH_TASK.to_owned())
    );
}

#[rstest]
fn oldest_bug_wins_over_newer_bugs_and_features() {
    let under_test = engine();
    complete_all_milestones(&under_test);

    under_test
        .add_feature("Dark mode", Priority::Critical, "frontend")
        .expect("backlog insert");
    under_test
        .add_bug("Crash on save", Priority::Low, "backend")
        .expect("backlog insert");
    under_test
        .add_bug("Broken pagination", Priority::Critical, "backend")
        .expect("backlog insert");

    let task = under_test
        .determine_next_task(&WorkerId::new("senior_engineer_backend"))
        .expect("assignment query")
        .expect("steady-state bug task");

    assert_eq!(task.name(), BUG_FIX_TASK);
    assert!(task.description().contains("Crash on save"));
}

#[rstest]
fn features_are_assigned_once_bugs_are_cleared_externally() {
    let under_test = engine();
    complete_all_milestones(&under_test);
    under_test
        .add_feature("Dark mode", Priority::Medium, "frontend")
        .expect("backlog insert");

    let task = under_test
        .determine_next_task(&WorkerId::new("senior_engineer_frontend"))
        .expect("assignment query")
        .expect("steady-state feature task");

    assert_eq!(task.name(), FEATURE_IMPLEMENTATION_TASK);
    assert!(task.description().contains("Dark mode"));
    assert!(task.description().contains("senior_engineer_frontend"));
}

#[rstest]
fn status_counts_follow_insertions() {
    let under_test = engine();
    under_test
        .add_bug("Crash on save", Priority::High, "backend")
        .expect("backlog insert");
    under_test
        .add_bug("Crash on save", Priority::High, "backend")
        .expect("backlog insert");
    under_test
        .add_feature("Dark mode", Priority::Low, "frontend")
        .expect("backlog insert");

    let status = under_test.project_status().expect("status report");
    assert_eq!(status.pending_bug_count, 2);
    assert_eq!(status.pending_feature_count, 1);
    assert_eq!(status.state.backlog().bug_count(), 2);
}
