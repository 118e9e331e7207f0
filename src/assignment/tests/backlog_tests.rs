//! Backlog ordering and metadata tests.

use rstest::rstest;

use crate::assignment::domain::{
    Backlog, BacklogKind, BacklogStatus, DEFAULT_COMPONENT, ParsePriorityError, Priority,
};

#[rstest]
fn insertion_order_is_preserved_for_bugs_and_features() {
    let mut backlog = Backlog::new();
    backlog.add_bug("first bug", Priority::Critical, "backend");
    backlog.add_bug("second bug", Priority::Low, "frontend");
    backlog.add_feature("first feature", Priority::High, "frontend");

    let bugs: Vec<_> = backlog
        .pending_bugs()
        .iter()
        .map(|entry| entry.description.as_str())
        .collect();
    assert_eq!(bugs, vec!["first bug", "second bug"]);
    assert_eq!(backlog.bug_count(), 2);
    assert_eq!(backlog.feature_count(), 1);
}

#[rstest]
fn priority_never_reorders_retrieval() {
    let mut backlog = Backlog::new();
    backlog.add_bug("low first", Priority::Low, DEFAULT_COMPONENT);
    backlog.add_bug("critical second", Priority::Critical, DEFAULT_COMPONENT);

    let head = backlog.pending_bugs().first().expect("non-empty backlog");
    assert_eq!(head.description, "low first");
    assert_eq!(head.priority, Priority::Low);
}

#[rstest]
fn duplicate_descriptions_produce_duplicate_entries() {
    let mut backlog = Backlog::new();
    backlog.add_bug("same bug", Priority::Medium, DEFAULT_COMPONENT);
    backlog.add_bug("same bug", Priority::Medium, DEFAULT_COMPONENT);

    assert_eq!(backlog.bug_count(), 2);
}

#[rstest]
fn new_entries_are_pending_with_declared_kind() {
    let mut backlog = Backlog::new();
    backlog.add_bug("a bug", Priority::Medium, "api");
    backlog.add_feature("a feature", Priority::Medium, "api");

    let bug = backlog.pending_bugs().first().expect("bug entry");
    assert_eq!(bug.kind, BacklogKind::Bug);
    assert_eq!(bug.status, BacklogStatus::Pending);

    let feature = backlog.pending_features().first().expect("feature entry");
    assert_eq!(feature.kind, BacklogKind::Feature);
    assert_eq!(feature.status, BacklogStatus::Pending);
}

#[rstest]
#[case("low", Priority::Low)]
#[case("  HIGH ", Priority::High)]
#[case("critical", Priority::Critical)]
fn priority_parses_known_values(#[case] text: &str, #[case] expected: Priority) {
    assert_eq!(Priority::try_from(text), Ok(expected));
}

#[rstest]
fn priority_rejects_unknown_values() {
    assert_eq!(
        Priority::try_from("urgent"),
        Err(ParsePriorityError("urgent".to_owned()))
    );
}

#[rstest]
fn empty_backlog_queries_return_empty_slices() {
    let backlog = Backlog::new();
    assert!(backlog.pending_bugs().is_empty());
    assert!(backlog.pending_features().is_empty());
}
