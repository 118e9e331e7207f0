//! External template configuration loading scenarios.

use std::sync::Arc;

use gaffer::assignment::adapters::memory::InMemoryTemplateRegistry;
use gaffer::assignment::domain::{TaskParameters, WorkerId};
use gaffer::assignment::services::{AssignmentEngine, TaskFactory};
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
fn engine_runs_over_externally_supplied_templates() {
    let config = r#"[
        {
            "name": "market_research_task",
            "description_template": "Scout the market for {{ project_name }}.",
            "expected_output_template": "A short market brief.",
            "default_worker": "product_manager"
        },
        {
            "name": "technical_architecture_task",
            "description_template": "Sketch the architecture of {{ project_name }}.",
            "expected_output_template": "An architecture sketch."
        }
    ]"#;
    let registry = InMemoryTemplateRegistry::from_json_str(config).expect("valid configuration");
    let under_test = AssignmentEngine::new(TaskFactory::new(Arc::new(registry)), Arc::new(DefaultClock));

    let task = under_test
        .determine_next_task(&WorkerId::new("product_manager"))
        .expect("assignment query")
        .expect("research task");
    assert_eq!(task.description(), "Scout the market for the project.");
    assert_eq!(task.assigned_worker().as_str(), "product_manager");
}

#[rstest]
fn startup_fails_when_configuration_references_unknown_keys() {
    let config = r#"[
        {
            "name": "market_research_task",
            "description_template": "Scout {{ market_segment }}.",
            "expected_output_template": "A brief."
        }
    ]"#;

    assert!(InMemoryTemplateRegistry::from_json_str(config).is_err());
}

#[rstest]
fn missing_template_surfaces_as_fatal_error_at_query_time() {
    // A registry without the architecture template: the engine can still
    // answer research queries but fails loudly once the gate advances.
    let config = r#"[
        {
            "name": "market_research_task",
            "description_template": "Scout the market for {{ project_name }}.",
            "expected_output_template": "A short market brief."
        }
    ]"#;
    let registry = InMemoryTemplateRegistry::from_json_str(config).expect("valid configuration");
    let under_test = AssignmentEngine::new(TaskFactory::new(Arc::new(registry)), Arc::new(DefaultClock));

    under_test
        .mark_completed("market_research_task", "summary")
        .expect("completion report");

    let result = under_test.determine_next_task(&WorkerId::new("staff_engineer"));
    assert!(result.is_err());
}

#[rstest]
fn factory_renders_from_custom_registry() {
    let config = r#"[
        {
            "name": "bug_fix_task",
            "description_template": "Fix: {{ bug_description }} (assigned to {{ assigned_agent }}).",
            "expected_output_template": "A verified fix for {{ bug_description }}."
        }
    ]"#;
    let registry = InMemoryTemplateRegistry::from_json_str(config).expect("valid configuration");
    let factory = TaskFactory::new(Arc::new(registry));

    let task = factory
        .create_task(
            "bug_fix_task",
            &TaskParameters::new().with("bug_description", "Crash on save"),
            &gaffer::assignment::services::ProjectContext::default(),
        )
        .expect("rendered task");

    assert_eq!(
        task.description(),
        "Fix: Crash on save (assigned to staff_engineer)."
    );
}
