//! Task template definitions and parameter handling.

use minijinja::Environment;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{TemplateError, WorkerId};

/// Milestone template: initial market research.
pub const MARKET_RESEARCH_TASK: &str = "market_research_task";
/// Milestone template: technical architecture design.
pub const TECHNICAL_ARCHITECTURE_TASK: &str = "technical_architecture_task";
/// Milestone template: frontend implementation.
pub const FRONTEND_IMPLEMENTATION_TASK: &str = "frontend_implementation_task";
/// Milestone template: backend implementation.
pub const BACKEND_IMPLEMENTATION_TASK: &str = "backend_implementation_task";
/// Milestone template: deployment and infrastructure setup.
pub const DEVOPS_SETUP_TASK: &str = "devops_setup_task";
/// Milestone template: sceptical design review.
pub const TECHNICAL_SKEPTIC_REVIEW_TASK: &str = "technical_skeptic_review_task";
/// Milestone template: code review.
pub const CODE_REVIEW_TASK: &str = "code_review_task";
/// Milestone template: final integration.
pub const FINAL_INTEGRATION_TASK: &str = "final_integration_task";
/// Steady-state template: fix a pending bug.
pub const BUG_FIX_TASK: &str = "bug_fix_task";
/// Steady-state template: implement a pending feature request.
pub const FEATURE_IMPLEMENTATION_TASK: &str = "feature_implementation_task";
/// Steady-state template: plan next steps when the backlog is empty.
pub const NEXT_STEPS_PLANNING_TASK: &str = "next_steps_planning_task";
/// Directly requested template: research a technical topic.
pub const TECHNICAL_RESEARCH_TASK: &str = "technical_research_task";

/// Template names that satisfy the implementation phase gate.
pub const IMPLEMENTATION_TASKS: [&str; 3] = [
    FRONTEND_IMPLEMENTATION_TASK,
    BACKEND_IMPLEMENTATION_TASK,
    DEVOPS_SETUP_TASK,
];

/// Template names that satisfy the review phase gate.
pub const REVIEW_TASKS: [&str; 2] = [TECHNICAL_SKEPTIC_REVIEW_TASK, CODE_REVIEW_TASK];

/// Parameter key: the project being built.
pub const PARAM_PROJECT_NAME: &str = "project_name";
/// Parameter key: description of the bug being fixed.
pub const PARAM_BUG_DESCRIPTION: &str = "bug_description";
/// Parameter key: description of the feature being implemented.
pub const PARAM_FEATURE_DESCRIPTION: &str = "feature_description";
/// Parameter key: topic of a technical research task.
pub const PARAM_RESEARCH_TOPIC: &str = "research_topic";
/// Parameter key: identity of the worker the text addresses.
pub const PARAM_ASSIGNED_AGENT: &str = "assigned_agent";

/// Fixed parameter keys every template may reference, with fallbacks used
/// when the caller supplies no override.
const DEFAULT_PARAMETERS: [(&str, &str); 5] = [
    (PARAM_PROJECT_NAME, "the project"),
    (PARAM_BUG_DESCRIPTION, "the reported issue"),
    (PARAM_FEATURE_DESCRIPTION, "the requested feature"),
    (PARAM_RESEARCH_TOPIC, "the technical topic"),
    (PARAM_ASSIGNED_AGENT, "staff_engineer"),
];

/// Returns the fixed default parameter set.
#[must_use]
pub fn default_parameters() -> BTreeMap<String, String> {
    DEFAULT_PARAMETERS
        .iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect()
}

/// A named pair of parameterised text patterns plus an optional default
/// worker, used to materialise a concrete task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTemplate {
    /// Unique template key.
    pub name: String,
    /// `minijinja` pattern rendered into the task description.
    pub description_template: String,
    /// `minijinja` pattern rendered into the expected-output contract.
    pub expected_output_template: String,
    /// Worker the task goes to when the caller names none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_worker: Option<WorkerId>,
}

impl TaskTemplate {
    /// Creates a template definition.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description_template: impl Into<String>,
        expected_output_template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description_template: description_template.into(),
            expected_output_template: expected_output_template.into(),
            default_worker: None,
        }
    }

    /// Sets the default worker.
    #[must_use]
    pub fn with_default_worker(mut self, worker: impl Into<WorkerId>) -> Self {
        self.default_worker = Some(worker.into());
        self
    }

    /// Validates that both patterns parse and reference only keys from the
    /// fixed default parameter set.
    ///
    /// Running this at load time replaces runtime substitution failures
    /// with an explicit validation pass.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::InvalidDefinition`] when a pattern does not
    /// parse, or [`TemplateError::UndefinedParameter`] when a pattern
    /// references a key without a default.
    pub fn validate(&self) -> Result<(), TemplateError> {
        if self.name.trim().is_empty() {
            return Err(TemplateError::InvalidDefinition {
                template: self.name.clone(),
                reason: "template name must not be empty".to_owned(),
            });
        }
        self.validate_pattern(&self.description_template)?;
        self.validate_pattern(&self.expected_output_template)
    }

    fn validate_pattern(&self, pattern: &str) -> Result<(), TemplateError> {
        let environment = Environment::new();
        let template = environment.template_from_str(pattern).map_err(|error| {
            TemplateError::InvalidDefinition {
                template: self.name.clone(),
                reason: error.to_string(),
            }
        })?;

        for variable in template.undeclared_variables(true) {
            if !DEFAULT_PARAMETERS.iter().any(|(key, _)| *key == variable) {
                return Err(TemplateError::UndefinedParameter {
                    template: self.name.clone(),
                    parameter: variable,
                });
            }
        }
        Ok(())
    }
}

/// Caller-supplied parameters layered over the fixed defaults, with an
/// optional worker override for direct task construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskParameters {
    values: BTreeMap<String, String>,
    worker_override: Option<WorkerId>,
}

impl TaskParameters {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter value, replacing the default for that key.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Overrides the assigned worker, taking precedence over the template
    /// default.
    #[must_use]
    pub fn with_worker(mut self, worker: impl Into<WorkerId>) -> Self {
        self.worker_override = Some(worker.into());
        self
    }

    /// Returns the caller-supplied values.
    #[must_use]
    pub const fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    /// Returns the worker override, if any.
    #[must_use]
    pub const fn worker_override(&self) -> Option<&WorkerId> {
        self.worker_override.as_ref()
    }

    /// Merges the supplied values over the fixed default parameter set.
    #[must_use]
    pub fn resolved(&self) -> BTreeMap<String, String> {
        let mut merged = default_parameters();
        for (key, value) in &self.values {
            merged.insert(key.clone(), value.clone());
        }
        merged
    }
}
