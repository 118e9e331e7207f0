//! In-memory task template registry adapter.

use std::collections::HashMap;

use crate::assignment::domain::{
    BACKEND_IMPLEMENTATION_TASK, BUG_FIX_TASK, CODE_REVIEW_TASK, DEVOPS_SETUP_TASK,
    FEATURE_IMPLEMENTATION_TASK, FINAL_INTEGRATION_TASK, FRONTEND_IMPLEMENTATION_TASK,
    MARKET_RESEARCH_TASK, NEXT_STEPS_PLANNING_TASK, TECHNICAL_ARCHITECTURE_TASK,
    TECHNICAL_RESEARCH_TASK, TECHNICAL_SKEPTIC_REVIEW_TASK, TaskTemplate, WorkerRole,
};
use crate::assignment::ports::{TemplateRegistry, TemplateRegistryError, TemplateRegistryResult};

/// In-memory registry for task template definitions.
#[derive(Debug, Clone)]
pub struct InMemoryTemplateRegistry {
    templates: HashMap<String, TaskTemplate>,
}

impl InMemoryTemplateRegistry {
    /// Creates a registry with the built-in template set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            templates: builtin_templates()
                .into_iter()
                .map(|template| {
                    debug_assert!(
                        template.validate().is_ok(),
                        "built-in task templates must remain valid",
                    );
                    (template.name.clone(), template)
                })
                .collect(),
        }
    }

    /// Creates a registry from supplied template definitions.
    ///
    /// Every definition is validated at load time: both patterns must
    /// parse and reference only default parameter keys, and names must be
    /// unique.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateRegistryError::InvalidDefinition`] when a
    /// definition fails validation or duplicates a name.
    pub fn with_templates(
        definitions: impl IntoIterator<Item = TaskTemplate>,
    ) -> TemplateRegistryResult<Self> {
        let mut templates = HashMap::new();
        for definition in definitions {
            definition
                .validate()
                .map_err(|error| TemplateRegistryError::InvalidDefinition(error.to_string()))?;

            if templates
                .insert(definition.name.clone(), definition)
                .is_some()
            {
                return Err(TemplateRegistryError::InvalidDefinition(
                    "duplicate template definition".to_owned(),
                ));
            }
        }
        Ok(Self { templates })
    }

    /// Loads template definitions from a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateRegistryError::InvalidDefinition`] when the JSON
    /// does not parse or a definition fails validation.
    pub fn from_json_str(source: &str) -> TemplateRegistryResult<Self> {
        let definitions: Vec<TaskTemplate> = serde_json::from_str(source)
            .map_err(|error| TemplateRegistryError::InvalidDefinition(error.to_string()))?;
        Self::with_templates(definitions)
    }
}

impl Default for InMemoryTemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRegistry for InMemoryTemplateRegistry {
    fn find_by_name(&self, name: &str) -> TemplateRegistryResult<Option<TaskTemplate>> {
        Ok(self.templates.get(name).cloned())
    }

    fn list(&self) -> TemplateRegistryResult<Vec<TaskTemplate>> {
        let mut templates: Vec<_> = self.templates.values().cloned().collect();
        templates.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(templates)
    }
}

/// Built-in template set covering every milestone, the steady-state
/// backlog tasks, and the direct research task.
fn builtin_templates() -> Vec<TaskTemplate> {
    vec![
        TaskTemplate::new(
            MARKET_RESEARCH_TASK,
            "Research the market landscape for {{ project_name }}: identify \
             competing products, target user segments, and the gaps \
             {{ project_name }} should fill.",
            "A market research summary for {{ project_name }} covering \
             competitors, target users, and differentiation opportunities.",
        )
        .with_default_worker(WorkerRole::ProductManager),
        TaskTemplate::new(
            TECHNICAL_ARCHITECTURE_TASK,
            "Design the technical architecture for {{ project_name }}: choose \
             the system components, data flow, and technology stack, and call \
             out the riskiest decisions.",
            "An architecture document for {{ project_name }} describing \
             components, interfaces, storage, and deployment topology.",
        )
        .with_default_worker(WorkerRole::StaffEngineer),
        TaskTemplate::new(
            FRONTEND_IMPLEMENTATION_TASK,
            "Implement the frontend of {{ project_name }} according to the \
             agreed architecture: screens, client-side state, and API \
             integration.",
            "Working frontend code for {{ project_name }} with the core user \
             flows implemented and wired to the backend API.",
        )
        .with_default_worker(WorkerRole::SeniorEngineerFrontend),
        TaskTemplate::new(
            BACKEND_IMPLEMENTATION_TASK,
            "Implement the backend of {{ project_name }} according to the \
             agreed architecture: API endpoints, business logic, and data \
             persistence.",
            "Working backend code for {{ project_name }} exposing the agreed \
             API with business logic and storage in place.",
        )
        .with_default_worker(WorkerRole::SeniorEngineerBackend),
        TaskTemplate::new(
            DEVOPS_SETUP_TASK,
            "Set up the deployment and infrastructure for {{ project_name }}: \
             build pipeline, environments, and monitoring hooks.",
            "A reproducible deployment setup for {{ project_name }} with a \
             working build pipeline and documented environments.",
        )
        .with_default_worker(WorkerRole::SeniorEngineerDevops),
        TaskTemplate::new(
            TECHNICAL_SKEPTIC_REVIEW_TASK,
            "Challenge the implementation of {{ project_name }}: probe the \
             architecture and code for weak assumptions, scaling limits, and \
             failure modes.",
            "A sceptical review of {{ project_name }} listing concrete risks, \
             questionable assumptions, and recommended mitigations.",
        )
        .with_default_worker(WorkerRole::TechnicalSkeptic),
        TaskTemplate::new(
            CODE_REVIEW_TASK,
            "Review the code written for {{ project_name }} for correctness, \
             maintainability, and adherence to the agreed architecture.",
            "A code review report for {{ project_name }} with findings ranked \
             by severity and required changes identified.",
        )
        .with_default_worker(WorkerRole::StaffEngineer),
        TaskTemplate::new(
            FINAL_INTEGRATION_TASK,
            "Integrate all components of {{ project_name }} into a coherent \
             whole: resolve interface mismatches and verify the end-to-end \
             flows.",
            "An integrated build of {{ project_name }} with every component \
             connected and the primary user journeys verified.",
        )
        .with_default_worker(WorkerRole::StaffEngineer),
        TaskTemplate::new(
            BUG_FIX_TASK,
            "Fix the following bug in {{ project_name }}: \
             {{ bug_description }}. Reproduce it first, then fix the root \
             cause. Assigned to {{ assigned_agent }}.",
            "A fix for the bug ({{ bug_description }}) with the root cause \
             explained and a regression check in place.",
        ),
        TaskTemplate::new(
            FEATURE_IMPLEMENTATION_TASK,
            "Implement the following feature in {{ project_name }}: \
             {{ feature_description }}. Keep it consistent with the existing \
             architecture. Assigned to {{ assigned_agent }}.",
            "A working implementation of the feature \
             ({{ feature_description }}) integrated with the existing code.",
        ),
        TaskTemplate::new(
            NEXT_STEPS_PLANNING_TASK,
            "Review the current state of {{ project_name }} and plan the next \
             steps: weigh open risks, user feedback, and backlog candidates.",
            "A prioritised plan for the next iteration of {{ project_name }} \
             with rationale for each item.",
        )
        .with_default_worker(WorkerRole::ProductManager),
        TaskTemplate::new(
            TECHNICAL_RESEARCH_TASK,
            "Research {{ research_topic }} in the context of \
             {{ project_name }}: survey the available approaches and \
             recommend one.",
            "A research note on {{ research_topic }} comparing the viable \
             options and recommending an approach with trade-offs.",
        )
        .with_default_worker(WorkerRole::StaffEngineer),
    ]
}
