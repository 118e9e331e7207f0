//! Template-driven task factory.

use minijinja::{Environment, UndefinedBehavior};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::assignment::domain::{
    ProjectState, Task, TaskParameters, TemplateError, WorkerId, WorkerRole,
};
use crate::assignment::ports::TemplateRegistry;

/// Point-in-time view of project progress stamped into each task.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectContext {
    /// Project state at task-creation time.
    pub state: ProjectState,
    /// Number of completed tasks at task-creation time.
    pub completed_tasks: usize,
}

impl ProjectContext {
    /// Renders the textual context stamp carried by the task.
    #[must_use]
    pub fn stamp(&self) -> String {
        format!(
            "Project state: {}\nCompleted tasks: {}",
            self.state.summary(),
            self.completed_tasks
        )
    }
}

/// Service that materialises tasks from registered templates.
#[derive(Clone)]
pub struct TaskFactory<R>
where
    R: TemplateRegistry,
{
    registry: Arc<R>,
}

impl<R> TaskFactory<R>
where
    R: TemplateRegistry,
{
    /// Creates a new task factory.
    #[must_use]
    pub const fn new(registry: Arc<R>) -> Self {
        Self { registry }
    }

    /// Materialises a task from a named template.
    ///
    /// Caller parameters are merged over the fixed defaults, both text
    /// patterns are rendered, and the assigned worker is resolved in
    /// order: caller override, template default, product manager.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::TemplateNotFound`] when the name is absent
    /// from the template set, [`TemplateError::Render`] when substitution
    /// references an undefined key, and [`TemplateError::Registry`] when
    /// registry access fails. All are fatal configuration errors.
    pub fn create_task(
        &self,
        template_name: &str,
        parameters: &TaskParameters,
        context: &ProjectContext,
    ) -> Result<Task, TemplateError> {
        let template = self
            .registry
            .find_by_name(template_name)
            .map_err(|error| TemplateError::Registry(error.to_string()))?
            .ok_or_else(|| TemplateError::TemplateNotFound(template_name.to_owned()))?;

        let resolved = parameters.resolved();
        let description = render(&template.name, &template.description_template, &resolved)?;
        let expected_output = render(
            &template.name,
            &template.expected_output_template,
            &resolved,
        )?;

        let assigned_worker = parameters
            .worker_override()
            .cloned()
            .or_else(|| template.default_worker.clone())
            .unwrap_or_else(|| WorkerId::from(WorkerRole::ProductManager));

        Ok(Task::new(
            template.name,
            description,
            expected_output,
            assigned_worker,
            context.stamp(),
        ))
    }
}

/// Renders a pattern under strict undefined behaviour so a missing key
/// surfaces as a configuration error instead of silently defaulting.
fn render(
    template_name: &str,
    pattern: &str,
    parameters: &BTreeMap<String, String>,
) -> Result<String, TemplateError> {
    let mut environment = Environment::new();
    environment.set_undefined_behavior(UndefinedBehavior::Strict);
    environment
        .render_str(pattern, parameters)
        .map_err(|error| TemplateError::Render {
            template: template_name.to_owned(),
            reason: error.to_string(),
        })
}
