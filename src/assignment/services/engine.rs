//! Task assignment engine: phase gating over the ledger, backlog-driven
//! steady state.

use mockable::Clock;
use serde_json::Value;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

use crate::assignment::domain::{
    BACKEND_IMPLEMENTATION_TASK, BUG_FIX_TASK, CODE_REVIEW_TASK, CompletionLedger,
    DEVOPS_SETUP_TASK, FEATURE_IMPLEMENTATION_TASK, FINAL_INTEGRATION_TASK,
    FRONTEND_IMPLEMENTATION_TASK, MARKET_RESEARCH_TASK, NEXT_STEPS_PLANNING_TASK,
    PARAM_ASSIGNED_AGENT, PARAM_BUG_DESCRIPTION, PARAM_FEATURE_DESCRIPTION, PARAM_RESEARCH_TOPIC,
    Phase, Priority, ProjectState, ProjectStatus, TECHNICAL_ARCHITECTURE_TASK,
    TECHNICAL_RESEARCH_TASK, TECHNICAL_SKEPTIC_REVIEW_TASK, Task, TaskParameters, TemplateError,
    WorkerId, WorkerRole,
};
use crate::assignment::ports::TemplateRegistry;
use crate::assignment::services::factory::{ProjectContext, TaskFactory};

/// Service-level errors for assignment operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssignmentError {
    /// Fatal template configuration error.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// The shared state lock was poisoned by a panicking writer.
    #[error("assignment engine state unavailable: {0}")]
    StateUnavailable(String),
}

/// Result type for assignment engine operations.
pub type AssignmentResult<T> = Result<T, AssignmentError>;

/// Mutable engine state behind the single mutual-exclusion boundary.
#[derive(Debug, Default)]
struct EngineState {
    ledger: CompletionLedger,
    project: ProjectState,
}

/// Decision engine that assigns tasks to workers.
///
/// Phase gating dominates the backlog: bugs and features are only
/// consulted once every milestone is satisfied. The engine owns the
/// completion ledger and project state exclusively; all mutation goes
/// through its methods, guarded by one `RwLock`. `determine_next_task` is
/// a pure read and takes the shared lock.
pub struct AssignmentEngine<R, C>
where
    R: TemplateRegistry,
    C: Clock + Send + Sync,
{
    factory: TaskFactory<R>,
    clock: Arc<C>,
    state: RwLock<EngineState>,
}

impl<R, C> AssignmentEngine<R, C>
where
    R: TemplateRegistry,
    C: Clock + Send + Sync,
{
    /// Creates an engine with an empty ledger and backlog.
    #[must_use]
    pub fn new(factory: TaskFactory<R>, clock: Arc<C>) -> Self {
        Self {
            factory,
            clock,
            state: RwLock::new(EngineState::default()),
        }
    }

    /// Appends a pending bug to the backlog.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::StateUnavailable`] when the state lock is
    /// poisoned.
    pub fn add_bug(
        &self,
        description: impl Into<String>,
        priority: Priority,
        component: impl Into<String>,
    ) -> AssignmentResult<()> {
        let mut state = self.write_state()?;
        state
            .project
            .backlog_mut()
            .add_bug(description, priority, component);
        Ok(())
    }

    /// Appends a pending feature request to the backlog.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::StateUnavailable`] when the state lock is
    /// poisoned.
    pub fn add_feature(
        &self,
        description: impl Into<String>,
        priority: Priority,
        component: impl Into<String>,
    ) -> AssignmentResult<()> {
        let mut state = self.write_state()?;
        state
            .project
            .backlog_mut()
            .add_feature(description, priority, component);
        Ok(())
    }

    /// Sets an arbitrary project-state key for external collaborators.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::StateUnavailable`] when the state lock is
    /// poisoned.
    pub fn update_state(&self, key: impl Into<String>, value: Value) -> AssignmentResult<()> {
        let mut state = self.write_state()?;
        state.project.set(key, value);
        Ok(())
    }

    /// Records a completed task with a frozen project-state snapshot and
    /// re-derives the phase gate for subsequent queries.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::StateUnavailable`] when the state lock is
    /// poisoned.
    pub fn mark_completed(
        &self,
        task_name: impl Into<String>,
        output: impl Into<String>,
    ) -> AssignmentResult<()> {
        let mut state = self.write_state()?;
        let snapshot = state.project.clone();
        state.ledger.record(task_name, output, snapshot, &*self.clock);
        Ok(())
    }

    /// Decides which task, if any, the announcing worker should receive.
    ///
    /// Phase work is handed out first. In the implementation and review
    /// phases only the matching roles receive work: an unmatched role gets
    /// no task at that step and the decision does not fall through to
    /// later branches. In steady state, pending bugs win over pending
    /// features (oldest first), engineers take backlog work, and the
    /// product manager plans next steps when the backlog is empty.
    ///
    /// This is a pure read: repeated calls without an intervening
    /// completion or backlog change return the same decision.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::Template`] when a required template is
    /// missing or fails to render, and
    /// [`AssignmentError::StateUnavailable`] when the state lock is
    /// poisoned.
    pub fn determine_next_task(&self, worker: &WorkerId) -> AssignmentResult<Option<Task>> {
        let state = self.read_state()?;
        let completed = state.ledger.completed_task_names();
        let context = ProjectContext {
            state: state.project.clone(),
            completed_tasks: state.ledger.count(),
        };
        let role = WorkerRole::from_id(worker);

        let template_name = match Phase::derive(&completed) {
            Phase::Research => Some(MARKET_RESEARCH_TASK),
            Phase::Architecture => Some(TECHNICAL_ARCHITECTURE_TASK),
            Phase::Implementation => match role {
                Some(WorkerRole::SeniorEngineerFrontend) => Some(FRONTEND_IMPLEMENTATION_TASK),
                Some(WorkerRole::SeniorEngineerBackend) => Some(BACKEND_IMPLEMENTATION_TASK),
                Some(WorkerRole::SeniorEngineerDevops) => Some(DEVOPS_SETUP_TASK),
                _ => None,
            },
            Phase::Review => match role {
                Some(WorkerRole::TechnicalSkeptic) => Some(TECHNICAL_SKEPTIC_REVIEW_TASK),
                Some(WorkerRole::StaffEngineer) => Some(CODE_REVIEW_TASK),
                _ => None,
            },
            Phase::Integration => Some(FINAL_INTEGRATION_TASK),
            Phase::SteadyState => {
                return Ok(self.steady_state_task(role, worker, &state.project, &context)?);
            }
        };

        match template_name {
            Some(name) => {
                let task = self
                    .factory
                    .create_task(name, &TaskParameters::new(), &context)?;
                Ok(Some(task))
            }
            None => Ok(None),
        }
    }

    /// Returns a read-only status report for external collaborators.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::StateUnavailable`] when the state lock is
    /// poisoned.
    pub fn project_status(&self) -> AssignmentResult<ProjectStatus> {
        let state = self.read_state()?;
        Ok(ProjectStatus {
            completed_tasks: state.ledger.task_names(),
            pending_bug_count: state.project.backlog().bug_count(),
            pending_feature_count: state.project.backlog().feature_count(),
            state: state.project.clone(),
        })
    }

    /// Materialises a bug-fix task for an explicitly chosen worker.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError`] when the template fails to resolve or
    /// the state lock is poisoned.
    pub fn create_bug_fix_task(
        &self,
        bug_description: &str,
        worker: WorkerId,
    ) -> AssignmentResult<Task> {
        let parameters = TaskParameters::new()
            .with(PARAM_BUG_DESCRIPTION, bug_description)
            .with(PARAM_ASSIGNED_AGENT, worker.as_str())
            .with_worker(worker);
        self.create_direct(BUG_FIX_TASK, &parameters)
    }

    /// Materialises a feature task for an explicitly chosen worker.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError`] when the template fails to resolve or
    /// the state lock is poisoned.
    pub fn create_feature_task(
        &self,
        feature_description: &str,
        worker: WorkerId,
    ) -> AssignmentResult<Task> {
        let parameters = TaskParameters::new()
            .with(PARAM_FEATURE_DESCRIPTION, feature_description)
            .with(PARAM_ASSIGNED_AGENT, worker.as_str())
            .with_worker(worker);
        self.create_direct(FEATURE_IMPLEMENTATION_TASK, &parameters)
    }

    /// Materialises a technical research task on the given topic.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError`] when the template fails to resolve or
    /// the state lock is poisoned.
    pub fn create_research_task(&self, research_topic: &str) -> AssignmentResult<Task> {
        let parameters = TaskParameters::new().with(PARAM_RESEARCH_TOPIC, research_topic);
        self.create_direct(TECHNICAL_RESEARCH_TASK, &parameters)
    }

    fn create_direct(&self, template_name: &str, parameters: &TaskParameters) -> AssignmentResult<Task> {
        let state = self.read_state()?;
        let context = ProjectContext {
            state: state.project.clone(),
            completed_tasks: state.ledger.count(),
        };
        Ok(self.factory.create_task(template_name, parameters, &context)?)
    }

    fn steady_state_task(
        &self,
        role: Option<WorkerRole>,
        worker: &WorkerId,
        project: &ProjectState,
        context: &ProjectContext,
    ) -> Result<Option<Task>, TemplateError> {
        let Some(worker_role) = role else {
            return Ok(None);
        };

        if worker_role.handles_backlog() {
            if let Some(bug) = project.backlog().pending_bugs().first() {
                let parameters = TaskParameters::new()
                    .with(PARAM_BUG_DESCRIPTION, bug.description.clone())
                    .with(PARAM_ASSIGNED_AGENT, worker.as_str());
                return Ok(Some(self.factory.create_task(
                    BUG_FIX_TASK,
                    &parameters,
                    context,
                )?));
            }
            if let Some(feature) = project.backlog().pending_features().first() {
                let parameters = TaskParameters::new()
                    .with(PARAM_FEATURE_DESCRIPTION, feature.description.clone())
                    .with(PARAM_ASSIGNED_AGENT, worker.as_str());
                return Ok(Some(self.factory.create_task(
                    FEATURE_IMPLEMENTATION_TASK,
                    &parameters,
                    context,
                )?));
            }
        }

        if worker_role == WorkerRole::ProductManager {
            return Ok(Some(self.factory.create_task(
                NEXT_STEPS_PLANNING_TASK,
                &TaskParameters::new(),
                context,
            )?));
        }

        Ok(None)
    }

    fn read_state(&self) -> AssignmentResult<RwLockReadGuard<'_, EngineState>> {
        self.state
            .read()
            .map_err(|error| AssignmentError::StateUnavailable(error.to_string()))
    }

    fn write_state(&self) -> AssignmentResult<RwLockWriteGuard<'_, EngineState>> {
        self.state
            .write()
            .map_err(|error| AssignmentError::StateUnavailable(error.to_string()))
    }
}
