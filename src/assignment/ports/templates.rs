//! Task template registry port.
//!
//! The registry port provides template definitions to the task factory.
//! Definitions are external configuration the core loads at initialisation.

use thiserror::Error;

use crate::assignment::domain::TaskTemplate;

/// Result type for template registry operations.
pub type TemplateRegistryResult<T> = Result<T, TemplateRegistryError>;

/// Port for loading task template definitions.
pub trait TemplateRegistry: Send + Sync {
    /// Finds a template definition by its unique name.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateRegistryError`] when registry access fails.
    fn find_by_name(&self, name: &str) -> TemplateRegistryResult<Option<TaskTemplate>>;

    /// Lists all available template definitions.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateRegistryError`] when registry access fails.
    fn list(&self) -> TemplateRegistryResult<Vec<TaskTemplate>>;
}

/// Errors for template registry operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TemplateRegistryError {
    /// The registry contains invalid template definitions.
    #[error("invalid task template definition: {0}")]
    InvalidDefinition(String),

    /// General storage or adapter failure.
    #[error("task template registry unavailable: {0}")]
    Unavailable(String),
}
