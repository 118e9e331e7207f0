//! Error types for template configuration and parsing.

use thiserror::Error;

/// Fatal configuration errors raised for template definitions and rendering.
///
/// None of these are retried: a scheduler with unresolvable templates
/// cannot safely operate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// The requested template name is absent from the template set.
    #[error("task template '{0}' was not found")]
    TemplateNotFound(String),

    /// A template definition is malformed.
    #[error("invalid template definition '{template}': {reason}")]
    InvalidDefinition {
        /// Template name.
        template: String,
        /// Validation reason.
        reason: String,
    },

    /// A pattern references a key absent from defaults and overrides.
    #[error("template '{template}' references undefined parameter '{parameter}'")]
    UndefinedParameter {
        /// Template name.
        template: String,
        /// Undefined parameter key.
        parameter: String,
    },

    /// Parameter substitution failed while rendering a pattern.
    #[error("template rendering failed for '{template}': {reason}")]
    Render {
        /// Template name.
        template: String,
        /// Rendering failure reason.
        reason: String,
    },

    /// Registry lookup failed.
    #[error("task template registry error: {0}")]
    Registry(String),
}

/// Error returned while parsing backlog priorities from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown backlog priority: {0}")]
pub struct ParsePriorityError(pub String);
