//! Port contracts for the assignment context.

pub mod templates;

pub use templates::{TemplateRegistry, TemplateRegistryError, TemplateRegistryResult};
