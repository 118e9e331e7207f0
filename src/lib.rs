//! Gaffer: task assignment engine for an AI agent crew.
//!
//! This crate decides which unit of work each worker in a fixed roster
//! should pick up next, based on which project milestones have already been
//! completed and on a dynamic backlog of bugs and feature requests.
//!
//! # Architecture
//!
//! Gaffer follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (template catalogues)
//!
//! # Modules
//!
//! - [`assignment`]: Phase gating, backlog prioritisation, and task creation

pub mod assignment;
