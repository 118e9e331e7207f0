//! Task assignment for a fixed worker roster.
//!
//! The assignment context implements the decision engine that hands out
//! work: a phase gate derived from the completion ledger, a FIFO backlog of
//! bugs and feature requests consulted once every milestone is satisfied,
//! and a template-driven task factory. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
