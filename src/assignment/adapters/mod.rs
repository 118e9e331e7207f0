//! Adapter implementations for the assignment context.

pub mod memory;
