//! Unit tests for the assignment context.

mod backlog_tests;
