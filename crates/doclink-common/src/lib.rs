//! Common types and utilities for the doclink resolution pass.
//!
//! This crate provides the ambient pieces shared by the resolver:
//! - Recursion limits
//! - Fatal diagnostics (`LinkError`)
//! - Module specifier to file path resolution
//! - Tracing subscriber setup

// Centralized limits and thresholds
pub mod limits;

// Diagnostics - fatal errors reported with file/line context
pub mod diagnostics;
pub use diagnostics::LinkError;

// Path handling for `require`/`import()` specifiers
pub mod paths;
pub use paths::{normalize_path, resolve_specifier};

// Tracing subscriber configuration (DOCLINK_LOG / DOCLINK_LOG_FORMAT)
pub mod tracing_config;
pub use tracing_config::init_tracing;

#[cfg(test)]
#[path = "../tests/paths_tests.rs"]
mod paths_tests;

#[cfg(test)]
#[path = "../tests/tracing_config_tests.rs"]
mod tracing_config_tests;
