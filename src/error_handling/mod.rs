//! Error handling and run statistics.
//!
//! This module provides:
//! - Initialization error types
//! - Failure categories for locally recovered errors
//! - Per-run failure counters
//!
//! Component-specific errors (`DateInputError`, `WhoisError`, `ExportError`,
//! `CredentialsError`) are defined next to their components.

mod stats;
mod types;

// Re-export public API
pub use stats::RunStats;
pub use types::{FailureKind, InitializationError};
