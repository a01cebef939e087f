//! Binary-side helpers.
//!
//! This module provides the startup banner and the credential bootstrap
//! used by the main application.

pub mod banner;
pub mod credentials;

// Re-export public API
pub use banner::print_banner;
pub use credentials::{credential_store, load_credentials};
