//! Error type definitions.
//!
//! This module defines the error types shared across the application. Errors
//! that belong to a single component (date input, WHOIS, export, credentials)
//! live next to that component.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::whois::WhoisError;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error creating the whois-service client.
    #[error("WHOIS client initialization error: {0}")]
    WhoisClientError(#[from] WhoisError),

    /// The configured listing host is not a usable base URL.
    #[error("Invalid listing host '{0}': {1}")]
    ListingHostError(String, String),
}

/// Per-run failure categories.
///
/// Each category is recovered locally (the run continues); the counts are
/// logged at the end of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureKind {
    /// A listing page could not be fetched at all (connect, timeout, body)
    ListingTransport,
    /// A listing source hit the page cap before running out of pages
    PageCapReached,
    /// A WHOIS lookup failed and the domain was left out of the report
    WhoisLookup,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::ListingTransport => "Listing page transport error",
            FailureKind::PageCapReached => "Listing page cap reached",
            FailureKind::WhoisLookup => "WHOIS lookup failure",
        }
    }
}
