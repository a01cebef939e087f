//! Application initialization and resource setup.
//!
//! This module provides functions to initialize all shared resources:
//! - Logger
//! - HTTP client (with timeout and User-Agent)
//! - Pipeline context (HTTP client, whois-service lookup and limits)
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

use std::sync::Arc;

use url::Url;

use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::pipeline::PipelineContext;
use crate::whois::{ServiceLookup, WhoisLookup};

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Checks that the listing host is an absolute http(s) URL and strips the trailing slash.
fn validate_listing_host(raw: &str) -> Result<String, InitializationError> {
    let invalid = |reason: &str| {
        InitializationError::ListingHostError(raw.to_string(), reason.to_string())
    };

    let url = Url::parse(raw).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host"));
    }
    Ok(raw.trim_end_matches('/').to_string())
}

/// Builds the shared pipeline context from the configuration.
///
/// # Errors
///
/// Returns `InitializationError` if the HTTP client or the WHOIS client cannot
/// be built, or the listing host is not a valid base URL.
pub async fn init_context(config: &Config) -> Result<Arc<PipelineContext>, InitializationError> {
    let whois = ServiceLookup::new(config.whois_timeout()).await?;
    build_context(config, Arc::new(whois))
}

/// Assembles the context around an existing WHOIS lookup.
pub fn build_context(
    config: &Config,
    whois: Arc<dyn WhoisLookup>,
) -> Result<Arc<PipelineContext>, InitializationError> {
    let listing_host = validate_listing_host(&config.listing_host)?;
    let client = init_client(config)?;

    Ok(Arc::new(PipelineContext {
        client,
        whois,
        listing_host,
        max_pages: config.max_pages,
        max_days: config.max_days,
    }))
}
