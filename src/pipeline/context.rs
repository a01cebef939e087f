//! Shared resources for pipeline runs.

use std::sync::Arc;

use crate::whois::WhoisLookup;

/// Everything a pipeline run needs, shared by every chat.
///
/// Built once at startup and handed to the bot behind an `Arc`.
pub struct PipelineContext {
    /// HTTP client for listing pages
    pub client: Arc<reqwest::Client>,
    /// WHOIS lookups; whois-service in production
    pub whois: Arc<dyn WhoisLookup>,
    /// Base URL of the listing site, without trailing slash
    pub listing_host: String,
    /// Page cap per listing source
    pub max_pages: u32,
    /// Day cap per date range
    pub max_days: usize,
}
