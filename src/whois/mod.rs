//! WHOIS enrichment of discovered domains.
//!
//! This module provides:
//! - Lookups through the whois-service crate, bounded by a per-domain timeout
//! - Mapping of its parsed answers onto typed records
//! - Sequential enrichment of a domain list
//!
//! Failed lookups are logged and skipped; they never abort the batch.

mod client;
mod parse;
mod types;

use log::{debug, warn};

use crate::error_handling::{FailureKind, RunStats};

// Re-export public API
pub use client::{ServiceLookup, WhoisLookup};
pub use types::{WhoisError, WhoisRecord};

/// Looks up every domain, one at a time, in input order.
///
/// Domains whose lookup fails are left out of the result and counted as
/// [`FailureKind::WhoisLookup`].
pub async fn enrich(
    lookup: &dyn WhoisLookup,
    domains: &[String],
    stats: &RunStats,
) -> Vec<WhoisRecord> {
    let mut records = Vec::with_capacity(domains.len());

    for (index, domain) in domains.iter().enumerate() {
        debug!("WHOIS {}/{}: {}", index + 1, domains.len(), domain);
        match lookup.lookup(domain).await {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!("WHOIS lookup failed for {}: {}", domain, e);
                stats.increment(FailureKind::WhoisLookup);
            }
        }
    }

    records
}
