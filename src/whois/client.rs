//! WHOIS lookups through the whois-service crate.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use tokio::time::timeout;
use whois_service::WhoisClient;

use super::parse::convert_parsed_data;
use super::types::{WhoisError, WhoisRecord};

/// Source of registration data for one domain.
///
/// The pipeline holds a `dyn WhoisLookup` so runs can be driven without
/// network access.
#[async_trait]
pub trait WhoisLookup: Send + Sync {
    /// Looks up the registration data of `domain`.
    async fn lookup(&self, domain: &str) -> Result<WhoisRecord, WhoisError>;
}

/// Lowercases and validates a domain before it is queried.
fn normalize_domain(domain: &str) -> Result<String, WhoisError> {
    let domain = domain.trim().trim_end_matches('.').to_lowercase();
    match domain.rsplit_once('.') {
        Some((name, tld)) if !name.is_empty() && !tld.is_empty() => Ok(domain),
        _ => Err(WhoisError::InvalidDomain(domain)),
    }
}

/// whois-service client with a per-domain deadline.
///
/// whois-service discovers the WHOIS server of each TLD through IANA and
/// parses the answer; it keeps no on-disk cache here.
pub struct ServiceLookup {
    client: WhoisClient,
    timeout: Duration,
}

impl ServiceLookup {
    /// Creates the underlying whois-service client.
    ///
    /// # Errors
    ///
    /// Returns `WhoisError::Init` if whois-service cannot load its configuration
    /// or bootstrap data.
    pub async fn new(timeout: Duration) -> Result<Self, WhoisError> {
        let client = WhoisClient::new_without_cache()
            .await
            .map_err(|e| WhoisError::Init(e.to_string()))?;
        Ok(ServiceLookup { client, timeout })
    }
}

#[async_trait]
impl WhoisLookup for ServiceLookup {
    /// Queries whois-service, bounded by the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns `WhoisError` if the domain is malformed, the lookup fails or
    /// times out, or the answer has no registration data.
    async fn lookup(&self, domain: &str) -> Result<WhoisRecord, WhoisError> {
        let domain = normalize_domain(domain)?;
        debug!("Starting WHOIS lookup for domain: {}", domain);

        let response = match timeout(self.timeout, self.client.lookup(&domain)).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                return Err(WhoisError::Service {
                    domain,
                    message: e.to_string(),
                })
            }
            Err(_) => {
                return Err(WhoisError::Timeout {
                    domain,
                    seconds: self.timeout.as_secs(),
                })
            }
        };

        let record = convert_parsed_data(&response);
        if !record.has_registration_data() {
            return Err(WhoisError::NoData(domain));
        }
        info!(
            "WHOIS lookup successful for {} via {} ({}ms)",
            domain, response.whois_server, response.query_time_ms
        );
        Ok(record)
    }
}
