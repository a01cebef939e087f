// Shared test helpers: mock listing pages, a mock WHOIS lookup and a test context.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use httptest::{matchers::*, responders::*, Expectation, Server};

use nrd_whois::whois::{WhoisError, WhoisLookup, WhoisRecord};
use nrd_whois::PipelineContext;

/// Renders a listing page with one domain cell per entry.
pub fn listing_page(domains: &[&str]) -> String {
    let cells: String = domains
        .iter()
        .map(|d| {
            format!(
                "<div class=\"row\"><div style=\"text-align: left; word-wrap: break-word;\">{}</div></div>",
                d
            )
        })
        .collect();
    format!(
        "<html><head><title>Newly registered</title></head><body><div style=\"margin: 0\">header</div>{}</body></html>",
        cells
    )
}

/// Path of one listing page, e.g. `/2024-01-15-com-newly-registered-domains-part-1/`.
pub fn listing_path(day: &str, tld: &str, page: u32) -> String {
    format!("/{}-{}-newly-registered-domains-part-{}/", day, tld, page)
}

/// Expects the pages of one source: each entry of `pages` is served in turn,
/// then the next page answers 404.
pub fn expect_source(server: &Server, day: &str, tld: &str, pages: &[&[&str]]) {
    for (index, domains) in pages.iter().enumerate() {
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                listing_path(day, tld, index as u32 + 1),
            ))
            .respond_with(status_code(200).body(listing_page(domains))),
        );
    }
    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            listing_path(day, tld, pages.len() as u32 + 1),
        ))
        .respond_with(status_code(404)),
    );
}

/// Mock WHOIS lookup answering every query directly.
///
/// Domains starting with `unregistered` have no registration data; every
/// query is recorded in order.
#[derive(Default)]
pub struct MockWhois {
    pub queries: Mutex<Vec<String>>,
}

#[async_trait]
impl WhoisLookup for MockWhois {
    async fn lookup(&self, domain: &str) -> Result<WhoisRecord, WhoisError> {
        let domain = domain.to_lowercase();
        self.queries.lock().unwrap().push(domain.clone());

        if domain.starts_with("unregistered") {
            return Err(WhoisError::NoData(domain));
        }
        Ok(WhoisRecord {
            domain_name: Some(domain),
            creation_date: Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).single(),
            expiration_date: Utc.with_ymd_and_hms(2025, 1, 15, 8, 0, 0).single(),
            registrar: Some("Mock Registrar LLC".to_string()),
            abuse_contact: Some("abuse@mock-registrar.test".to_string()),
            nameservers: vec!["ns1.mock-dns.test".to_string()],
            status: vec!["ok".to_string()],
            whois_server: Some("whois.mock-registrar.test".to_string()),
            ..Default::default()
        })
    }
}

/// Pipeline context pointed at the mock listing site and the mock WHOIS lookup.
pub fn test_context(listing: &Server, whois: &Arc<MockWhois>) -> PipelineContext {
    PipelineContext {
        client: Arc::new(reqwest::Client::new()),
        whois: whois.clone(),
        listing_host: listing.url_str(""),
        max_pages: 50,
        max_days: 31,
    }
}
