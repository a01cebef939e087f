//! Pagination-driven domain collection.

use log::{debug, info, warn};

use crate::config::FIRST_PAGE_INDEX;
use crate::error_handling::{FailureKind, RunStats};

use super::fetch::fetch_page;
use super::sources::ListingSource;

/// Walks every listing source page by page and concatenates the domains found.
///
/// Each source is paged from index 1 until a page comes back empty, then the
/// next source starts; a finished source is never fetched again. Domains keep
/// their page order and are not deduplicated.
///
/// A transport error ends the pagination of that source, exactly like an
/// empty page. A source still returning domains after `max_pages` pages is
/// cut off with a warning.
pub async fn collect_domains(
    client: &reqwest::Client,
    sources: &[ListingSource],
    max_pages: u32,
    stats: &RunStats,
) -> Vec<String> {
    let mut all_domains = Vec::new();

    for source in sources {
        let mut page = FIRST_PAGE_INDEX;
        let mut found_in_source = 0usize;

        loop {
            if page - FIRST_PAGE_INDEX >= max_pages {
                warn!(
                    "Stopping {} after {} pages: page cap reached",
                    source.base_url, max_pages
                );
                stats.increment(FailureKind::PageCapReached);
                break;
            }

            let url = source.page_url(page);
            let domains = match fetch_page(client, &url).await {
                Ok(domains) => domains,
                Err(e) => {
                    warn!("Failed to fetch listing page {}: {}", url, e);
                    stats.increment(FailureKind::ListingTransport);
                    break;
                }
            };

            if domains.is_empty() {
                debug!("Listing {} ended at page {}", source.base_url, page);
                break;
            }

            found_in_source += domains.len();
            all_domains.extend(domains);
            page += 1;
        }

        info!(
            "Collected {} domains for .{} on {}",
            found_in_source,
            source.tld.as_ref(),
            source.date
        );
    }

    all_domains
}
