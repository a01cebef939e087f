//! Listing page fetching and domain extraction.

use std::sync::LazyLock;

use log::debug;
use scraper::{Html, Selector};

use crate::config::DOMAIN_CELL_STYLE_MARKER;

static DOMAIN_CELL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    let selector = format!("div[style*=\"{}\"]", DOMAIN_CELL_STYLE_MARKER);
    Selector::parse(&selector).expect("Failed to parse domain cell selector - this is a bug")
});

/// Extracts the domain names of one listing page.
///
/// Domain cells are the `div` elements whose inline `style` contains
/// [`DOMAIN_CELL_STYLE_MARKER`]. Their text is trimmed and empty cells are
/// dropped; page order is kept.
pub fn extract_domains(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&DOMAIN_CELL_SELECTOR)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}

/// Fetches one listing page and extracts its domain names.
///
/// A non-success status yields an empty list, which the collector reads as
/// the end of the listing.
///
/// # Errors
///
/// Returns the `reqwest::Error` when the request or the body read fails.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<Vec<String>, reqwest::Error> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        debug!("Listing page {} answered {}", url, status);
        return Ok(Vec::new());
    }

    let body = response.text().await?;
    let domains = extract_domains(&body);
    debug!("Listing page {} yielded {} domains", url, domains.len());
    Ok(domains)
}
