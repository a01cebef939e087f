//! Listing source generation.
//!
//! Maps a calendar day to the per-TLD listing base URLs of the
//! newly-registered-domains site.

use chrono::NaiveDate;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};

use crate::config::LISTING_PATH_SUFFIX;

/// Top-level domains published by the listing site, in scraping order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Tld {
    Com,
    Shop,
    Xyz,
    Net,
}

/// One listing for one TLD on one day.
///
/// `base_url` ends with the pagination marker; append the page index and a
/// trailing slash to get a page URL (see [`ListingSource::page_url`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSource {
    pub date: NaiveDate,
    pub tld: Tld,
    pub base_url: String,
}

impl ListingSource {
    /// URL of page `page` of this listing.
    pub fn page_url(&self, page: u32) -> String {
        format!("{}{}/", self.base_url, page)
    }
}

/// Builds the listing sources of `date`, one per TLD in [`Tld`] order.
///
/// `host` is the site root, e.g. `https://newly-registered-domains.abtdomain.com`;
/// a trailing slash is tolerated.
pub fn listing_sources(host: &str, date: NaiveDate) -> Vec<ListingSource> {
    let host = host.trim_end_matches('/');
    let day = date.format("%Y-%m-%d");
    Tld::iter()
        .map(|tld| ListingSource {
            date,
            tld,
            base_url: format!("{}/{}-{}{}", host, day, tld.as_ref(), LISTING_PATH_SUFFIX),
        })
        .collect()
}

/// Builds the listing sources of every day, day by day.
pub fn listing_sources_for_days(host: &str, days: &[NaiveDate]) -> Vec<ListingSource> {
    days.iter()
        .flat_map(|day| listing_sources(host, *day))
        .collect()
}
