//! Newly-registered-domain discovery.
//!
//! This module provides:
//! - Date input parsing and range expansion
//! - Listing source (per-TLD URL) generation
//! - Page fetching and domain-cell extraction
//! - Pagination-driven collection
//! - Keyword filtering with per-keyword tallies

mod collect;
mod dates;
mod fetch;
mod keywords;
mod sources;

// Re-export public API
pub use collect::collect_domains;
pub use dates::{parse_date_input, DateInputError, DateRange};
pub use fetch::{extract_domains, fetch_page};
pub use keywords::{filter_by_keywords, normalize_keywords, KeywordTally};
pub use sources::{listing_sources, listing_sources_for_days, ListingSource, Tld};
