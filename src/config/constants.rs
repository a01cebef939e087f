//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including the listing site contract, timeouts, limits and file names.

// Listing site
/// Default host of the newly-registered-domains listing site
pub const DEFAULT_LISTING_HOST: &str = "https://newly-registered-domains.abtdomain.com";
/// Path suffix following `<YYYY-MM-DD>-<tld>` in every listing URL.
/// The page index and a trailing slash are appended to it.
pub const LISTING_PATH_SUFFIX: &str = "-newly-registered-domains-part-";
/// Inline style fragment that marks the domain-name cells of a listing page
pub const DOMAIN_CELL_STYLE_MARKER: &str = "word-wrap: break-word";
/// First pagination index of every listing source
pub const FIRST_PAGE_INDEX: u32 = 1;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Network operation timeouts
/// Per-request HTTP timeout in seconds
pub const HTTP_TIMEOUT_SECS: u64 = 30;
/// Per-domain WHOIS timeout in seconds.
///
/// whois-service applies its own, much longer, internal timeouts; every
/// lookup is wrapped in this one so a slow server cannot stall the batch.
pub const WHOIS_TIMEOUT_SECS: u64 = 10;

// Safety caps
/// Maximum number of days accepted in one date range.
/// The listing site publishes one set of pages per day, so every extra day
/// multiplies the scraping and WHOIS work.
pub const MAX_DAYS_PER_RANGE: usize = 31;
/// Maximum number of pages fetched for a single listing source.
/// Prevents unbounded pagination when the site never returns an empty page.
pub const MAX_PAGES_PER_SOURCE: u32 = 200;

// Files
/// Default credentials file (plaintext or encrypted, see `--encrypt-credentials`)
pub const DEFAULT_CREDENTIALS_PATH: &str = "credenciales.txt";
/// Default key file for encrypted credentials
pub const DEFAULT_KEY_PATH: &str = "clave.key";
/// File name of the spreadsheet delivered to the user
pub const REPORT_FILENAME: &str = "dominios_whois.xlsx";
