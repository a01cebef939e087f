//! WHOIS data structures.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Registration data of one domain.
///
/// Field order is the column order of the exported report. Every field is a
/// typed absence when the WHOIS servers did not provide it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhoisRecord {
    /// Domain name as queried, lowercased
    pub domain_name: Option<String>,
    /// Domain creation date
    pub creation_date: Option<DateTime<Utc>>,
    /// Domain expiration date
    pub expiration_date: Option<DateTime<Utc>>,
    /// Registrar name
    pub registrar: Option<String>,
    /// Registrar abuse contact email
    pub abuse_contact: Option<String>,
    /// Nameservers, lowercased, in response order
    pub nameservers: Vec<String>,
    /// Domain status codes (e.g., "clientTransferProhibited")
    pub status: Vec<String>,
    /// WHOIS server that answered
    pub whois_server: Option<String>,
    /// Registrant name or email
    pub registrant: Option<String>,
    /// Administrative contact
    pub admin_contact: Option<String>,
    /// Technical contact
    pub tech_contact: Option<String>,
}

impl WhoisRecord {
    /// Whether the answer carries registration data at all.
    ///
    /// "No match" answers parse into records with none of these fields.
    pub fn has_registration_data(&self) -> bool {
        self.registrar.is_some()
            || self.creation_date.is_some()
            || self.expiration_date.is_some()
            || !self.nameservers.is_empty()
    }
}

/// Why a WHOIS lookup produced no record.
#[derive(Error, Debug)]
pub enum WhoisError {
    /// The input does not look like a domain name.
    #[error("invalid domain '{0}'")]
    InvalidDomain(String),

    /// The whois-service client could not be created.
    #[error("WHOIS client initialization failed: {0}")]
    Init(String),

    /// whois-service reported an error for this domain.
    #[error("WHOIS lookup failed for {domain}: {message}")]
    Service { domain: String, message: String },

    /// The lookup did not finish within the per-domain deadline.
    #[error("WHOIS lookup for {domain} timed out after {seconds}s")]
    Timeout { domain: String, seconds: u64 },

    /// The servers answered without any registration data.
    #[error("no registration data for {0}")]
    NoData(String),
}
