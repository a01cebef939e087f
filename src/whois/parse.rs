//! Mapping of whois-service answers onto report records.

use chrono::{DateTime, Utc};
use whois_service::{ParsedWhoisData, WhoisResponse};

use super::types::WhoisRecord;

/// Raw-text key of the registrar abuse email, which whois-service does not parse.
const ABUSE_CONTACT_KEY: &str = "registrar abuse contact email";

/// Converts a whois-service response to our WhoisRecord
pub(crate) fn convert_parsed_data(response: &WhoisResponse) -> WhoisRecord {
    let mut record = match &response.parsed_data {
        Some(parsed) => record_from_parsed(parsed),
        None => WhoisRecord::default(),
    };

    record.domain_name = Some(response.domain.to_lowercase());
    record.abuse_contact = raw_field(&response.raw_data, ABUSE_CONTACT_KEY);
    let server = response.whois_server.trim();
    if !server.is_empty() {
        record.whois_server = Some(server.to_lowercase());
    }
    record
}

fn record_from_parsed(parsed: &ParsedWhoisData) -> WhoisRecord {
    let mut nameservers: Vec<String> = Vec::new();
    for ns in &parsed.name_servers {
        let ns = ns.trim().trim_end_matches('.').to_lowercase();
        if !ns.is_empty() && !nameservers.contains(&ns) {
            nameservers.push(ns);
        }
    }

    // Status lines carry an ICANN link after the code
    let mut status: Vec<String> = Vec::new();
    for line in &parsed.status {
        if let Some(code) = line.split_whitespace().next() {
            if !status.iter().any(|s| s == code) {
                status.push(code.to_string());
            }
        }
    }

    WhoisRecord {
        domain_name: None,
        creation_date: parsed
            .creation_date
            .as_deref()
            .and_then(parse_date_string),
        expiration_date: parsed
            .expiration_date
            .as_deref()
            .and_then(parse_date_string),
        registrar: non_empty(&parsed.registrar),
        abuse_contact: None,
        nameservers,
        status,
        whois_server: None,
        registrant: non_empty(&parsed.registrant_name)
            .or_else(|| non_empty(&parsed.registrant_email)),
        admin_contact: non_empty(&parsed.admin_email),
        tech_contact: non_empty(&parsed.tech_email),
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// First non-empty value of `key` (case-insensitive) in a raw `Key: value` answer.
fn raw_field(raw: &str, key: &str) -> Option<String> {
    raw.lines().find_map(|line| {
        let (k, v) = line.trim().split_once(':')?;
        let v = v.trim();
        (k.trim().eq_ignore_ascii_case(key) && !v.is_empty()).then(|| v.to_string())
    })
}

/// Attempts to parse a date string in various formats
pub(crate) fn parse_date_string(date_str: &str) -> Option<DateTime<Utc>> {
    let date_str = date_str.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt.with_timezone(&Utc));
    }

    // Try common WHOIS date formats
    let formats = [
        "%Y-%m-%dT%H:%M:%S%.fZ",
        "%Y-%m-%dT%H:%M:%SZ",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d",
        "%d-%b-%Y",
        "%d/%m/%Y",
        "%Y.%m.%d",
    ];

    for format in &formats {
        if let Ok(dt) = DateTime::parse_from_str(date_str, format) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(naive_dt) = chrono::NaiveDateTime::parse_from_str(date_str, format) {
            return Some(naive_dt.and_utc());
        }
        if let Ok(naive_date) = chrono::NaiveDate::parse_from_str(date_str, format) {
            return Some(naive_date.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    None
}
