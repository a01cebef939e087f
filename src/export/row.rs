//! Flattening of WHOIS records into report rows.

use chrono::{DateTime, Utc};

use crate::whois::WhoisRecord;

/// Report column headers, in record field order.
pub const REPORT_HEADERS: [&str; 11] = [
    "nombre_dominio",
    "fecha_creacion",
    "fecha_expiracion",
    "registrador",
    "abuse_contacto",
    "nameservers",
    "estado",
    "servidor_whois",
    "registrante",
    "contacto_administrador",
    "contacto_tecnico",
];

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const LIST_SEPARATOR: &str = ", ";

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn date(value: &Option<DateTime<Utc>>) -> String {
    value
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// One report row; absent fields become empty cells.
pub fn record_to_row(record: &WhoisRecord) -> [String; 11] {
    [
        text(&record.domain_name),
        date(&record.creation_date),
        date(&record.expiration_date),
        text(&record.registrar),
        text(&record.abuse_contact),
        record.nameservers.join(LIST_SEPARATOR),
        record.status.join(LIST_SEPARATOR),
        text(&record.whois_server),
        text(&record.registrant),
        text(&record.admin_contact),
        text(&record.tech_contact),
    ]
}
