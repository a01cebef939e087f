//! Report export.
//!
//! Flattens WHOIS records into rows and writes them to a temporary `.xlsx`
//! workbook that is removed once delivered.

mod row;
mod types;
mod xlsx;

pub use row::{record_to_row, REPORT_HEADERS};
pub use types::ExportError;
pub use xlsx::{export_report, ReportFile};
