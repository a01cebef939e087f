//! Spreadsheet report generation.

use std::future::Future;
use std::path::Path;

use log::{debug, info, warn};
use rust_xlsxwriter::Workbook;
use tempfile::NamedTempFile;

use super::row::{record_to_row, REPORT_HEADERS};
use super::types::ExportError;
use crate::whois::WhoisRecord;

const WORKSHEET_NAME: &str = "dominios";

/// A generated report waiting to be delivered.
///
/// The file lives in the temporary directory and is removed when the report
/// is delivered or dropped.
#[derive(Debug)]
pub struct ReportFile {
    file: NamedTempFile,
    rows: usize,
}

impl ReportFile {
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Number of data rows, header excluded.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Hands the file to `send`, then removes it whatever the outcome.
    pub async fn deliver<F, Fut, E>(self, send: F) -> Result<(), E>
    where
        F: FnOnce(&Path) -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        let result = send(self.file.path()).await;
        let path = self.file.path().to_path_buf();
        if let Err(e) = self.file.close() {
            warn!("Failed to remove report file {}: {}", path.display(), e);
        } else {
            debug!("Removed report file {}", path.display());
        }
        result
    }
}

/// Writes the records to a new spreadsheet.
///
/// Returns `Ok(None)` when there is nothing to report; no file is created.
///
/// # Errors
///
/// Returns `ExportError` if the temporary file cannot be created or the
/// workbook cannot be written.
pub fn export_report(records: &[WhoisRecord]) -> Result<Option<ReportFile>, ExportError> {
    if records.is_empty() {
        debug!("No WHOIS records, skipping report");
        return Ok(None);
    }

    let file = tempfile::Builder::new()
        .prefix("dominios_whois_")
        .suffix(".xlsx")
        .tempfile()?;

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(WORKSHEET_NAME)?;

    for (col, header) in REPORT_HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }
    for (index, record) in records.iter().enumerate() {
        let row = (index + 1) as u32;
        for (col, value) in record_to_row(record).iter().enumerate() {
            if !value.is_empty() {
                worksheet.write_string(row, col as u16, value)?;
            }
        }
    }

    workbook.save(file.path())?;
    info!(
        "Report written: {} rows to {}",
        records.len(),
        file.path().display()
    );

    Ok(Some(ReportFile {
        file,
        rows: records.len(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use std::io::Read;

    fn record(domain: &str) -> WhoisRecord {
        WhoisRecord {
            domain_name: Some(domain.to_string()),
            registrar: Some("Registrar Inc.".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_records_no_file() {
        assert!(export_report(&[]).unwrap().is_none());
    }

    #[test]
    fn test_report_is_a_zip_container() {
        let report = export_report(&[record("a.com"), record("b.shop")])
            .unwrap()
            .expect("report for two records");
        assert_eq!(report.rows(), 2);
        assert_eq!(
            report.path().extension().and_then(|e| e.to_str()),
            Some("xlsx")
        );
        let bytes = std::fs::read(report.path()).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    fn zip_entry(path: &Path, name: &str) -> String {
        let file = std::fs::File::open(path).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        let mut entry = archive.by_name(name).unwrap();
        let mut xml = String::new();
        entry.read_to_string(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_workbook_has_headers_and_one_row_per_record() {
        let report = export_report(&[record("a.com"), record("b.shop"), record("c.xyz")])
            .unwrap()
            .unwrap();

        let sheet = zip_entry(report.path(), "xl/worksheets/sheet1.xml");
        let row_numbers: Vec<String> = Regex::new(r#"<row r="(\d+)""#)
            .unwrap()
            .captures_iter(&sheet)
            .map(|c| c[1].to_string())
            .collect();
        assert_eq!(row_numbers, vec!["1", "2", "3", "4"]);

        // headers are written first, so they open the shared string table
        let strings = zip_entry(report.path(), "xl/sharedStrings.xml");
        let texts: Vec<String> = Regex::new(r"<t(?: [^>]*)?>([^<]*)</t>")
            .unwrap()
            .captures_iter(&strings)
            .map(|c| c[1].to_string())
            .collect();
        assert_eq!(&texts[..REPORT_HEADERS.len()], &REPORT_HEADERS[..]);
        assert!(texts.contains(&"b.shop".to_string()));

        let workbook = zip_entry(report.path(), "xl/workbook.xml");
        assert!(workbook.contains(r#"name="dominios""#));
    }

    #[tokio::test]
    async fn test_file_removed_after_delivery() {
        let report = export_report(&[record("a.com")]).unwrap().unwrap();
        let path = report.path().to_path_buf();

        let result: Result<(), String> = report
            .deliver(|p| {
                let exists = p.exists();
                async move {
                    assert!(exists);
                    Ok(())
                }
            })
            .await;

        assert!(result.is_ok());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_file_removed_after_failed_delivery() {
        let report = export_report(&[record("a.com")]).unwrap().unwrap();
        let path = report.path().to_path_buf();

        let result = report
            .deliver(|_| async { Err::<(), _>("upload failed".to_string()) })
            .await;

        assert_eq!(result, Err("upload failed".to_string()));
        assert!(!path.exists());
    }
}
