//! Export error types.

use thiserror::Error;

/// Why the report could not be produced.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Creating or closing the temporary report file failed.
    #[error("report file error: {0}")]
    Io(#[from] std::io::Error),

    /// The spreadsheet could not be written.
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
