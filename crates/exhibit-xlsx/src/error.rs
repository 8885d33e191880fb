//! XLSX error types

use thiserror::Error;

/// Result type for XLSX operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur while writing an XLSX package
#[derive(Debug, Error)]
pub enum XlsxError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// A workbook needs at least one sheet to be a valid package
    #[error("Workbook has no worksheets")]
    EmptyWorkbook,

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] exhibit_core::Error),
}
