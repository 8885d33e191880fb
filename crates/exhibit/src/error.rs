//! Facade error type

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from building, placing or saving exhibits
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid layout, or the workbook rejected a write
    #[error(transparent)]
    Layout(#[from] exhibit_layout::LayoutError),

    /// The XLSX package could not be written
    #[error(transparent)]
    Xlsx(#[from] exhibit_xlsx::XlsxError),

    /// The CSV input could not be loaded
    #[cfg(feature = "csv")]
    #[error(transparent)]
    Csv(#[from] exhibit_csv::CsvError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The finished file could not be moved into place
    #[error("Cannot save workbook: {0}")]
    Persist(#[from] tempfile::PersistError),
}
