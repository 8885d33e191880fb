//! CSV error types

use thiserror::Error;

/// Result type for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur while loading a CSV file
#[derive(Debug, Error)]
pub enum CsvError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error (malformed input, ragged records)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The requested index column does not exist
    #[error("Index column {index} out of range for {columns} columns")]
    IndexColumn { index: usize, columns: usize },

    /// The loaded data does not form a valid frame
    #[error("Layout error: {0}")]
    Layout(#[from] exhibit_layout::LayoutError),
}
