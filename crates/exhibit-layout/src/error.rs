//! Error types for exhibit-layout

use thiserror::Error;

/// Result type alias using [`LayoutError`]
pub type LayoutResult<T> = std::result::Result<T, LayoutError>;

/// Errors raised while building a layout tree or placing it
///
/// Everything except [`LayoutError::Writer`] and
/// [`LayoutError::MissingColumnFormat`] is raised at construction time, before
/// any cell is written.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A `formats` argument of a shape that cannot be mapped onto columns
    #[error("Cannot infer format from {0}")]
    UnrecognizedFormat(String),

    /// A per-column format names a column the dataset does not have
    #[error("Format given for unknown column '{0}'")]
    UnknownColumn(String),

    /// Explicit header labels do not match the column count
    #[error("Expected {expected} header labels, got {found}")]
    HeaderMismatch { expected: usize, found: usize },

    /// Explicit column widths do not match the column count
    #[error("Expected {expected} column widths, got {found}")]
    ColumnWidthsMismatch { expected: usize, found: usize },

    /// More per-line title formats than title lines
    #[error("{formats} title formats given for a {lines}-line title")]
    TitleFormatMismatch { formats: usize, lines: usize },

    /// Columns (or the index) of different lengths
    #[error("Column '{column}' has {found} values, expected {expected}")]
    RaggedFrame {
        column: String,
        expected: usize,
        found: usize,
    },

    /// A Row or Column with no children
    #[error("{0} has no children")]
    EmptyContainer(&'static str),

    /// A node whose height or width does not fit in a cell coordinate
    #[error("{0} size overflows the cell coordinate range")]
    SizeOverflow(&'static str),

    /// A data column with no resolved format
    #[error("No format resolved for column '{0}'")]
    MissingColumnFormat(String),

    /// The sheet writer rejected an operation
    #[error("Writer error: {0}")]
    Writer(#[from] exhibit_core::Error),
}

/// Add up the parts of a node's height or width
pub(crate) fn size_sum(
    node: &'static str,
    parts: impl IntoIterator<Item = u32>,
) -> LayoutResult<u32> {
    parts
        .into_iter()
        .try_fold(0u32, u32::checked_add)
        .ok_or(LayoutError::SizeOverflow(node))
}

/// Convert a row or column count to a cell coordinate
pub(crate) fn cell_count(node: &'static str, count: usize) -> LayoutResult<u32> {
    u32::try_from(count).map_err(|_| LayoutError::SizeOverflow(node))
}
