//! # exhibit-core
//!
//! Core data structures for the exhibit-sheets report renderer.
//!
//! This crate provides the document side of rendering:
//! - [`CellValue`] - Values written into cells
//! - [`CellAddress`] and [`CellRange`] - Cell addressing and ranges
//! - [`FormatSpec`] - Attribute maps describing a cell format (`num_format`, `bold`, ...)
//! - [`Style`] and [`StylePool`] - Resolved cell formatting and its deduplication
//! - [`Workbook`], [`Worksheet`] - The document being written
//!
//! ## Example
//!
//! ```rust
//! use exhibit_core::{CellValue, FormatSpec, Style, Workbook};
//!
//! let mut workbook = Workbook::new();
//! let index = workbook.ensure_worksheet("Summary").unwrap();
//!
//! let bold = Style::try_from(&FormatSpec::new().with("bold", true)).unwrap();
//! let style_index = workbook.add_style(bold);
//!
//! let sheet = workbook.worksheet_mut(index).unwrap();
//! sheet.set_cell_at(0, 0, CellValue::string("Total"), style_index).unwrap();
//! sheet.set_cell_at(0, 1, 42.0, style_index).unwrap();
//! ```

pub mod cell;
pub mod error;
pub mod style;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{CellAddress, CellData, CellRange, CellValue};
pub use error::{Error, Result};
pub use workbook::Workbook;
pub use worksheet::{PageOrientation, PageSetup, Worksheet};

pub use style::{
    Alignment, BorderEdge, BorderLineStyle, BorderStyle, Color, FontStyle, FormatSpec,
    FormatValue, HorizontalAlignment, NumberFormat, Style, StylePool, Underline,
    VerticalAlignment,
};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
