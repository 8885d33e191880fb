//! # exhibit-xlsx
//!
//! XLSX (Office Open XML) writer for exhibit-sheets workbooks.
//!
//! Cells are written as inline strings, numbers and booleans; merged ranges,
//! column widths, page orientation and footers are carried into the sheet
//! parts.

pub mod error;
pub mod writer;

mod styles;

pub use error::{XlsxError, XlsxResult};
pub use writer::XlsxWriter;
