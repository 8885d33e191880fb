//! Cell-related types
//!
//! This module contains:
//! - [`CellValue`] - The value stored in a cell
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`CellRange`] - A rectangular range of cells (e.g., "A1:D1")
//! - [`CellData`] - A written cell: value plus style index

mod address;
mod value;

pub use address::{CellAddress, CellRange};
pub use value::{excel_serial, CellValue};

/// A written cell
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellData {
    /// Cell value
    pub value: CellValue,
    /// Index into the workbook's style pool (0 = default style)
    pub style_index: u32,
}

impl CellData {
    /// Create cell data from a value and a style index
    pub fn new(value: CellValue, style_index: u32) -> Self {
        Self { value, style_index }
    }
}
