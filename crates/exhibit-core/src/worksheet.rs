//! Worksheet implementation

use std::collections::BTreeMap;

use crate::cell::{CellAddress, CellData, CellRange, CellValue};
use crate::error::{Error, Result};

/// Page orientation used when printing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageOrientation {
    #[default]
    Portrait,
    Landscape,
}

impl PageOrientation {
    /// The OOXML `orientation` attribute value
    pub fn xlsx_name(&self) -> &'static str {
        match self {
            PageOrientation::Portrait => "portrait",
            PageOrientation::Landscape => "landscape",
        }
    }
}

/// Print settings for a sheet
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageSetup {
    pub orientation: PageOrientation,
    /// Footer in header/footer control-code syntax (`&C`, `&P`, `&N`, `&A`)
    pub footer: Option<String>,
}

/// A single worksheet
///
/// Cells are kept sorted by (row, column) so they can be streamed out in
/// row-major order.
#[derive(Debug, Clone)]
pub struct Worksheet {
    name: String,
    cells: BTreeMap<(u32, u16), CellData>,
    merged: Vec<CellRange>,
    column_widths: BTreeMap<u16, f64>,
    page_setup: PageSetup,
}

impl Worksheet {
    /// Create a new empty worksheet
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            cells: BTreeMap::new(),
            merged: Vec::new(),
            column_widths: BTreeMap::new(),
            page_setup: PageSetup::default(),
        }
    }

    /// Get the worksheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    // === Cell Access ===

    /// Write a value with a style index, replacing whatever was there
    pub fn set_cell_at<V: Into<CellValue>>(
        &mut self,
        row: u32,
        col: u32,
        value: V,
        style_index: u32,
    ) -> Result<()> {
        let addr = CellAddress::checked(row, col)?;
        self.cells
            .insert((addr.row, addr.col), CellData::new(value.into(), style_index));
        Ok(())
    }

    /// Get the written cell at a position
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&CellData> {
        self.cells.get(&(row, col))
    }

    /// Get the value at a position (`Empty` if nothing was written)
    pub fn get_value_at(&self, row: u32, col: u16) -> CellValue {
        self.cell_at(row, col)
            .map(|c| c.value.clone())
            .unwrap_or_default()
    }

    /// Iterate written cells in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = (CellAddress, &CellData)> {
        self.cells
            .iter()
            .map(|(&(row, col), data)| (CellAddress::new(row, col), data))
    }

    /// Number of written cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Smallest range containing every written cell
    pub fn used_range(&self) -> Option<CellRange> {
        let (&(first_row, _), _) = self.cells.iter().next()?;
        let (&(last_row, _), _) = self.cells.iter().next_back()?;
        let min_col = self.cells.keys().map(|(_, c)| *c).min()?;
        let max_col = self.cells.keys().map(|(_, c)| *c).max()?;
        Some(CellRange::from_indices(first_row, min_col, last_row, max_col))
    }

    // === Merged Cells ===

    /// Merge a range of cells
    ///
    /// A range may not overlap an existing merged region.
    pub fn merge_cells(&mut self, range: CellRange) -> Result<()> {
        if range.is_single_cell() {
            return Ok(());
        }
        if let Some(existing) = self.merged.iter().find(|m| m.overlaps(&range)) {
            return Err(Error::MergedCellConflict(format!("{} ({})", range, existing)));
        }
        self.merged.push(range);
        Ok(())
    }

    /// All merged regions in insertion order
    pub fn merged_regions(&self) -> &[CellRange] {
        &self.merged
    }

    // === Columns ===

    /// Set the width of a column in character units
    pub fn set_column_width(&mut self, col: u32, width: f64) -> Result<()> {
        let addr = CellAddress::checked(0, col)?;
        if !width.is_finite() || width < 0.0 {
            return Err(Error::other(format!("invalid column width {}", width)));
        }
        self.column_widths.insert(addr.col, width);
        Ok(())
    }

    /// Width set for a column, if any
    pub fn column_width(&self, col: u16) -> Option<f64> {
        self.column_widths.get(&col).copied()
    }

    /// Columns with an explicit width, in column order
    pub fn custom_column_widths(&self) -> impl Iterator<Item = (u16, f64)> + '_ {
        self.column_widths.iter().map(|(c, w)| (*c, *w))
    }

    // === Page Setup ===

    pub fn page_setup(&self) -> &PageSetup {
        &self.page_setup
    }

    pub fn page_setup_mut(&mut self) -> &mut PageSetup {
        &mut self.page_setup
    }
}
