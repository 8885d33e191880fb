//! The writer the placement engine drives
//!
//! [`SheetWriter`] is the minimal set of spreadsheet primitives placement
//! needs. [`Workbook`] implements it; tests use recording writers.

use exhibit_core::{
    CellAddress, CellRange, CellValue, Error, FormatSpec, PageOrientation, Result, Style,
    Workbook, Worksheet,
};

/// Handle of a sheet returned by [`SheetWriter::ensure_sheet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SheetId(pub usize);

/// Handle of a registered format returned by [`SheetWriter::add_format`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FormatId(pub u32);

/// Spreadsheet primitives used by the placement engine
pub trait SheetWriter {
    /// Handle of the named sheet, creating it if needed
    fn ensure_sheet(&mut self, name: &str) -> Result<SheetId>;

    /// Register a fully resolved format
    fn add_format(&mut self, spec: &FormatSpec) -> Result<FormatId>;

    fn write_cell(
        &mut self,
        sheet: SheetId,
        row: u32,
        col: u32,
        value: CellValue,
        format: FormatId,
    ) -> Result<()>;

    /// Merge a range and write one value across it
    fn merge_range(
        &mut self,
        sheet: SheetId,
        range: CellRange,
        value: CellValue,
        format: FormatId,
    ) -> Result<()>;

    fn set_column_width(&mut self, sheet: SheetId, col: u32, width: f64) -> Result<()>;

    fn set_orientation(&mut self, sheet: SheetId, orientation: PageOrientation) -> Result<()>;

    fn set_footer(&mut self, sheet: SheetId, footer: &str) -> Result<()>;
}

fn sheet_mut(workbook: &mut Workbook, sheet: SheetId) -> Result<&mut Worksheet> {
    let count = workbook.sheet_count();
    workbook
        .worksheet_mut(sheet.0)
        .ok_or(Error::SheetOutOfBounds(sheet.0, count))
}

impl SheetWriter for Workbook {
    fn ensure_sheet(&mut self, name: &str) -> Result<SheetId> {
        self.ensure_worksheet(name).map(SheetId)
    }

    fn add_format(&mut self, spec: &FormatSpec) -> Result<FormatId> {
        let style = Style::try_from(spec)?;
        Ok(FormatId(self.add_style(style)))
    }

    fn write_cell(
        &mut self,
        sheet: SheetId,
        row: u32,
        col: u32,
        value: CellValue,
        format: FormatId,
    ) -> Result<()> {
        if self.style(format.0).is_none() {
            return Err(Error::InvalidStyleIndex(format.0));
        }
        sheet_mut(self, sheet)?.set_cell_at(row, col, value, format.0)
    }

    fn merge_range(
        &mut self,
        sheet: SheetId,
        range: CellRange,
        value: CellValue,
        format: FormatId,
    ) -> Result<()> {
        if self.style(format.0).is_none() {
            return Err(Error::InvalidStyleIndex(format.0));
        }
        let ws = sheet_mut(self, sheet)?;
        ws.merge_cells(range)?;
        // every cell of the range carries the format so borders and fills span it
        for row in range.start.row..=range.end.row {
            for col in range.start.col..=range.end.col {
                let cell = if CellAddress::new(row, col) == range.start {
                    value.clone()
                } else {
                    CellValue::Empty
                };
                ws.set_cell_at(row, u32::from(col), cell, format.0)?;
            }
        }
        Ok(())
    }

    fn set_column_width(&mut self, sheet: SheetId, col: u32, width: f64) -> Result<()> {
        sheet_mut(self, sheet)?.set_column_width(col, width)
    }

    fn set_orientation(&mut self, sheet: SheetId, orientation: PageOrientation) -> Result<()> {
        sheet_mut(self, sheet)?.page_setup_mut().orientation = orientation;
        Ok(())
    }

    fn set_footer(&mut self, sheet: SheetId, footer: &str) -> Result<()> {
        sheet_mut(self, sheet)?.page_setup_mut().footer = Some(footer.to_string());
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! A writer that records every call, for placement tests

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Op {
        Sheet(String),
        Format(FormatSpec),
        Cell {
            sheet: usize,
            row: u32,
            col: u32,
            value: CellValue,
            format: u32,
        },
        Merge {
            sheet: usize,
            range: String,
            value: CellValue,
            format: u32,
        },
        Width {
            sheet: usize,
            col: u32,
            width: f64,
        },
        Orientation(usize, PageOrientation),
        Footer(usize, String),
    }

    #[derive(Debug, Default)]
    pub(crate) struct RecordingWriter {
        pub sheets: Vec<String>,
        pub formats: Vec<FormatSpec>,
        pub ops: Vec<Op>,
    }

    impl RecordingWriter {
        pub fn cells(&self) -> impl Iterator<Item = (u32, u32, &CellValue, u32)> {
            self.ops.iter().filter_map(|op| match op {
                Op::Cell {
                    row,
                    col,
                    value,
                    format,
                    ..
                } => Some((*row, *col, value, *format)),
                _ => None,
            })
        }

        pub fn cell(&self, row: u32, col: u32) -> Option<&CellValue> {
            self.cells()
                .filter(|(r, c, _, _)| *r == row && *c == col)
                .map(|(_, _, v, _)| v)
                .last()
        }

        pub fn format_of(&self, row: u32, col: u32) -> Option<&FormatSpec> {
            self.cells()
                .filter(|(r, c, _, _)| *r == row && *c == col)
                .map(|(_, _, _, f)| f)
                .last()
                .and_then(|f| self.formats.get(f as usize))
        }

        pub fn merges(&self) -> Vec<(String, CellValue)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Merge { range, value, .. } => Some((range.clone(), value.clone())),
                    _ => None,
                })
                .collect()
        }

        pub fn widths(&self) -> Vec<(u32, f64)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Width { col, width, .. } => Some((*col, *width)),
                    _ => None,
                })
                .collect()
        }
    }

    impl SheetWriter for RecordingWriter {
        fn ensure_sheet(&mut self, name: &str) -> Result<SheetId> {
            let id = match self.sheets.iter().position(|s| s == name) {
                Some(i) => i,
                None => {
                    self.sheets.push(name.to_string());
                    self.sheets.len() - 1
                }
            };
            self.ops.push(Op::Sheet(name.to_string()));
            Ok(SheetId(id))
        }

        fn add_format(&mut self, spec: &FormatSpec) -> Result<FormatId> {
            self.formats.push(spec.clone());
            self.ops.push(Op::Format(spec.clone()));
            Ok(FormatId(self.formats.len() as u32 - 1))
        }

        fn write_cell(
            &mut self,
            sheet: SheetId,
            row: u32,
            col: u32,
            value: CellValue,
            format: FormatId,
        ) -> Result<()> {
            self.ops.push(Op::Cell {
                sheet: sheet.0,
                row,
                col,
                value,
                format: format.0,
            });
            Ok(())
        }

        fn merge_range(
            &mut self,
            sheet: SheetId,
            range: CellRange,
            value: CellValue,
            format: FormatId,
        ) -> Result<()> {
            self.ops.push(Op::Merge {
                sheet: sheet.0,
                range: range.to_string(),
                value,
                format: format.0,
            });
            Ok(())
        }

        fn set_column_width(&mut self, sheet: SheetId, col: u32, width: f64) -> Result<()> {
            self.ops.push(Op::Width {
                sheet: sheet.0,
                col,
                width,
            });
            Ok(())
        }

        fn set_orientation(&mut self, sheet: SheetId, orientation: PageOrientation) -> Result<()> {
            self.ops.push(Op::Orientation(sheet.0, orientation));
            Ok(())
        }

        fn set_footer(&mut self, sheet: SheetId, footer: &str) -> Result<()> {
            self.ops.push(Op::Footer(sheet.0, footer.to_string()));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workbook_writer() {
        let mut wb = Workbook::new();
        let sheet = wb.ensure_sheet("sheet1").unwrap();
        assert_eq!(wb.ensure_sheet("sheet1").unwrap(), sheet);

        let bold = wb.add_format(&FormatSpec::new().with("bold", true)).unwrap();
        wb.write_cell(sheet, 2, 1, CellValue::from(7.0), bold).unwrap();
        wb.set_column_width(sheet, 1, 12.0).unwrap();
        wb.set_orientation(sheet, PageOrientation::Landscape).unwrap();
        wb.set_footer(sheet, "&A").unwrap();

        let ws = wb.worksheet(0).unwrap();
        assert_eq!(ws.get_value_at(2, 1), CellValue::Number(7.0));
        assert_eq!(ws.cell_at(2, 1).map(|c| c.style_index), Some(bold.0));
        assert_eq!(ws.column_width(1), Some(12.0));
        assert_eq!(ws.page_setup().orientation, PageOrientation::Landscape);
        assert_eq!(ws.page_setup().footer.as_deref(), Some("&A"));
    }

    #[test]
    fn test_workbook_merge_styles_whole_range() {
        let mut wb = Workbook::new();
        let sheet = wb.ensure_sheet("s").unwrap();
        let fmt = wb.add_format(&FormatSpec::new().with("font_size", 20)).unwrap();
        let range = CellRange::from_indices(0, 0, 0, 2);
        wb.merge_range(sheet, range, CellValue::string("Title"), fmt).unwrap();

        let ws = wb.worksheet(0).unwrap();
        assert_eq!(ws.merged_regions(), &[range]);
        assert_eq!(ws.get_value_at(0, 0), CellValue::string("Title"));
        assert_eq!(ws.get_value_at(0, 2), CellValue::Empty);
        assert_eq!(ws.cell_at(0, 2).map(|c| c.style_index), Some(fmt.0));
    }

    #[test]
    fn test_workbook_writer_errors() {
        let mut wb = Workbook::new();
        assert!(wb.add_format(&FormatSpec::new().with("wobble", 1)).is_err());
        assert!(matches!(
            wb.write_cell(SheetId(3), 0, 0, CellValue::Empty, FormatId(0)),
            Err(Error::SheetOutOfBounds(3, 0))
        ));
        let sheet = wb.ensure_sheet("s").unwrap();
        assert!(matches!(
            wb.write_cell(sheet, 0, 0, CellValue::Empty, FormatId(42)),
            Err(Error::InvalidStyleIndex(42))
        ));
    }
}
