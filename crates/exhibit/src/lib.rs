//! # exhibit
//!
//! Render report exhibits (formatted tables arranged in rows, columns and
//! tabs) to Excel workbooks.
//!
//! ## Features
//!
//! - Tables with header rows, index columns and per-column number formats
//! - Side-by-side and stacked composition with titles and margins
//! - One exhibit per sheet with [`Tabs`]
//! - Structural format deduplication
//! - Atomic saves: the destination is only written once the whole workbook is
//!   rendered and packaged
//!
//! ## Example
//!
//! ```rust
//! use exhibit::prelude::*;
//!
//! let frame = Frame::new(vec![
//!     Series::new("Paid", [100.0, 250.0]),
//!     Series::new("Ratio", [0.5, 0.75]),
//! ])
//! .unwrap();
//!
//! let table = Table::builder(frame)
//!     .formats(vec![FormatSpec::num_format("#,0"), FormatSpec::num_format("0%")])
//!     .title(["Loss Summary", "As of 2024-12-31"])
//!     .build()
//!     .unwrap();
//!
//! let rendered = table.render_workbook(&RenderOptions::default()).unwrap();
//! assert_eq!(rendered.workbook.sheet_count(), 1);
//!
//! // table.to_excel("summary.xlsx").unwrap();
//! ```

mod error;
pub mod prelude;

pub use error::{Error, Result};

// Re-export core types
pub use exhibit_core::{
    CellAddress, CellRange, CellValue, Color, FormatSpec, FormatValue, NumberFormat,
    PageOrientation, Style, Workbook, Worksheet,
};

// Re-export layout types
pub use exhibit_layout::{
    BlockKind, Container, ContainerBuilder, DType, Exhibit, FormatRegistry, Formats, Frame,
    Header, LayoutError, Margin, PlacedBlock, RenderOptions, Renderable, Renderer, Series,
    SheetWriter, Table, TableBuilder, Tabs, Title, TitleFormats, Value, DEFAULT_SHEET_NAME,
};

// Re-export I/O types
#[cfg(feature = "csv")]
pub use exhibit_csv::{CsvError, CsvFrameReader, CsvReadOptions};
pub use exhibit_xlsx::{XlsxError, XlsxWriter};

use std::path::Path;

use tempfile::NamedTempFile;

/// An in-memory workbook and where everything was placed in it
#[derive(Debug, Clone)]
pub struct Rendered {
    pub workbook: Workbook,
    pub placements: Vec<PlacedBlock>,
}

/// Extension trait giving every renderable exhibit workbook output
pub trait ExhibitExt {
    /// Render into a new in-memory workbook
    fn render_workbook(&self, options: &RenderOptions) -> Result<Rendered>;

    /// Render into a new in-memory workbook with default options
    fn to_workbook(&self) -> Result<Workbook> {
        Ok(self.render_workbook(&RenderOptions::default())?.workbook)
    }

    /// Save as an XLSX file with default options
    fn to_excel<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.to_excel_with(path, &RenderOptions::default())
    }

    /// Save as an XLSX file
    ///
    /// The file is written next to `path` and renamed into place, so `path`
    /// is untouched if anything fails.
    fn to_excel_with<P: AsRef<Path>>(&self, path: P, options: &RenderOptions) -> Result<()> {
        let path = path.as_ref();
        let rendered = self.render_workbook(options)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        XlsxWriter::write(&rendered.workbook, tmp.as_file_mut())?;
        tmp.persist(path)?;

        log::debug!(
            "saved {} sheets to {}",
            rendered.workbook.sheet_count(),
            path.display()
        );
        Ok(())
    }
}

impl<R: Renderable + ?Sized> ExhibitExt for R {
    fn render_workbook(&self, options: &RenderOptions) -> Result<Rendered> {
        let mut workbook = Workbook::new();
        let placements = Renderer::new(&mut workbook, options).render(self)?;
        Ok(Rendered {
            workbook,
            placements,
        })
    }
}

/// Load a CSV file as a frame
#[cfg(feature = "csv")]
pub fn read_csv<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> Result<Frame> {
    Ok(CsvFrameReader::read_file(path, options)?)
}
