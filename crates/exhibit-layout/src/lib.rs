//! # exhibit-layout
//!
//! Layout trees of formatted tables and the engine that places them on
//! worksheets.
//!
//! - [`Table`] - a [`Frame`] laid out with a header row, an index column and
//!   per-column formats
//! - [`Container`] - tables and other containers side by side (a Row) or
//!   stacked (a Column), optionally titled
//! - [`Tabs`] - one exhibit per named sheet
//! - [`Renderer`] - places any of these onto a [`SheetWriter`], returning the
//!   [`PlacedBlock`]s it produced
//!
//! Sizes are known at construction, so a node can be positioned before
//! anything is written.
//!
//! ## Example
//!
//! ```rust
//! use exhibit_core::Workbook;
//! use exhibit_layout::{Container, Frame, RenderOptions, Renderer, Series, Table};
//!
//! let frame = Frame::new(vec![
//!     Series::new("Paid", [100.0, 250.0]),
//!     Series::new("Incurred", [150.0, 300.0]),
//! ])
//! .unwrap();
//! let table = Table::builder(frame).title(["Losses"]).build().unwrap();
//! let row = Container::row([table.clone(), table]).build().unwrap();
//! assert_eq!((row.height(), row.width()), (4 + 1, 6));
//!
//! let mut workbook = Workbook::new();
//! let placed = Renderer::new(&mut workbook, &RenderOptions::default())
//!     .render(&row)
//!     .unwrap();
//! assert_eq!(placed.len(), 5);
//! ```

pub mod container;
pub mod error;
pub mod exhibit;
pub mod formats;
pub mod frame;
pub mod margin;
pub mod registry;
pub mod render;
pub mod sink;
pub mod table;
pub mod tabs;
pub mod title;

pub use container::{Axis, Container, ContainerBuilder};
pub use error::{LayoutError, LayoutResult};
pub use exhibit::{Exhibit, Node};
pub use formats::Formats;
pub use frame::{DType, Frame, Series, Value};
pub use margin::Margin;
pub use registry::FormatRegistry;
pub use render::{
    BlockKind, PlacedBlock, RenderOptions, Renderable, Renderer, DEFAULT_FOOTER,
    DEFAULT_MAX_COLUMN_WIDTH, DEFAULT_MAX_PORTRAIT_WIDTH, DEFAULT_SHEET_NAME,
};
pub use sink::{FormatId, SheetId, SheetWriter};
pub use table::{
    default_header_format, default_index_format, Header, Table, TableBuilder,
    COL_PADDING_MULTIPLIER, MIN_NUMERIC_COL_WIDTH,
};
pub use tabs::Tabs;
pub use title::{default_title_ladder, title_ladder, Title, TitleFormats, TITLE_LADDER_LEN};
