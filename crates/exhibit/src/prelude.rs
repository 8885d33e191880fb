//! Prelude module - common imports for exhibit users
//!
//! ```rust
//! use exhibit::prelude::*;
//! ```

pub use crate::{
    // Layout
    Container,
    Exhibit,
    ExhibitExt,
    Formats,
    Frame,
    Margin,
    RenderOptions,
    Rendered,
    Series,
    Table,
    Tabs,
    TitleFormats,
    Value,

    // Formats
    FormatSpec,

    // Errors
    Error,
    Result,

    // Documents
    Workbook,
    XlsxWriter,
};

#[cfg(feature = "csv")]
pub use crate::{CsvFrameReader, CsvReadOptions};
