//! # exhibit-csv
//!
//! Loads CSV files into [`Frame`](exhibit_layout::Frame)s for layout.
//!
//! Field types are detected per cell (integers, floats, booleans, dates and
//! date-times); each column's dtype is then inferred from its values.

mod error;
mod options;
mod reader;

pub use error::{CsvError, CsvResult};
pub use options::CsvReadOptions;
pub use reader::{detect_value, CsvFrameReader};
