//! Tables: a dataset laid out as a block of formatted cells
//!
//! A table occupies `rows + header + col_nums` rows and `cols + index` columns,
//! plus its margins and the rows of its title. Formats and column widths are
//! resolved once, when the table is built.

use exhibit_core::FormatSpec;

use crate::error::{cell_count, size_sum, LayoutError, LayoutResult};
use crate::formats::Formats;
use crate::frame::Frame;
use crate::margin::Margin;
use crate::title::{Title, TitleFormats};

/// Width given to numeric columns regardless of their content
pub const MIN_NUMERIC_COL_WIDTH: f64 = 12.0;

/// Bold header text is slightly wider than the character count suggests
pub const COL_PADDING_MULTIPLIER: f64 = 1.1;

/// Format of header cells unless overridden
pub fn default_header_format() -> FormatSpec {
    default_index_format().with("bottom", 1)
}

/// Format of index cells unless overridden
pub fn default_index_format() -> FormatSpec {
    FormatSpec::num_format("0;(0)")
        .with("text_wrap", true)
        .with("bold", true)
        .with("valign", "bottom")
        .with("align", "center")
}

/// Whether and how the header row is shown
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Header {
    /// Column names of the dataset
    #[default]
    Show,
    /// No header row
    Hide,
    /// Explicit labels, one per column
    Labels(Vec<String>),
}

/// A formatted block of data
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    frame: Frame,
    header: Header,
    index: bool,
    index_label: String,
    col_nums: bool,
    formats: Vec<FormatSpec>,
    header_format: FormatSpec,
    index_format: FormatSpec,
    column_widths: Vec<f64>,
    margin: Margin,
    title: Option<Title>,
    height: u32,
    width: u32,
}

impl Table {
    /// A table with the default options
    pub fn new(frame: Frame) -> LayoutResult<Table> {
        Table::builder(frame).build()
    }

    pub fn builder(frame: Frame) -> TableBuilder {
        TableBuilder::new(frame)
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn shows_header(&self) -> bool {
        !matches!(self.header, Header::Hide)
    }

    /// Labels written in the header row (without the index label)
    pub fn header_labels(&self) -> Vec<&str> {
        match &self.header {
            Header::Labels(labels) => labels.iter().map(String::as_str).collect(),
            _ => self.frame.column_names().collect(),
        }
    }

    pub fn index(&self) -> bool {
        self.index
    }

    pub fn index_label(&self) -> &str {
        &self.index_label
    }

    pub fn col_nums(&self) -> bool {
        self.col_nums
    }

    /// Resolved formats of the data columns
    pub fn column_formats(&self) -> &[FormatSpec] {
        &self.formats
    }

    /// Resolved format of one data column
    pub fn column_format(&self, col: usize) -> LayoutResult<&FormatSpec> {
        self.formats.get(col).ok_or_else(|| {
            let name = self
                .frame
                .column(col)
                .map_or_else(|| col.to_string(), |c| c.name().to_string());
            LayoutError::MissingColumnFormat(name)
        })
    }

    pub fn header_format(&self) -> &FormatSpec {
        &self.header_format
    }

    pub fn index_format(&self) -> &FormatSpec {
        &self.index_format
    }

    /// Width of each data column, in character units
    pub fn column_widths(&self) -> &[f64] {
        &self.column_widths
    }

    pub fn margin(&self) -> Margin {
        self.margin
    }

    pub fn title(&self) -> Option<&Title> {
        self.title.as_ref()
    }

    /// Rows taken, including margins and title
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Columns taken, including margins
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Columns holding cells: data columns plus the index column
    pub fn content_width(&self) -> u32 {
        self.frame.n_cols() as u32 + u32::from(self.index)
    }
}

/// Builder for [`Table`]
#[derive(Debug, Clone)]
pub struct TableBuilder {
    frame: Frame,
    header: Header,
    index: bool,
    index_label: Option<String>,
    col_nums: bool,
    formats: Formats,
    header_format: FormatSpec,
    index_format: FormatSpec,
    column_widths: Option<Vec<f64>>,
    margin: Margin,
    title: Vec<String>,
    title_formats: TitleFormats,
}

impl TableBuilder {
    fn new(frame: Frame) -> Self {
        Self {
            frame,
            header: Header::Show,
            index: true,
            index_label: None,
            col_nums: false,
            formats: Formats::Inherit,
            header_format: FormatSpec::new(),
            index_format: FormatSpec::new(),
            column_widths: None,
            margin: Margin::ZERO,
            title: Vec::new(),
            title_formats: TitleFormats::Default,
        }
    }

    /// Show or hide the header row
    pub fn header(mut self, show: bool) -> Self {
        self.header = if show { Header::Show } else { Header::Hide };
        self
    }

    /// Show the header row with explicit labels
    pub fn header_labels<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.header = Header::Labels(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Write the row index as the first column
    pub fn index(mut self, index: bool) -> Self {
        self.index = index;
        self
    }

    /// Header text above the index column
    pub fn index_label<S: Into<String>>(mut self, label: S) -> Self {
        self.index_label = Some(label.into());
        self
    }

    /// Add a row of negative column numbers beneath the header
    pub fn col_nums(mut self, col_nums: bool) -> Self {
        self.col_nums = col_nums;
        self
    }

    pub fn formats<F: Into<Formats>>(mut self, formats: F) -> Self {
        self.formats = formats.into();
        self
    }

    /// Attributes laid over the default header format
    pub fn header_format(mut self, spec: FormatSpec) -> Self {
        self.header_format = spec;
        self
    }

    /// Attributes laid over the default index format
    pub fn index_format(mut self, spec: FormatSpec) -> Self {
        self.index_format = spec;
        self
    }

    /// Explicit widths, one per data column
    ///
    /// Widths are still capped at [`RenderOptions::max_column_width`] when the
    /// table is placed, and the capped widths decide the page orientation.
    ///
    /// [`RenderOptions::max_column_width`]: crate::RenderOptions::max_column_width
    pub fn column_widths(mut self, widths: Vec<f64>) -> Self {
        self.column_widths = Some(widths);
        self
    }

    pub fn margin<M: Into<Margin>>(mut self, margin: M) -> Self {
        self.margin = margin.into();
        self
    }

    pub fn title<S: Into<String>>(mut self, lines: impl IntoIterator<Item = S>) -> Self {
        self.title = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn title_formats<T: Into<TitleFormats>>(mut self, formats: T) -> Self {
        self.title_formats = formats.into();
        self
    }

    pub fn build(self) -> LayoutResult<Table> {
        let n_cols = self.frame.n_cols();
        if let Header::Labels(labels) = &self.header {
            if labels.len() != n_cols {
                return Err(LayoutError::HeaderMismatch {
                    expected: n_cols,
                    found: labels.len(),
                });
            }
        }

        let formats = self.formats.resolve(&self.frame)?;
        let column_widths = match self.column_widths {
            Some(widths) if widths.len() != n_cols => {
                return Err(LayoutError::ColumnWidthsMismatch {
                    expected: n_cols,
                    found: widths.len(),
                })
            }
            Some(widths) => widths,
            None => computed_widths(&self.frame, &self.header),
        };

        let content_width =
            size_sum("Table", [cell_count("Table", n_cols)?, u32::from(self.index)])?;
        let title = Title::new(
            self.title,
            &self.title_formats,
            content_width,
            self.margin.title_margin(),
        )?;

        let show_header = !matches!(self.header, Header::Hide);
        let height = size_sum(
            "Table",
            [
                cell_count("Table", self.frame.n_rows())?,
                u32::from(show_header),
                u32::from(self.col_nums),
                self.margin.top,
                self.margin.bottom,
                title.as_ref().map_or(0, Title::height),
            ],
        )?;
        let width = size_sum("Table", [content_width, self.margin.left, self.margin.right])?;

        let index_label = self
            .index_label
            .or_else(|| self.frame.index_name().map(str::to_string))
            .unwrap_or_default();

        Ok(Table {
            frame: self.frame,
            header: self.header,
            index: self.index,
            index_label,
            col_nums: self.col_nums,
            formats,
            header_format: self.header_format.merged_onto(&default_header_format()),
            index_format: self.index_format.merged_onto(&default_index_format()),
            column_widths,
            margin: self.margin,
            title,
            height,
            width,
        })
    }
}

/// Width of each column from its header and content
///
/// Headers wrap, so only their longest space-separated token has to fit.
/// Numeric columns get [`MIN_NUMERIC_COL_WIDTH`]; other columns fit their
/// longest rendered value.
fn computed_widths(frame: &Frame, header: &Header) -> Vec<f64> {
    frame
        .columns()
        .iter()
        .enumerate()
        .map(|(i, series)| {
            let label = match header {
                Header::Labels(labels) => labels[i].as_str(),
                _ => series.name(),
            };
            let longest_token = label.split(' ').map(|t| t.chars().count()).max().unwrap_or(0);
            let header_width = longest_token as f64 * COL_PADDING_MULTIPLIER;
            let content_width = if series.dtype().is_numeric() {
                MIN_NUMERIC_COL_WIDTH
            } else {
                let longest = series.values().iter().map(|v| v.display_len()).max().unwrap_or(0);
                longest as f64 * COL_PADDING_MULTIPLIER
            };
            header_width.max(content_width)
        })
        .collect()
}
