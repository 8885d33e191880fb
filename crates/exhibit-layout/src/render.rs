//! The placement engine
//!
//! A [`Renderer`] walks a layout tree and drives a [`SheetWriter`]. Placement
//! results are returned as [`PlacedBlock`]s; the tree itself is never
//! modified, so the same tree can be rendered any number of times.

use ahash::AHashSet;
use exhibit_core::{CellAddress, CellRange, CellValue, FormatSpec, PageOrientation};

use crate::container::{Axis, Container};
use crate::error::LayoutResult;
use crate::exhibit::{Exhibit, Node};
use crate::registry::FormatRegistry;
use crate::sink::{SheetId, SheetWriter};
use crate::table::Table;
use crate::tabs::Tabs;
use crate::title::Title;

/// Page footer: centered page count, then the sheet name
pub const DEFAULT_FOOTER: &str = "&CPage &P of &N\n&A";

/// Widest a column is ever made
pub const DEFAULT_MAX_COLUMN_WIDTH: f64 = 30.0;

/// Total table width above which the sheet is printed landscape
pub const DEFAULT_MAX_PORTRAIT_WIDTH: f64 = 120.0;

/// Sheet used when a bare exhibit is rendered
pub const DEFAULT_SHEET_NAME: &str = "sheet1";

/// Document-wide settings of a render
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Merged under every format written
    pub default_format: FormatSpec,
    /// Footer template set on every sheet
    pub footer: Option<String>,
    pub max_column_width: f64,
    pub max_portrait_width: f64,
    pub default_sheet_name: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            default_format: FormatSpec::new(),
            footer: Some(DEFAULT_FOOTER.to_string()),
            max_column_width: DEFAULT_MAX_COLUMN_WIDTH,
            max_portrait_width: DEFAULT_MAX_PORTRAIT_WIDTH,
            default_sheet_name: DEFAULT_SHEET_NAME.to_string(),
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_format(mut self, spec: FormatSpec) -> Self {
        self.default_format = spec;
        self
    }

    pub fn with_footer<S: Into<String>>(mut self, footer: Option<S>) -> Self {
        self.footer = footer.map(Into::into);
        self
    }

    pub fn with_max_column_width(mut self, width: f64) -> Self {
        self.max_column_width = width;
        self
    }

    pub fn with_max_portrait_width(mut self, width: f64) -> Self {
        self.max_portrait_width = width;
        self
    }

    pub fn with_default_sheet_name<S: Into<String>>(mut self, name: S) -> Self {
        self.default_sheet_name = name.into();
        self
    }
}

/// What a placed block holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Title,
    Table,
    Row,
    Column,
}

impl From<Axis> for BlockKind {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => BlockKind::Row,
            Axis::Vertical => BlockKind::Column,
        }
    }
}

/// Where a node ended up
///
/// `start_row`/`start_col` are the origin the node was placed at, before its
/// margins. A titled node yields a `Title` block at the origin followed by
/// the block of its body, which starts below the title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedBlock {
    pub sheet: String,
    pub kind: BlockKind,
    pub start_row: u32,
    pub start_col: u32,
    pub height: u32,
    pub width: u32,
}

/// Something that can be rendered: a list of `(sheet, root)` pairs
pub trait Renderable {
    /// Roots to place, with the sheet each goes to
    fn entries<'a>(&'a self, default_sheet: &'a str) -> Vec<(&'a str, Node<'a>)>;
}

impl Renderable for Tabs {
    fn entries<'a>(&'a self, _default_sheet: &'a str) -> Vec<(&'a str, Node<'a>)> {
        self.iter().map(|(name, e)| (name, e.as_node())).collect()
    }
}

impl Renderable for Exhibit {
    fn entries<'a>(&'a self, default_sheet: &'a str) -> Vec<(&'a str, Node<'a>)> {
        vec![(default_sheet, self.as_node())]
    }
}

impl Renderable for Table {
    fn entries<'a>(&'a self, default_sheet: &'a str) -> Vec<(&'a str, Node<'a>)> {
        vec![(default_sheet, Node::Table(self))]
    }
}

impl Renderable for Container {
    fn entries<'a>(&'a self, default_sheet: &'a str) -> Vec<(&'a str, Node<'a>)> {
        vec![(default_sheet, Node::Container(self))]
    }
}

/// Places layout trees onto a [`SheetWriter`]
///
/// Formats are interned per renderer, so render everything bound for one
/// document through the same renderer.
pub struct Renderer<'w, W: SheetWriter + ?Sized> {
    writer: &'w mut W,
    options: RenderOptions,
    registry: FormatRegistry,
    initialized: AHashSet<SheetId>,
    placed: Vec<PlacedBlock>,
}

impl<'w, W: SheetWriter + ?Sized> Renderer<'w, W> {
    pub fn new(writer: &'w mut W, options: &RenderOptions) -> Self {
        Self {
            writer,
            registry: FormatRegistry::new(options.default_format.clone()),
            options: options.clone(),
            initialized: AHashSet::new(),
            placed: Vec::new(),
        }
    }

    /// Place every root of `exhibits`, returning the blocks placed
    pub fn render<R: Renderable + ?Sized>(
        &mut self,
        exhibits: &R,
    ) -> LayoutResult<Vec<PlacedBlock>> {
        let default_sheet = self.options.default_sheet_name.clone();
        for (sheet, root) in exhibits.entries(&default_sheet) {
            self.render_sheet(sheet, root)?;
        }
        Ok(std::mem::take(&mut self.placed))
    }

    /// Place one root at the top-left corner of `sheet`
    pub fn render_sheet(&mut self, sheet: &str, root: Node<'_>) -> LayoutResult<()> {
        let id = self.writer.ensure_sheet(sheet)?;
        if self.initialized.insert(id) {
            if let Some(footer) = &self.options.footer {
                self.writer.set_footer(id, footer)?;
            }
        }
        log::debug!(
            "placing {}x{} exhibit on sheet '{}'",
            root.height(),
            root.width(),
            sheet
        );
        let cursor = Cursor { sheet, id };
        self.place(&cursor, root, 0, 0)
    }

    /// Formats registered so far
    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    fn place(&mut self, at: &Cursor<'_>, node: Node<'_>, row: u32, col: u32) -> LayoutResult<()> {
        match node.title() {
            Some(title) => {
                self.place_title(at, title, row, col)?;
                self.place_body(at, node, row + title.height(), col)
            }
            None => self.place_body(at, node, row, col),
        }
    }

    fn place_body(
        &mut self,
        at: &Cursor<'_>,
        node: Node<'_>,
        row: u32,
        col: u32,
    ) -> LayoutResult<()> {
        match node {
            Node::Table(table) => self.place_table(at, table, row, col),
            Node::Container(container) => self.place_container(at, container, row, col),
        }
    }

    fn record(
        &mut self,
        at: &Cursor<'_>,
        kind: BlockKind,
        (row, col): (u32, u32),
        (height, width): (u32, u32),
    ) {
        log::trace!(
            "{:?} at ({}, {}) size {}x{} on '{}'",
            kind,
            row,
            col,
            height,
            width,
            at.sheet
        );
        self.placed.push(PlacedBlock {
            sheet: at.sheet.to_string(),
            kind,
            start_row: row,
            start_col: col,
            height,
            width,
        });
    }

    fn place_title(
        &mut self,
        at: &Cursor<'_>,
        title: &Title,
        row: u32,
        col: u32,
    ) -> LayoutResult<()> {
        self.record(
            at,
            BlockKind::Title,
            (row, col),
            (title.height(), title.width()),
        );

        let r0 = row + title.margin().top;
        let c0 = col + title.margin().left;
        for (i, (line, spec)) in title.lines().iter().zip(title.formats()).enumerate() {
            let format = self.registry.resolve(self.writer, spec)?;
            let r = r0 + i as u32;
            let value = CellValue::string(line.as_str());
            if title.width() > 1 {
                let range = CellRange::new(
                    CellAddress::checked(r, c0)?,
                    CellAddress::checked(r, c0 + title.width() - 1)?,
                );
                self.writer.merge_range(at.id, range, value, format)?;
            } else {
                self.writer.write_cell(at.id, r, c0, value, format)?;
            }
        }
        Ok(())
    }

    fn place_container(
        &mut self,
        at: &Cursor<'_>,
        container: &Container,
        row: u32,
        col: u32,
    ) -> LayoutResult<()> {
        let body_height = container.height() - container.title().map_or(0, Title::height);
        self.record(
            at,
            container.axis().into(),
            (row, col),
            (body_height, container.width()),
        );

        let mut row = row + container.margin().top;
        let mut col = col + container.margin().left;
        for child in container.children() {
            self.place(at, child.as_node(), row, col)?;
            match container.axis() {
                Axis::Horizontal => col += child.width(),
                Axis::Vertical => row += child.height(),
            }
        }
        Ok(())
    }

    fn place_table(
        &mut self,
        at: &Cursor<'_>,
        table: &Table,
        row: u32,
        col: u32,
    ) -> LayoutResult<()> {
        let body_height = table.height() - table.title().map_or(0, Title::height);
        self.record(
            at,
            BlockKind::Table,
            (row, col),
            (body_height, table.width()),
        );

        let r0 = row + table.margin().top;
        let c0 = col + table.margin().left;
        let header_rows = u32::from(table.shows_header());
        let data_row = r0 + header_rows + u32::from(table.col_nums());
        let data_col = c0 + u32::from(table.index());

        if table.shows_header() {
            let format = self.registry.resolve(self.writer, table.header_format())?;
            let labels = table
                .index()
                .then(|| table.index_label())
                .into_iter()
                .chain(table.header_labels());
            for (k, label) in labels.enumerate() {
                let c = c0 + k as u32;
                self.writer
                    .write_cell(at.id, r0, c, CellValue::string(label), format)?;
                if table.col_nums() {
                    let marker = CellValue::from(-(k as i64) - 1);
                    self.writer.write_cell(at.id, r0 + 1, c, marker, format)?;
                }
            }
        }

        if table.index() {
            let format = self.registry.resolve(self.writer, table.index_format())?;
            for (i, label) in table.frame().index().iter().enumerate() {
                self.writer.write_cell(
                    at.id,
                    data_row + i as u32,
                    c0,
                    CellValue::string(label.as_str()),
                    format,
                )?;
            }
        }

        let frame = table.frame();
        for (ci, series) in frame.columns().iter().enumerate() {
            let format = self.registry.resolve(self.writer, table.column_format(ci)?)?;
            let c = data_col + ci as u32;
            for (ri, value) in series.values().iter().enumerate() {
                self.writer
                    .write_cell(at.id, data_row + ri as u32, c, value.to_cell_value(), format)?;
                if ri == 0 {
                    let width = self.clamped_width(table.column_widths()[ci]);
                    self.writer.set_column_width(at.id, c, width)?;
                }
            }
        }

        let total: f64 = table
            .column_widths()
            .iter()
            .map(|w| self.clamped_width(*w))
            .sum();
        if total > self.options.max_portrait_width {
            self.writer
                .set_orientation(at.id, PageOrientation::Landscape)?;
        }
        Ok(())
    }

    fn clamped_width(&self, width: f64) -> f64 {
        width.min(self.options.max_column_width)
    }
}

/// The sheet being placed on
struct Cursor<'s> {
    sheet: &'s str,
    id: SheetId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::Formats;
    use crate::frame::{Frame, Series};
    use crate::sink::testing::{Op, RecordingWriter};
    use exhibit_core::Workbook;
    use pretty_assertions::assert_eq;

    fn frame(rows: usize, cols: usize) -> Frame {
        let columns = (0..cols)
            .map(|c| {
                Series::new(
                    format!("c{}", c),
                    (0..rows).map(|r| (r * 10 + c) as f64),
                )
            })
            .collect();
        Frame::new(columns).unwrap()
    }

    fn table(rows: usize, cols: usize) -> Table {
        Table::new(frame(rows, cols)).unwrap()
    }

    fn block(kind: BlockKind, row: u32, col: u32, height: u32, width: u32) -> PlacedBlock {
        PlacedBlock {
            sheet: DEFAULT_SHEET_NAME.to_string(),
            kind,
            start_row: row,
            start_col: col,
            height,
            width,
        }
    }

    fn render<R: Renderable + ?Sized>(exhibit: &R) -> (RecordingWriter, Vec<PlacedBlock>) {
        render_with(exhibit, &RenderOptions::default())
    }

    fn render_with<R: Renderable + ?Sized>(
        exhibit: &R,
        options: &RenderOptions,
    ) -> (RecordingWriter, Vec<PlacedBlock>) {
        let mut writer = RecordingWriter::default();
        let placed = Renderer::new(&mut writer, options).render(exhibit).unwrap();
        (writer, placed)
    }

    #[test]
    fn test_single_table() {
        let (writer, placed) = render(&table(3, 2));
        assert_eq!(placed, vec![block(BlockKind::Table, 0, 0, 4, 3)]);

        // header row, index label first
        assert_eq!(writer.cell(0, 0), Some(&CellValue::string("")));
        assert_eq!(writer.cell(0, 1), Some(&CellValue::string("c0")));
        assert_eq!(writer.cell(0, 2), Some(&CellValue::string("c1")));
        // index column
        assert_eq!(writer.cell(1, 0), Some(&CellValue::string("0")));
        assert_eq!(writer.cell(3, 0), Some(&CellValue::string("2")));
        // data block
        assert_eq!(writer.cell(1, 1), Some(&CellValue::Number(0.0)));
        assert_eq!(writer.cell(3, 2), Some(&CellValue::Number(21.0)));
        assert_eq!(writer.cell(4, 0), None);
        assert_eq!(writer.cells().count(), 3 + 3 + 6);
    }

    #[test]
    fn test_row_of_tables() {
        let row = Container::row([table(3, 2), table(3, 2)]).build().unwrap();
        assert_eq!((row.height(), row.width()), (4, 6));

        let (writer, placed) = render(&row);
        assert_eq!(
            placed,
            vec![
                block(BlockKind::Row, 0, 0, 4, 6),
                block(BlockKind::Table, 0, 0, 4, 3),
                block(BlockKind::Table, 0, 3, 4, 3),
            ]
        );
        assert_eq!(writer.cell(0, 4), Some(&CellValue::string("c0")));
        assert_eq!(writer.cell(3, 5), Some(&CellValue::Number(21.0)));
    }

    #[test]
    fn test_titled_table() {
        let titled = Table::builder(frame(3, 2))
            .title(["Report", "Q1"])
            .build()
            .unwrap();
        assert_eq!(titled.height(), 4 + 2);

        let (writer, placed) = render(&titled);
        assert_eq!(
            placed,
            vec![
                block(BlockKind::Title, 0, 0, 2, 3),
                block(BlockKind::Table, 2, 0, 4, 3),
            ]
        );
        assert_eq!(
            writer.merges(),
            vec![
                ("A1:C1".to_string(), CellValue::string("Report")),
                ("A2:C2".to_string(), CellValue::string("Q1")),
            ]
        );
        assert_eq!(writer.cell(2, 1), Some(&CellValue::string("c0")));
        assert_eq!(writer.cell(3, 0), Some(&CellValue::string("0")));
    }

    #[test]
    fn test_row_with_titled_child() {
        let titled = Table::builder(frame(3, 2)).title(["Paid"]).build().unwrap();
        let row = Container::row([titled, table(3, 2)]).build().unwrap();
        assert_eq!((row.height(), row.width()), (6, 6));

        let (writer, placed) = render(&row);
        assert_eq!(
            placed,
            vec![
                block(BlockKind::Row, 0, 0, 6, 6),
                block(BlockKind::Title, 0, 0, 1, 3),
                block(BlockKind::Table, 1, 0, 4, 3),
                block(BlockKind::Table, 0, 3, 4, 3),
            ]
        );
        assert_eq!(
            writer.merges(),
            vec![("A1:C1".to_string(), CellValue::string("Paid"))]
        );
        // titled body is pushed below its title, its sibling is not
        assert_eq!(writer.cell(1, 1), Some(&CellValue::string("c0")));
        assert_eq!(writer.cell(0, 4), Some(&CellValue::string("c0")));
        assert_eq!(writer.cell(4, 2), Some(&CellValue::Number(21.0)));
        assert_eq!(writer.cell(3, 5), Some(&CellValue::Number(21.0)));
    }

    #[test]
    fn test_bare_spec_broadcast_to_every_column() {
        let data = frame(2, 5);
        let formats = Formats::from_json(&serde_json::json!({"num_format": "0%"}), &data).unwrap();
        let table = Table::builder(data).formats(formats).build().unwrap();

        let (writer, _) = render(&table);
        let expected = FormatSpec::num_format("0%");
        for c in 1..=5 {
            assert_eq!(writer.format_of(1, c), Some(&expected));
        }
        // header, index, one shared column format
        assert_eq!(writer.formats.len(), 3);
    }

    #[test]
    fn test_formats_registered_once_per_document() {
        let column = Container::column([table(2, 3), table(4, 1)])
            .child(table(1, 2))
            .build()
            .unwrap();
        let (writer, _) = render(&column);
        assert_eq!(writer.formats.len(), 3);

        let mut sorted = writer.formats.clone();
        sorted.sort_by_key(|f| f.to_string());
        sorted.dedup();
        assert_eq!(sorted.len(), writer.formats.len());
    }

    #[test]
    fn test_placement_is_repeatable() {
        let tree = Container::row([table(2, 2), table(3, 1)])
            .title(["Summary"])
            .margin(1)
            .build()
            .unwrap();
        let (first, placed_first) = render(&tree);
        let (second, placed_second) = render(&tree);
        assert_eq!(placed_first, placed_second);
        assert_eq!(first.ops, second.ops);
    }

    #[test]
    fn test_registration_order() {
        let (writer, _) = render(&table(1, 1));
        let order: Vec<FormatSpec> = writer
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Format(spec) => Some(spec.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(
            order,
            vec![
                crate::table::default_header_format(),
                crate::table::default_index_format(),
                FormatSpec::num_format("#,0.00"),
            ]
        );
    }

    #[test]
    fn test_col_nums() {
        let table = Table::builder(frame(2, 2)).col_nums(true).build().unwrap();
        assert_eq!(table.height(), 4);

        let (writer, _) = render(&table);
        assert_eq!(writer.cell(1, 0), Some(&CellValue::Number(-1.0)));
        assert_eq!(writer.cell(1, 1), Some(&CellValue::Number(-2.0)));
        assert_eq!(writer.cell(1, 2), Some(&CellValue::Number(-3.0)));
        assert_eq!(writer.cell(2, 0), Some(&CellValue::string("0")));
        assert_eq!(writer.cell(2, 1), Some(&CellValue::Number(0.0)));
        assert_eq!(
            writer.format_of(1, 1),
            Some(&crate::table::default_header_format())
        );
    }

    #[test]
    fn test_no_header_no_index() {
        let table = Table::builder(frame(2, 2))
            .header(false)
            .index(false)
            .build()
            .unwrap();
        let (writer, placed) = render(&table);
        assert_eq!(placed, vec![block(BlockKind::Table, 0, 0, 2, 2)]);
        assert_eq!(writer.cell(0, 0), Some(&CellValue::Number(0.0)));
        assert_eq!(writer.cell(1, 1), Some(&CellValue::Number(11.0)));
        assert_eq!(writer.formats.len(), 1);
    }

    #[test]
    fn test_table_margins() {
        let table = Table::builder(frame(1, 1)).margin((1, 2)).build().unwrap();
        let (writer, placed) = render(&table);
        assert_eq!(placed, vec![block(BlockKind::Table, 0, 0, 2 + 2, 2 + 4)]);
        assert_eq!(writer.cell(1, 2), Some(&CellValue::string("")));
        assert_eq!(writer.cell(1, 3), Some(&CellValue::string("c0")));
        assert_eq!(writer.cell(2, 3), Some(&CellValue::Number(0.0)));
    }

    #[test]
    fn test_container_margin_and_title() {
        let column = Container::column([table(3, 2), table(3, 2)])
            .title(["Summary"])
            .margin(1)
            .build()
            .unwrap();
        let (writer, placed) = render(&column);
        assert_eq!(
            placed,
            vec![
                block(BlockKind::Title, 0, 0, 1, 3),
                block(BlockKind::Column, 1, 0, 10, 5),
                block(BlockKind::Table, 2, 1, 4, 3),
                block(BlockKind::Table, 6, 1, 4, 3),
            ]
        );
        // title sits inside the container's top and left margins
        assert_eq!(
            writer.merges(),
            vec![("B2:D2".to_string(), CellValue::string("Summary"))]
        );
    }

    #[test]
    fn test_narrow_title_is_a_single_cell() {
        let table = Table::builder(frame(2, 1))
            .index(false)
            .title(["Only"])
            .build()
            .unwrap();
        let (writer, _) = render(&table);
        assert!(writer.merges().is_empty());
        assert_eq!(writer.cell(0, 0), Some(&CellValue::string("Only")));
        assert_eq!(writer.cell(1, 0), Some(&CellValue::string("c0")));
    }

    #[test]
    fn test_column_widths_clamped() {
        let table = Table::builder(frame(1, 2))
            .column_widths(vec![8.0, 45.0])
            .build()
            .unwrap();
        let (writer, _) = render(&table);
        assert_eq!(writer.widths(), vec![(1, 8.0), (2, 30.0)]);
        assert!(!writer
            .ops
            .iter()
            .any(|op| matches!(op, Op::Orientation(..))));
    }

    #[test]
    fn test_empty_table_sets_no_widths() {
        let (writer, placed) = render(&table(0, 2));
        assert_eq!(placed, vec![block(BlockKind::Table, 0, 0, 1, 3)]);
        assert!(writer.widths().is_empty());
    }

    #[test]
    fn test_wide_table_is_landscape() {
        let table = Table::builder(frame(1, 5))
            .column_widths(vec![30.0; 5])
            .build()
            .unwrap();
        let (writer, _) = render(&table);
        assert!(writer
            .ops
            .contains(&Op::Orientation(0, PageOrientation::Landscape)));

        let options = RenderOptions::new().with_max_column_width(20.0);
        let (writer, _) = render_with(&table, &options);
        assert!(!writer
            .ops
            .iter()
            .any(|op| matches!(op, Op::Orientation(..))));
    }

    #[test]
    fn test_tabs_reuse_sheets_and_footer_once() {
        let tabs = Tabs::new()
            .sheet("Paid", table(2, 2))
            .sheet("Incurred", table(2, 2))
            .sheet("Paid", table(1, 1));
        let (writer, placed) = render(&tabs);

        assert_eq!(writer.sheets, vec!["Paid", "Incurred"]);
        let footers: Vec<&Op> = writer
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Footer(..)))
            .collect();
        assert_eq!(
            footers,
            vec![
                &Op::Footer(0, DEFAULT_FOOTER.to_string()),
                &Op::Footer(1, DEFAULT_FOOTER.to_string()),
            ]
        );
        assert_eq!(placed.len(), 3);
        assert_eq!(placed[2].sheet, "Paid");
        assert_eq!((placed[2].start_row, placed[2].start_col), (0, 0));
    }

    #[test]
    fn test_options() {
        let options = RenderOptions::new()
            .with_footer(None::<String>)
            .with_default_sheet_name("Exhibit")
            .with_default_format(FormatSpec::new().with("font_name", "Arial"));
        let (writer, placed) = render_with(&table(1, 1), &options);

        assert_eq!(writer.sheets, vec!["Exhibit"]);
        assert_eq!(placed[0].sheet, "Exhibit");
        assert!(!writer.ops.iter().any(|op| matches!(op, Op::Footer(..))));
        assert!(writer
            .formats
            .iter()
            .all(|f| f.get("font_name") == Some(&"Arial".into())));
    }

    #[test]
    fn test_render_into_workbook() {
        let tree = Exhibit::from(
            Container::row([table(2, 1), table(2, 1)])
                .title(["Triangle"])
                .build()
                .unwrap(),
        );
        let mut workbook = Workbook::new();
        let placed = Renderer::new(&mut workbook, &RenderOptions::default())
            .render(&tree)
            .unwrap();
        assert_eq!(placed.len(), 4);

        let ws = workbook.worksheet_by_name(DEFAULT_SHEET_NAME).unwrap();
        assert_eq!(ws.get_value_at(0, 0), CellValue::string("Triangle"));
        assert_eq!(ws.merged_regions().len(), 1);
        assert_eq!(ws.get_value_at(1, 3), CellValue::string("c0"));
        assert_eq!(ws.get_value_at(3, 3), CellValue::Number(10.0));
        assert_eq!(ws.page_setup().footer.as_deref(), Some(DEFAULT_FOOTER));
    }
}
