//! End-to-end tests: build exhibits, save them and inspect the workbook

use std::fs::File;
use std::io::Read;
use std::path::Path;

use exhibit::prelude::*;
use exhibit::{BlockKind, CellValue, Error, PageOrientation};
use pretty_assertions::assert_eq;

fn triangle(rows: usize, cols: usize) -> Frame {
    let columns = (0..cols)
        .map(|c| {
            Series::new(
                format!("{} months", (c + 1) * 12),
                (0..rows).map(|r| 1000.0 * (r + 1) as f64 + c as f64),
            )
        })
        .collect();
    Frame::new(columns)
        .unwrap()
        .with_index((0..rows).map(|r| (2020 + r).to_string()))
        .unwrap()
        .with_index_name("Origin")
}

fn read_part(path: &Path, name: &str) -> String {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    content
}

fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_table_to_workbook() {
    let table = Table::new(triangle(3, 2)).unwrap();
    let workbook = table.to_workbook().unwrap();
    let ws = workbook.worksheet_by_name("sheet1").unwrap();

    assert_eq!(ws.get_value_at(0, 0), CellValue::string("Origin"));
    assert_eq!(ws.get_value_at(0, 1), CellValue::string("12 months"));
    assert_eq!(ws.get_value_at(1, 0), CellValue::string("2020"));
    assert_eq!(ws.get_value_at(3, 2), CellValue::Number(3001.0));
    assert_eq!(ws.used_range().unwrap().to_string(), "A1:C4");
}

#[test]
fn test_row_render_placements() {
    let row = Container::row([
        Table::new(triangle(3, 2)).unwrap(),
        Table::new(triangle(3, 2)).unwrap(),
    ])
    .build()
    .unwrap();
    let rendered = row.render_workbook(&RenderOptions::default()).unwrap();

    let tables: Vec<(u32, u32)> = rendered
        .placements
        .iter()
        .filter(|b| b.kind == BlockKind::Table)
        .map(|b| (b.start_row, b.start_col))
        .collect();
    assert_eq!(tables, vec![(0, 0), (0, 3)]);
    assert_eq!((row.height(), row.width()), (4, 6));
}

#[test]
fn test_titled_table_saved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.xlsx");

    let table = Table::builder(triangle(3, 2))
        .title(["Report", "Q1"])
        .build()
        .unwrap();
    table.to_excel(&path).unwrap();

    let sheet = read_part(&path, "xl/worksheets/sheet1.xml");
    assert!(sheet.contains(r#"<mergeCell ref="A1:C1"/>"#));
    assert!(sheet.contains(r#"<mergeCell ref="A2:C2"/>"#));
    assert!(sheet.contains(r#"<t xml:space="preserve">Report</t>"#));
    // header sits below the two title lines
    assert!(sheet.contains(r#"<c r="B3""#));
    assert!(sheet.contains("<oddFooter>&amp;CPage &amp;P of &amp;N"));

    let workbook = read_part(&path, "xl/workbook.xml");
    assert!(workbook.contains(r#"name="sheet1""#));
}

#[test]
fn test_bare_spec_formats_every_column() {
    let frame = triangle(2, 5);
    let formats = Formats::from_json(&serde_json::json!({"num_format": "0%"}), &frame).unwrap();
    let table = Table::builder(frame).formats(formats).build().unwrap();
    let workbook = table.to_workbook().unwrap();

    let ws = workbook.worksheet(0).unwrap();
    let styles: Vec<u32> = (1..=5)
        .map(|c| ws.cell_at(1, c).unwrap().style_index)
        .collect();
    assert!(styles.iter().all(|s| *s == styles[0]));
    let style = workbook.style(styles[0]).unwrap();
    assert_eq!(style.number_format.code(), "0%");
}

#[test]
fn test_tabs_saved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tabs.xlsx");

    let wide = Table::builder(triangle(2, 6))
        .column_widths(vec![25.0; 6])
        .build()
        .unwrap();
    let tabs = Tabs::new()
        .sheet("Paid", Table::new(triangle(2, 2)).unwrap())
        .sheet("Incurred", wide);
    tabs.to_excel(&path).unwrap();

    let workbook = read_part(&path, "xl/workbook.xml");
    assert!(workbook.contains(r#"name="Paid""#));
    assert!(workbook.contains(r#"name="Incurred""#));

    let paid = read_part(&path, "xl/worksheets/sheet1.xml");
    assert!(!paid.contains("landscape"));
    let incurred = read_part(&path, "xl/worksheets/sheet2.xml");
    assert!(incurred.contains(r#"orientation="landscape""#));
    assert!(incurred.contains(r#"width="25" customWidth="1""#));
}

#[test]
fn test_landscape_in_memory() {
    let wide = Table::builder(triangle(1, 5))
        .column_widths(vec![30.0; 5])
        .build()
        .unwrap();
    let workbook = wide.to_workbook().unwrap();
    assert_eq!(
        workbook.worksheet(0).unwrap().page_setup().orientation,
        PageOrientation::Landscape
    );
}

#[test]
fn test_failed_save_leaves_nothing_behind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.xlsx");

    // no sheets: rendering succeeds, writing the package fails
    let err = Tabs::new().to_excel(&path).unwrap_err();
    assert!(matches!(err, Error::Xlsx(_)));
    assert!(dir_entries(dir.path()).is_empty());

    // invalid sheet name: rendering fails
    let bad = Tabs::new().sheet("a/b", Table::new(triangle(1, 1)).unwrap());
    assert!(matches!(bad.to_excel(&path), Err(Error::Layout(_))));
    assert!(dir_entries(dir.path()).is_empty());
}

#[test]
fn test_failed_save_keeps_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.xlsx");
    std::fs::write(&path, b"previous").unwrap();

    assert!(Tabs::new().to_excel(&path).is_err());
    assert_eq!(std::fs::read(&path).unwrap(), b"previous");
    assert_eq!(dir_entries(dir.path()), vec!["report.xlsx"]);
}

#[test]
fn test_csv_to_excel() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("losses.csv");
    std::fs::write(&csv_path, "Origin,Paid,Ratio\n2019,100,0.5\n2020,250,0.75\n").unwrap();

    let options = CsvReadOptions::default().with_index_col(Some(0));
    let frame = exhibit::read_csv(&csv_path, &options).unwrap();
    let table = Table::new(frame).unwrap();
    assert_eq!((table.height(), table.width()), (3, 3));

    let out = dir.path().join("losses.xlsx");
    table.to_excel(&out).unwrap();
    let sheet = read_part(&out, "xl/worksheets/sheet1.xml");
    assert!(sheet.contains(r#"<t xml:space="preserve">Origin</t>"#));
    assert!(sheet.contains("<v>250</v>"));
}
