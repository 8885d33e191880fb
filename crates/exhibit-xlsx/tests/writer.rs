//! Package-level tests for the XLSX writer: write a workbook, open the zip
//! and inspect the generated parts.

use std::io::{Cursor, Read};

use exhibit_core::{
    CellRange, CellValue, FormatSpec, PageOrientation, Style, Workbook,
};
use exhibit_xlsx::{XlsxError, XlsxWriter};

fn write_to_memory(workbook: &Workbook) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    XlsxWriter::write(workbook, &mut buf).unwrap();
    buf.into_inner()
}

fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    content
}

fn sample_workbook() -> Workbook {
    let mut wb = Workbook::new();
    let title = wb.add_style(
        Style::try_from(&FormatSpec::new().with("font_size", 20).with("align", "center")).unwrap(),
    );
    let sheet = wb.ensure_worksheet("Loss & LAE").unwrap();
    let ws = wb.worksheet_mut(sheet).unwrap();
    ws.set_cell_at(0, 0, "Summary <2024>", title).unwrap();
    ws.merge_cells(CellRange::from_indices(0, 0, 0, 2)).unwrap();
    ws.set_cell_at(1, 0, 1.5, 0).unwrap();
    ws.set_cell_at(1, 1, true, 0).unwrap();
    ws.set_cell_at(1, 2, CellValue::Empty, title).unwrap();
    ws.set_column_width(0, 13.2).unwrap();
    ws.page_setup_mut().orientation = PageOrientation::Landscape;
    ws.page_setup_mut().footer = Some("&CPage &P of &N\n&A".into());
    wb
}

#[test]
fn test_package_parts_present() {
    let bytes = write_to_memory(&sample_workbook());
    let archive = zip::ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
    let mut names: Vec<&str> = archive.file_names().collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "[Content_Types].xml",
            "_rels/.rels",
            "xl/_rels/workbook.xml.rels",
            "xl/styles.xml",
            "xl/workbook.xml",
            "xl/worksheets/sheet1.xml",
        ]
    );
}

#[test]
fn test_sheet_name_is_escaped() {
    let bytes = write_to_memory(&sample_workbook());
    let workbook_xml = read_part(&bytes, "xl/workbook.xml");
    assert!(workbook_xml.contains(r#"name="Loss &amp; LAE""#));
}

#[test]
fn test_sheet_content() {
    let bytes = write_to_memory(&sample_workbook());
    let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");

    assert!(sheet.contains(r#"<c r="A1" s="1" t="inlineStr"><is><t xml:space="preserve">Summary &lt;2024&gt;</t></is></c>"#));
    assert!(sheet.contains(r#"<c r="A2"><v>1.5</v></c>"#));
    assert!(sheet.contains(r#"<c r="B2" t="b"><v>1</v></c>"#));
    assert!(sheet.contains(r#"<c r="C2" s="1"/>"#));
    assert!(sheet.contains(r#"<mergeCell ref="A1:C1"/>"#));
    assert!(sheet.contains(r#"<col min="1" max="1" width="13.2" customWidth="1"/>"#));
    assert!(sheet.contains(r#"<pageSetup orientation="landscape"/>"#));
    assert!(sheet.contains("<oddFooter>&amp;CPage &amp;P of &amp;N\n&amp;A</oddFooter>"));
}

#[test]
fn test_portrait_sheet_has_no_page_setup() {
    let mut wb = Workbook::new();
    wb.ensure_worksheet("sheet1").unwrap();
    let bytes = write_to_memory(&wb);
    let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");
    assert!(!sheet.contains("pageSetup"));
    assert!(!sheet.contains("headerFooter"));
    assert!(sheet.contains("<sheetData>\n    </sheetData>"));
}

#[test]
fn test_empty_workbook_is_rejected() {
    let mut buf = Cursor::new(Vec::new());
    assert!(matches!(
        XlsxWriter::write(&Workbook::new(), &mut buf),
        Err(XlsxError::EmptyWorkbook)
    ));
}

#[test]
fn test_write_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.xlsx");
    XlsxWriter::write_file(&sample_workbook(), &path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    let styles = read_part(&bytes, "xl/styles.xml");
    assert!(styles.contains(r#"<sz val="20"/>"#));
}
