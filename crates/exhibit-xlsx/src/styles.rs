//! styles.xml generation
//!
//! The workbook's style pool is already deduplicated, so pool index `i` is
//! written as cellXfs entry `i`. Fonts, fills, borders and custom number
//! formats are shared between xfs.

use std::collections::HashMap;

use quick_xml::escape::escape;

use exhibit_core::style::{
    Alignment, BorderEdge, BorderStyle, Color, FontStyle, NumberFormat, Style,
};
use exhibit_core::Workbook;

/// First id available for custom number formats
const FIRST_CUSTOM_NUMFMT_ID: u32 = 164;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct XfIds {
    font_id: u32,
    fill_id: u32,
    border_id: u32,
    num_fmt_id: u32,
}

#[derive(Debug)]
pub(crate) struct XlsxStyleTable {
    xfs: Vec<(Style, XfIds)>,
    fonts: Vec<FontStyle>,
    fills: Vec<Color>,
    borders: Vec<BorderStyle>,
    numfmts: Vec<(u32, String)>,
}

impl XlsxStyleTable {
    pub(crate) fn build(workbook: &Workbook) -> Self {
        let mut fonts = vec![FontStyle::default()];
        let mut font_ids: HashMap<FontStyle, u32> = HashMap::from([(FontStyle::default(), 0)]);
        // fill ids 0 and 1 are reserved for "none" and "gray125"
        let mut fills: Vec<Color> = Vec::new();
        let mut fill_ids: HashMap<Color, u32> = HashMap::new();
        let mut borders = vec![BorderStyle::default()];
        let mut border_ids: HashMap<BorderStyle, u32> =
            HashMap::from([(BorderStyle::default(), 0)]);
        let mut numfmts: Vec<(u32, String)> = Vec::new();
        let mut numfmt_ids: HashMap<String, u32> = HashMap::new();

        let mut xfs = Vec::with_capacity(workbook.styles().len());
        for (_, style) in workbook.styles().iter() {
            let font_id = *font_ids.entry(style.font.clone()).or_insert_with(|| {
                fonts.push(style.font.clone());
                fonts.len() as u32 - 1
            });

            let fill_id = match style.fill {
                None => 0,
                Some(color) => *fill_ids.entry(color).or_insert_with(|| {
                    fills.push(color);
                    fills.len() as u32 + 1
                }),
            };

            let border_id = *border_ids.entry(style.border.clone()).or_insert_with(|| {
                borders.push(style.border.clone());
                borders.len() as u32 - 1
            });

            let num_fmt_id = match &style.number_format {
                NumberFormat::Custom(code) => {
                    *numfmt_ids.entry(code.clone()).or_insert_with(|| {
                        let id = FIRST_CUSTOM_NUMFMT_ID + numfmts.len() as u32;
                        numfmts.push((id, code.clone()));
                        id
                    })
                }
                other => other.builtin_id().unwrap_or(0),
            };

            xfs.push((
                style.clone(),
                XfIds {
                    font_id,
                    fill_id,
                    border_id,
                    num_fmt_id,
                },
            ));
        }

        Self {
            xfs,
            fonts,
            fills,
            borders,
            numfmts,
        }
    }

    /// cellXfs index for a style pool index
    pub(crate) fn xf_id_for(&self, style_index: u32) -> u32 {
        if (style_index as usize) < self.xfs.len() {
            style_index
        } else {
            0
        }
    }

    pub(crate) fn to_styles_xml(&self) -> String {
        let mut xml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
        );

        if !self.numfmts.is_empty() {
            xml.push_str(&format!("\n  <numFmts count=\"{}\">", self.numfmts.len()));
            for (id, code) in &self.numfmts {
                xml.push_str(&format!(
                    "\n    <numFmt numFmtId=\"{}\" formatCode=\"{}\"/>",
                    id,
                    escape(code.as_str())
                ));
            }
            xml.push_str("\n  </numFmts>");
        }

        xml.push_str(&format!("\n  <fonts count=\"{}\">", self.fonts.len()));
        for font in &self.fonts {
            xml.push_str("\n    ");
            xml.push_str(&write_font(font));
        }
        xml.push_str("\n  </fonts>");

        xml.push_str(&format!("\n  <fills count=\"{}\">", self.fills.len() + 2));
        xml.push_str("\n    <fill><patternFill patternType=\"none\"/></fill>");
        xml.push_str("\n    <fill><patternFill patternType=\"gray125\"/></fill>");
        for color in &self.fills {
            xml.push_str(&format!(
                "\n    <fill><patternFill patternType=\"solid\"><fgColor rgb=\"{}\"/><bgColor indexed=\"64\"/></patternFill></fill>",
                color.to_argb_hex()
            ));
        }
        xml.push_str("\n  </fills>");

        xml.push_str(&format!("\n  <borders count=\"{}\">", self.borders.len()));
        for border in &self.borders {
            xml.push_str("\n    ");
            xml.push_str(&write_border(border));
        }
        xml.push_str("\n  </borders>");

        xml.push_str(
            r#"
  <cellStyleXfs count="1">
    <xf numFmtId="0" fontId="0" fillId="0" borderId="0"/>
  </cellStyleXfs>"#,
        );

        xml.push_str(&format!("\n  <cellXfs count=\"{}\">", self.xfs.len()));
        for (style, ids) in &self.xfs {
            xml.push_str("\n    ");
            xml.push_str(&write_xf(style, *ids));
        }
        xml.push_str("\n  </cellXfs>");

        xml.push_str(
            r#"
  <cellStyles count="1">
    <cellStyle name="Normal" xfId="0" builtinId="0"/>
  </cellStyles>
  <dxfs count="0"/>
  <tableStyles count="0" defaultTableStyle="TableStyleMedium9" defaultPivotStyle="PivotStyleLight16"/>
</styleSheet>"#,
        );
        xml
    }
}

fn write_font(font: &FontStyle) -> String {
    let mut s = String::from("<font>");
    if font.bold {
        s.push_str("<b/>");
    }
    if font.italic {
        s.push_str("<i/>");
    }
    if font.strikethrough {
        s.push_str("<strike/>");
    }
    match font.underline.xlsx_name() {
        None => {}
        Some("single") => s.push_str("<u/>"),
        Some(val) => s.push_str(&format!("<u val=\"{}\"/>", val)),
    }
    s.push_str(&format!("<sz val=\"{}\"/>", font.size));
    if let Some(color) = font.color {
        s.push_str(&format!("<color rgb=\"{}\"/>", color.to_argb_hex()));
    }
    s.push_str(&format!("<name val=\"{}\"/>", escape(font.name.as_str())));
    s.push_str("</font>");
    s
}

fn write_border_edge(tag: &str, edge: &Option<BorderEdge>) -> String {
    let Some((name, color)) = edge.and_then(|e| e.style.xlsx_name().map(|n| (n, e.color))) else {
        return format!("<{}/>", tag);
    };
    match color {
        Some(color) => format!(
            "<{tag} style=\"{name}\"><color rgb=\"{}\"/></{tag}>",
            color.to_argb_hex()
        ),
        None => format!("<{tag} style=\"{name}\"><color auto=\"1\"/></{tag}>"),
    }
}

fn write_border(border: &BorderStyle) -> String {
    let mut s = String::from("<border>");
    s.push_str(&write_border_edge("left", &border.left));
    s.push_str(&write_border_edge("right", &border.right));
    s.push_str(&write_border_edge("top", &border.top));
    s.push_str(&write_border_edge("bottom", &border.bottom));
    s.push_str("<diagonal/></border>");
    s
}

fn write_alignment(al: &Alignment) -> String {
    if al.is_default() {
        return String::new();
    }
    let default = Alignment::default();

    let mut s = String::from("<alignment");
    if al.horizontal != default.horizontal {
        s.push_str(&format!(" horizontal=\"{}\"", al.horizontal.xlsx_name()));
    }
    if al.vertical != default.vertical {
        s.push_str(&format!(" vertical=\"{}\"", al.vertical.xlsx_name()));
    }
    if al.wrap_text {
        s.push_str(" wrapText=\"1\"");
    }
    if al.shrink_to_fit {
        s.push_str(" shrinkToFit=\"1\"");
    }
    if al.indent != 0 {
        s.push_str(&format!(" indent=\"{}\"", al.indent));
    }
    if al.rotation != 0 {
        // negative angles are stored as 90 + |angle|
        let rotation = if al.rotation < 0 {
            90 - al.rotation
        } else if al.rotation == 270 {
            255
        } else {
            al.rotation
        };
        s.push_str(&format!(" textRotation=\"{}\"", rotation));
    }
    s.push_str("/>");
    s
}

fn write_xf(style: &Style, ids: XfIds) -> String {
    let mut attrs = String::new();
    if ids.num_fmt_id != 0 {
        attrs.push_str(" applyNumberFormat=\"1\"");
    }
    if ids.font_id != 0 {
        attrs.push_str(" applyFont=\"1\"");
    }
    if ids.fill_id != 0 {
        attrs.push_str(" applyFill=\"1\"");
    }
    if ids.border_id != 0 {
        attrs.push_str(" applyBorder=\"1\"");
    }
    if !style.alignment.is_default() {
        attrs.push_str(" applyAlignment=\"1\"");
    }

    let mut s = format!(
        "<xf numFmtId=\"{}\" fontId=\"{}\" fillId=\"{}\" borderId=\"{}\" xfId=\"0\"{}",
        ids.num_fmt_id, ids.font_id, ids.fill_id, ids.border_id, attrs
    );
    let alignment = write_alignment(&style.alignment);
    if alignment.is_empty() {
        s.push_str("/>");
    } else {
        s.push('>');
        s.push_str(&alignment);
        s.push_str("</xf>");
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use exhibit_core::{FormatSpec, HorizontalAlignment};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_components_are_shared() {
        let mut wb = Workbook::new();
        let header = Style::try_from(
            &FormatSpec::num_format("0;(0)")
                .with("bold", true)
                .with("bottom", 1),
        )
        .unwrap();
        let index = Style::try_from(&FormatSpec::num_format("0;(0)").with("bold", true)).unwrap();
        wb.add_style(header);
        wb.add_style(index);
        wb.add_style(Style::new().number_format("#,##0"));

        let table = XlsxStyleTable::build(&wb);
        assert_eq!(table.xfs.len(), 4);
        // default + bold
        assert_eq!(table.fonts.len(), 2);
        // default + bottom rule
        assert_eq!(table.borders.len(), 2);
        assert_eq!(table.numfmts, vec![(164, "0;(0)".to_string())]);
        assert_eq!(table.xfs[3].1.num_fmt_id, 3);
        assert_eq!(table.xf_id_for(2), 2);
        assert_eq!(table.xf_id_for(99), 0);
    }

    #[test]
    fn test_styles_xml_content() {
        let mut wb = Workbook::new();
        wb.add_style(
            Style::new()
                .fill_color(Color::YELLOW)
                .horizontal_alignment(HorizontalAlignment::Center)
                .number_format("\"$\"#,0"),
        );
        let xml = XlsxStyleTable::build(&wb).to_styles_xml();
        assert!(xml.contains(r#"<fills count="3">"#));
        assert!(xml.contains(r#"<fgColor rgb="FFFFFF00"/>"#));
        assert!(xml.contains(r#"formatCode="&quot;$&quot;#,0""#));
        assert!(xml.contains(r#"<alignment horizontal="center"/>"#));
        assert!(xml.contains(r#"<cellXfs count="2">"#));
    }
}
