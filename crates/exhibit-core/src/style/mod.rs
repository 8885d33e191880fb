//! Cell styling types
//!
//! This module contains types for cell formatting:
//! - [`FormatSpec`] - Attribute map as written by callers (`bold`, `num_format`, ...)
//! - [`Style`] - Complete resolved cell style
//! - [`FontStyle`] - Font settings
//! - [`BorderStyle`] - Cell borders
//! - [`Alignment`] - Text alignment
//! - [`Color`] - Color representation

mod border;
mod color;
mod pool;
mod spec;

pub use border::{BorderEdge, BorderLineStyle, BorderStyle};
pub use color::Color;
pub use pool::StylePool;
pub use spec::{FormatSpec, FormatValue};

use std::hash::{Hash, Hasher};

/// Complete cell style
///
/// Styles are deduplicated via [`StylePool`]; cells refer to them by index.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    /// Font settings
    pub font: FontStyle,
    /// Solid background fill
    pub fill: Option<Color>,
    /// Border settings
    pub border: BorderStyle,
    /// Text alignment
    pub alignment: Alignment,
    /// Number format
    pub number_format: NumberFormat,
}

impl Style {
    /// Create a new default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set font to bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.font.bold = bold;
        self
    }

    /// Set font to italic
    pub fn italic(mut self, italic: bool) -> Self {
        self.font.italic = italic;
        self
    }

    /// Set font size in points
    pub fn font_size(mut self, size: f64) -> Self {
        self.font.size = size;
        self
    }

    /// Set fill color (solid fill)
    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    /// Set number format string
    pub fn number_format<S: AsRef<str>>(mut self, format: S) -> Self {
        self.number_format = NumberFormat::from_code(format.as_ref());
        self
    }

    /// Set horizontal alignment
    pub fn horizontal_alignment(mut self, align: HorizontalAlignment) -> Self {
        self.alignment.horizontal = align;
        self
    }

    /// Set vertical alignment
    pub fn vertical_alignment(mut self, align: VerticalAlignment) -> Self {
        self.alignment.vertical = align;
        self
    }

    /// Enable text wrapping
    pub fn wrap_text(mut self, wrap: bool) -> Self {
        self.alignment.wrap_text = wrap;
        self
    }

    /// Whether this is the workbook default
    pub fn is_default(&self) -> bool {
        *self == Style::default()
    }
}

impl Hash for Style {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.font.hash(state);
        self.fill.hash(state);
        self.border.hash(state);
        self.alignment.hash(state);
        self.number_format.hash(state);
    }
}

impl Eq for Style {}

/// Font settings
#[derive(Debug, Clone, PartialEq)]
pub struct FontStyle {
    /// Font family name
    pub name: String,
    /// Size in points
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
    pub underline: Underline,
    pub strikethrough: bool,
    /// Font color (automatic when unset)
    pub color: Option<Color>,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            name: "Calibri".to_string(),
            size: 11.0,
            bold: false,
            italic: false,
            underline: Underline::None,
            strikethrough: false,
            color: None,
        }
    }
}

impl Hash for FontStyle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.size.to_bits().hash(state);
        self.bold.hash(state);
        self.italic.hash(state);
        self.underline.hash(state);
        self.strikethrough.hash(state);
        self.color.hash(state);
    }
}

impl Eq for FontStyle {}

/// Underline style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Underline {
    #[default]
    None,
    Single,
    Double,
    SingleAccounting,
    DoubleAccounting,
}

impl Underline {
    /// Map the numeric `underline` attribute (1, 2, 33, 34) to a style
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Underline::None),
            1 => Some(Underline::Single),
            2 => Some(Underline::Double),
            33 => Some(Underline::SingleAccounting),
            34 => Some(Underline::DoubleAccounting),
            _ => None,
        }
    }

    /// The OOXML `val` attribute value
    pub fn xlsx_name(&self) -> Option<&'static str> {
        match self {
            Underline::None => None,
            Underline::Single => Some("single"),
            Underline::Double => Some("double"),
            Underline::SingleAccounting => Some("singleAccounting"),
            Underline::DoubleAccounting => Some("doubleAccounting"),
        }
    }
}

/// Text alignment settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Alignment {
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
    pub wrap_text: bool,
    pub shrink_to_fit: bool,
    /// Indent level
    pub indent: u8,
    /// Text rotation in degrees (-90 to 90)
    pub rotation: i16,
}

impl Alignment {
    /// Whether any setting differs from the default
    pub fn is_default(&self) -> bool {
        *self == Alignment::default()
    }
}

/// Horizontal alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    #[default]
    General,
    Left,
    Center,
    Right,
    Fill,
    Justify,
    CenterAcrossSelection,
    Distributed,
}

impl HorizontalAlignment {
    /// Parse an `align` attribute value
    pub fn parse(s: &str) -> Option<Self> {
        let align = match s {
            "left" => HorizontalAlignment::Left,
            "center" | "centre" => HorizontalAlignment::Center,
            "right" => HorizontalAlignment::Right,
            "fill" => HorizontalAlignment::Fill,
            "justify" => HorizontalAlignment::Justify,
            "center_across" | "centre_across" => HorizontalAlignment::CenterAcrossSelection,
            "distributed" => HorizontalAlignment::Distributed,
            "general" => HorizontalAlignment::General,
            _ => return None,
        };
        Some(align)
    }

    /// The OOXML `horizontal` attribute value
    pub fn xlsx_name(&self) -> &'static str {
        match self {
            HorizontalAlignment::General => "general",
            HorizontalAlignment::Left => "left",
            HorizontalAlignment::Center => "center",
            HorizontalAlignment::Right => "right",
            HorizontalAlignment::Fill => "fill",
            HorizontalAlignment::Justify => "justify",
            HorizontalAlignment::CenterAcrossSelection => "centerContinuous",
            HorizontalAlignment::Distributed => "distributed",
        }
    }
}

/// Vertical alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlignment {
    Top,
    Center,
    #[default]
    Bottom,
    Justify,
    Distributed,
}

impl VerticalAlignment {
    /// Parse a `valign` attribute value
    pub fn parse(s: &str) -> Option<Self> {
        let align = match s {
            "top" => VerticalAlignment::Top,
            "vcenter" | "center" | "vcentre" => VerticalAlignment::Center,
            "bottom" => VerticalAlignment::Bottom,
            "vjustify" | "justify" => VerticalAlignment::Justify,
            "vdistributed" | "distributed" => VerticalAlignment::Distributed,
            _ => return None,
        };
        Some(align)
    }

    /// The OOXML `vertical` attribute value
    pub fn xlsx_name(&self) -> &'static str {
        match self {
            VerticalAlignment::Top => "top",
            VerticalAlignment::Center => "center",
            VerticalAlignment::Bottom => "bottom",
            VerticalAlignment::Justify => "justify",
            VerticalAlignment::Distributed => "distributed",
        }
    }
}

/// Number format of a cell
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NumberFormat {
    /// The `General` format
    #[default]
    General,
    /// One of the formats every spreadsheet application knows by id
    BuiltIn(u32),
    /// A format code that must be declared in the styles part
    Custom(String),
}

/// Built-in format codes and their ids
const BUILTIN_FORMATS: &[(u32, &str)] = &[
    (1, "0"),
    (2, "0.00"),
    (3, "#,##0"),
    (4, "#,##0.00"),
    (9, "0%"),
    (10, "0.00%"),
    (11, "0.00E+00"),
    (12, "# ?/?"),
    (13, "# ??/??"),
    (14, "mm-dd-yy"),
    (15, "d-mmm-yy"),
    (16, "d-mmm"),
    (17, "mmm-yy"),
    (18, "h:mm AM/PM"),
    (19, "h:mm:ss AM/PM"),
    (20, "h:mm"),
    (21, "h:mm:ss"),
    (22, "m/d/yy h:mm"),
    (37, "#,##0 ;(#,##0)"),
    (38, "#,##0 ;[Red](#,##0)"),
    (39, "#,##0.00;(#,##0.00)"),
    (40, "#,##0.00;[Red](#,##0.00)"),
    (45, "mm:ss"),
    (46, "[h]:mm:ss"),
    (47, "mmss.0"),
    (48, "##0.0E+0"),
    (49, "@"),
];

impl NumberFormat {
    /// Classify a format code, mapping known codes to their built-in id
    pub fn from_code(code: &str) -> Self {
        if code.is_empty() || code.eq_ignore_ascii_case("general") {
            return NumberFormat::General;
        }
        BUILTIN_FORMATS
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(id, _)| NumberFormat::BuiltIn(*id))
            .unwrap_or_else(|| NumberFormat::Custom(code.to_string()))
    }

    /// Built-in id, if this format does not need declaring
    pub fn builtin_id(&self) -> Option<u32> {
        match self {
            NumberFormat::General => Some(0),
            NumberFormat::BuiltIn(id) => Some(*id),
            NumberFormat::Custom(_) => None,
        }
    }

    /// The format code as written in a spreadsheet
    pub fn code(&self) -> &str {
        match self {
            NumberFormat::General => "General",
            NumberFormat::BuiltIn(id) => BUILTIN_FORMATS
                .iter()
                .find(|(i, _)| i == id)
                .map(|(_, c)| *c)
                .unwrap_or("General"),
            NumberFormat::Custom(code) => code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_format_classification() {
        assert_eq!(NumberFormat::from_code("General"), NumberFormat::General);
        assert_eq!(NumberFormat::from_code("0.00%"), NumberFormat::BuiltIn(10));
        assert_eq!(
            NumberFormat::from_code("#,0.00"),
            NumberFormat::Custom("#,0.00".into())
        );
        assert_eq!(NumberFormat::BuiltIn(3).code(), "#,##0");
        assert_eq!(NumberFormat::Custom("0;(0)".into()).builtin_id(), None);
    }

    #[test]
    fn test_alignment_parse() {
        assert_eq!(
            HorizontalAlignment::parse("center"),
            Some(HorizontalAlignment::Center)
        );
        assert_eq!(VerticalAlignment::parse("vcenter"), Some(VerticalAlignment::Center));
        assert_eq!(VerticalAlignment::parse("middle"), None);
        assert_eq!(VerticalAlignment::default(), VerticalAlignment::Bottom);
    }

    #[test]
    fn test_style_builder() {
        let style = Style::new().bold(true).number_format("0.0%");
        assert!(style.font.bold);
        assert_eq!(style.number_format, NumberFormat::Custom("0.0%".into()));
        assert!(!style.is_default());
        assert!(Style::new().is_default());
    }
}
