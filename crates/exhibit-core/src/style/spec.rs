//! Format specs: attribute maps describing how a cell should look
//!
//! A [`FormatSpec`] is what callers write (`{"num_format": "0.0%", "bold": true}`).
//! Two specs with the same entries are equal and hash the same regardless of
//! the order the entries were added in, so specs can key an interning table
//! directly. Converting a spec into a [`Style`] validates every attribute.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::{
    BorderEdge, BorderLineStyle, Color, HorizontalAlignment, NumberFormat, Style, Underline,
    VerticalAlignment,
};
use crate::error::{Error, Result};

/// A single attribute value in a [`FormatSpec`]
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum FormatValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl FormatValue {
    /// Interpret as a flag; `0` and `1` are accepted as well
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FormatValue::Bool(b) => Some(*b),
            FormatValue::Int(0) => Some(false),
            FormatValue::Int(1) => Some(true),
            _ => None,
        }
    }

    /// Interpret as an integer; floats with no fractional part are accepted
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FormatValue::Int(n) => Some(*n),
            FormatValue::Float(f) if f.fract() == 0.0 => Some(*f as i64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FormatValue::Int(n) => Some(*n as f64),
            FormatValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FormatValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl PartialEq for FormatValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FormatValue::Bool(a), FormatValue::Bool(b)) => a == b,
            (FormatValue::Int(a), FormatValue::Int(b)) => a == b,
            (FormatValue::Float(a), FormatValue::Float(b)) => a.to_bits() == b.to_bits(),
            (FormatValue::Text(a), FormatValue::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for FormatValue {}

impl Hash for FormatValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            FormatValue::Bool(b) => b.hash(state),
            FormatValue::Int(n) => n.hash(state),
            FormatValue::Float(f) => f.to_bits().hash(state),
            FormatValue::Text(s) => s.hash(state),
        }
    }
}

impl fmt::Display for FormatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatValue::Bool(b) => write!(f, "{}", b),
            FormatValue::Int(n) => write!(f, "{}", n),
            FormatValue::Float(x) => write!(f, "{}", x),
            FormatValue::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<bool> for FormatValue {
    fn from(b: bool) -> Self {
        FormatValue::Bool(b)
    }
}

impl From<i64> for FormatValue {
    fn from(n: i64) -> Self {
        FormatValue::Int(n)
    }
}

impl From<i32> for FormatValue {
    fn from(n: i32) -> Self {
        FormatValue::Int(n as i64)
    }
}

impl From<f64> for FormatValue {
    fn from(x: f64) -> Self {
        FormatValue::Float(x)
    }
}

impl From<&str> for FormatValue {
    fn from(s: &str) -> Self {
        FormatValue::Text(s.to_string())
    }
}

impl From<String> for FormatValue {
    fn from(s: String) -> Self {
        FormatValue::Text(s)
    }
}

/// An attribute map describing a cell format
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct FormatSpec(BTreeMap<String, FormatValue>);

impl FormatSpec {
    /// Create an empty spec (the writer's default format)
    pub fn new() -> Self {
        Self::default()
    }

    /// Spec carrying only a number format code
    pub fn num_format<S: Into<String>>(code: S) -> Self {
        Self::new().with("num_format", code.into())
    }

    /// Builder-style insert
    pub fn with<K: Into<String>, V: Into<FormatValue>>(mut self, key: K, value: V) -> Self {
        self.set(key, value);
        self
    }

    /// Insert or replace an attribute
    pub fn set<K: Into<String>, V: Into<FormatValue>>(&mut self, key: K, value: V) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FormatValue> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<FormatValue> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate attributes in key order
    pub fn iter(&self) -> btree_map::Iter<'_, String, FormatValue> {
        self.0.iter()
    }

    /// `base` with every attribute of `self` laid over it
    pub fn merged_onto(&self, base: &FormatSpec) -> FormatSpec {
        let mut merged = base.clone();
        merged.overlay(self);
        merged
    }

    /// Lay the attributes of `other` over this spec
    pub fn overlay(&mut self, other: &FormatSpec) {
        for (k, v) in other.iter() {
            self.0.insert(k.clone(), v.clone());
        }
    }
}

impl<K: Into<String>, V: Into<FormatValue>> FromIterator<(K, V)> for FormatSpec {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FormatSpec(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a FormatSpec {
    type Item = (&'a String, &'a FormatValue);
    type IntoIter = btree_map::Iter<'a, String, FormatValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", k, v)?;
        }
        f.write_str("}")
    }
}

fn expect_bool(key: &str, value: &FormatValue) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| Error::invalid_format(key, format!("expected a boolean, got {}", value)))
}

fn expect_int(key: &str, value: &FormatValue) -> Result<i64> {
    value
        .as_i64()
        .ok_or_else(|| Error::invalid_format(key, format!("expected an integer, got {}", value)))
}

fn expect_color(key: &str, value: &FormatValue) -> Result<Color> {
    value
        .as_str()
        .and_then(Color::parse)
        .ok_or_else(|| Error::invalid_format(key, format!("expected a color, got {}", value)))
}

fn expect_border(key: &str, value: &FormatValue) -> Result<Option<BorderEdge>> {
    let index = expect_int(key, value)?;
    let style = BorderLineStyle::from_index(index)
        .ok_or_else(|| Error::invalid_format(key, format!("unknown border style {}", index)))?;
    Ok((style != BorderLineStyle::None).then(|| BorderEdge::new(style)))
}

impl TryFrom<&FormatSpec> for Style {
    type Error = Error;

    fn try_from(spec: &FormatSpec) -> Result<Style> {
        let mut style = Style::default();
        let mut border_color = None;
        let mut side_colors: [Option<Color>; 4] = [None; 4];

        // `border` applies to all sides; explicit sides win whatever the key order
        if let Some(value) = spec.get("border") {
            let edge = expect_border("border", value)?;
            style.border.left = edge;
            style.border.right = edge;
            style.border.top = edge;
            style.border.bottom = edge;
        }

        for (key, value) in spec.iter() {
            let key = key.as_str();
            match key {
                "num_format" => {
                    style.number_format = match value {
                        FormatValue::Text(code) => NumberFormat::from_code(code),
                        FormatValue::Int(0) => NumberFormat::General,
                        FormatValue::Int(id) if *id > 0 => NumberFormat::BuiltIn(*id as u32),
                        _ => {
                            return Err(Error::invalid_format(
                                key,
                                format!("expected a format code, got {}", value),
                            ))
                        }
                    }
                }
                "bold" => style.font.bold = expect_bool(key, value)?,
                "italic" => style.font.italic = expect_bool(key, value)?,
                "font_strikeout" => style.font.strikethrough = expect_bool(key, value)?,
                "underline" => {
                    let index = expect_int(key, value)?;
                    style.font.underline = Underline::from_index(index).ok_or_else(|| {
                        Error::invalid_format(key, format!("unknown underline {}", index))
                    })?;
                }
                "font_size" | "size" => {
                    style.font.size = value
                        .as_f64()
                        .filter(|s| *s > 0.0)
                        .ok_or_else(|| Error::invalid_format(key, "expected a positive size"))?;
                }
                "font_name" | "font" => {
                    style.font.name = value
                        .as_str()
                        .ok_or_else(|| Error::invalid_format(key, "expected a font name"))?
                        .to_string();
                }
                "font_color" | "color" => style.font.color = Some(expect_color(key, value)?),
                "align" => {
                    let s = value.as_str().unwrap_or_default();
                    style.alignment.horizontal = HorizontalAlignment::parse(s).ok_or_else(|| {
                        Error::invalid_format(key, format!("unknown alignment {}", value))
                    })?;
                }
                "valign" => {
                    let s = value.as_str().unwrap_or_default();
                    style.alignment.vertical = VerticalAlignment::parse(s).ok_or_else(|| {
                        Error::invalid_format(key, format!("unknown alignment {}", value))
                    })?;
                }
                "text_wrap" => style.alignment.wrap_text = expect_bool(key, value)?,
                "shrink" => style.alignment.shrink_to_fit = expect_bool(key, value)?,
                "indent" => {
                    let indent = expect_int(key, value)?;
                    style.alignment.indent = u8::try_from(indent)
                        .map_err(|_| Error::invalid_format(key, "indent out of range"))?;
                }
                "rotation" => {
                    let rotation = expect_int(key, value)?;
                    if !(-90..=90).contains(&rotation) && rotation != 270 {
                        return Err(Error::invalid_format(key, "rotation out of range"));
                    }
                    style.alignment.rotation = rotation as i16;
                }
                "bg_color" | "fg_color" => style.fill = Some(expect_color(key, value)?),
                "pattern" => {
                    // only solid fills are supported
                    if expect_int(key, value)? > 1 {
                        return Err(Error::invalid_format(key, "only solid fills are supported"));
                    }
                }
                "border" => {}
                "top" => style.border.top = expect_border(key, value)?,
                "bottom" => style.border.bottom = expect_border(key, value)?,
                "left" => style.border.left = expect_border(key, value)?,
                "right" => style.border.right = expect_border(key, value)?,
                "border_color" => border_color = Some(expect_color(key, value)?),
                "left_color" => side_colors[0] = Some(expect_color(key, value)?),
                "right_color" => side_colors[1] = Some(expect_color(key, value)?),
                "top_color" => side_colors[2] = Some(expect_color(key, value)?),
                "bottom_color" => side_colors[3] = Some(expect_color(key, value)?),
                _ => return Err(Error::invalid_format(key, "unrecognized attribute")),
            }
        }

        if let Some(color) = border_color {
            style.border.set_color(color);
        }
        let border = &mut style.border;
        for (edge, color) in [
            &mut border.left,
            &mut border.right,
            &mut border.top,
            &mut border.bottom,
        ]
        .into_iter()
        .zip(side_colors)
        {
            if let (Some(edge), Some(color)) = (edge.as_mut(), color) {
                edge.color = Some(color);
            }
        }

        Ok(style)
    }
}
