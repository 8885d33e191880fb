//! Border style types

use super::Color;

/// Border style for a cell
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BorderStyle {
    /// Left border
    pub left: Option<BorderEdge>,
    /// Right border
    pub right: Option<BorderEdge>,
    /// Top border
    pub top: Option<BorderEdge>,
    /// Bottom border
    pub bottom: Option<BorderEdge>,
}

impl BorderStyle {
    /// Create a new border style with no borders
    pub fn new() -> Self {
        Self::default()
    }

    /// Set all four borders to the same edge
    pub fn all(edge: BorderEdge) -> Self {
        Self {
            left: Some(edge),
            right: Some(edge),
            top: Some(edge),
            bottom: Some(edge),
        }
    }

    /// Check if all borders are empty
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none() && self.top.is_none() && self.bottom.is_none()
    }

    /// Recolor every edge that is present
    pub fn set_color(&mut self, color: Color) {
        for edge in [
            &mut self.left,
            &mut self.right,
            &mut self.top,
            &mut self.bottom,
        ]
        .into_iter()
        .flatten()
        {
            edge.color = Some(color);
        }
    }
}

/// A single border edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderEdge {
    /// Line style
    pub style: BorderLineStyle,
    /// Line color (automatic when unset)
    pub color: Option<Color>,
}

impl BorderEdge {
    /// Create a new border edge with automatic color
    pub fn new(style: BorderLineStyle) -> Self {
        Self { style, color: None }
    }

    /// Create a thin border
    pub fn thin() -> Self {
        Self::new(BorderLineStyle::Thin)
    }
}

/// Border line styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderLineStyle {
    /// No border
    #[default]
    None,
    Thin,
    Medium,
    Dashed,
    Dotted,
    Thick,
    Double,
    Hair,
    MediumDashed,
    DashDot,
    MediumDashDot,
    DashDotDot,
    MediumDashDotDot,
    SlantDashDot,
}

impl BorderLineStyle {
    /// Map a numeric border index (as used by `border`, `top`, `bottom`,
    /// `left` and `right` format attributes) to a line style
    pub fn from_index(index: i64) -> Option<Self> {
        let style = match index {
            0 => BorderLineStyle::None,
            1 => BorderLineStyle::Thin,
            2 => BorderLineStyle::Medium,
            3 => BorderLineStyle::Dashed,
            4 => BorderLineStyle::Dotted,
            5 => BorderLineStyle::Thick,
            6 => BorderLineStyle::Double,
            7 => BorderLineStyle::Hair,
            8 => BorderLineStyle::MediumDashed,
            9 => BorderLineStyle::DashDot,
            10 => BorderLineStyle::MediumDashDot,
            11 => BorderLineStyle::DashDotDot,
            12 => BorderLineStyle::MediumDashDotDot,
            13 => BorderLineStyle::SlantDashDot,
            _ => return None,
        };
        Some(style)
    }

    /// The OOXML `style` attribute value, `None` for no border
    pub fn xlsx_name(&self) -> Option<&'static str> {
        match self {
            BorderLineStyle::None => None,
            BorderLineStyle::Thin => Some("thin"),
            BorderLineStyle::Medium => Some("medium"),
            BorderLineStyle::Dashed => Some("dashed"),
            BorderLineStyle::Dotted => Some("dotted"),
            BorderLineStyle::Thick => Some("thick"),
            BorderLineStyle::Double => Some("double"),
            BorderLineStyle::Hair => Some("hair"),
            BorderLineStyle::MediumDashed => Some("mediumDashed"),
            BorderLineStyle::DashDot => Some("dashDot"),
            BorderLineStyle::MediumDashDot => Some("mediumDashDot"),
            BorderLineStyle::DashDotDot => Some("dashDotDot"),
            BorderLineStyle::MediumDashDotDot => Some("mediumDashDotDot"),
            BorderLineStyle::SlantDashDot => Some("slantDashDot"),
        }
    }
}
