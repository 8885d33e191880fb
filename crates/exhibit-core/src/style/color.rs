//! Color representation

use std::fmt;

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Create from a hex string (e.g., "#FF0000" or "FF0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Color::rgb(r, g, b))
    }

    /// Look up one of the named colors accepted in format specs
    pub fn from_name(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "black" => Self::BLACK,
            "blue" => Self::BLUE,
            "brown" => Color::rgb(0x80, 0x00, 0x00),
            "cyan" => Self::CYAN,
            "gray" | "grey" => Self::GRAY,
            "green" => Color::rgb(0x00, 0x80, 0x00),
            "lime" => Color::rgb(0x00, 0xFF, 0x00),
            "magenta" => Self::MAGENTA,
            "navy" => Color::rgb(0x00, 0x00, 0x80),
            "orange" => Color::rgb(0xFF, 0x66, 0x00),
            "pink" => Color::rgb(0xFF, 0x00, 0xFF),
            "purple" => Color::rgb(0x80, 0x00, 0x80),
            "red" => Self::RED,
            "silver" => Self::LIGHT_GRAY,
            "white" => Self::WHITE,
            "yellow" => Self::YELLOW,
            _ => return None,
        };
        Some(color)
    }

    /// Parse a color given either by name or as a hex string
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.starts_with('#') {
            Self::from_hex(s)
        } else {
            Self::from_name(s).or_else(|| Self::from_hex(s))
        }
    }

    /// Convert to ARGB hex string (8 characters, used by XLSX)
    pub fn to_argb_hex(&self) -> String {
        format!("FF{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    // Common colors
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const LIGHT_GRAY: Color = Color::rgb(192, 192, 192);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#FF0000"), Some(Color::RED));
        assert_eq!(Color::from_hex("00FF00"), Some(Color::rgb(0, 255, 0)));
        assert_eq!(Color::from_hex("#80FFFFFF"), None);
        assert_eq!(Color::from_hex("zzzzzz"), None);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(Color::parse("Navy"), Some(Color::rgb(0, 0, 0x80)));
        assert_eq!(Color::parse("#C0C0C0"), Some(Color::LIGHT_GRAY));
        assert_eq!(Color::parse("mauve"), None);
        assert_eq!(Color::RED.to_argb_hex(), "FFFF0000");
        assert_eq!(Color::RED.to_string(), "#FF0000");
    }
}
