use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Opaque-by-default RGBA color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Rgba {
    /// Fallback for unparseable hex strings (50% white)
    pub const GRAY: Rgba = Rgba::rgb(0x80, 0x80, 0x80);

    /// Creates a fully opaque color
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: u8::MAX,
        }
    }

    /// Formats the color as `#rrggbb`
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::GRAY
    }
}

impl From<String> for Rgba {
    fn from(value: String) -> Self {
        color_from_hex_string(&value)
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_hex()
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::Rgb(color.red, color.green, color.blue)
    }
}

/// Parses `#rrggbb` or `rrggbb` (surrounding whitespace and case ignored).
///
/// Anything that is not exactly six hex digits after stripping the leading `#`
/// resolves to [`Rgba::GRAY`] instead of failing.
#[must_use]
pub fn color_from_hex_string(hex: &str) -> Rgba {
    let trimmed = hex.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if digits.chars().count() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Rgba::GRAY;
    }

    let Ok(value) = u32::from_str_radix(digits, 16) else {
        return Rgba::GRAY;
    };

    Rgba::rgb(
        ((value & 0xFF_0000) >> 16) as u8,
        ((value & 0x00_FF00) >> 8) as u8,
        (value & 0x00_00FF) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_without_hash() {
        assert_eq!(color_from_hex_string("101012"), Rgba::rgb(0x10, 0x10, 0x12));
        assert_eq!(color_from_hex_string("101012").alpha, 255);
    }

    #[test]
    fn test_hex_with_hash_and_whitespace() {
        assert_eq!(
            color_from_hex_string("  #FF6663\n"),
            Rgba::rgb(0xff, 0x66, 0x63)
        );
        assert_eq!(color_from_hex_string("#723562"), Rgba::rgb(0x72, 0x35, 0x62));
    }

    #[test]
    fn test_invalid_hex_falls_back_to_gray() {
        assert_eq!(color_from_hex_string("#ZZZZZZ"), Rgba::GRAY);
        assert_eq!(color_from_hex_string("#fff"), Rgba::GRAY);
        assert_eq!(color_from_hex_string(""), Rgba::GRAY);
        assert_eq!(color_from_hex_string("#1010121"), Rgba::GRAY);
        assert_eq!(color_from_hex_string("+12345"), Rgba::GRAY);
    }

    #[test]
    fn test_to_terminal_color() {
        let color: Color = Rgba::rgb(1, 2, 3).into();
        assert_eq!(color, Color::Rgb(1, 2, 3));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgba::rgb(0xd8, 0xdb, 0xdf).to_hex(), "#d8dbdf");
    }
}
