mod color;
mod corners;
mod font;

pub use color::{Rgba, color_from_hex_string};
pub use corners::CornerMask;
pub use font::{FontDescriptor, FontWeight};

use serde::{Deserialize, Serialize};

/// Default glyph appended to the title of required fields
pub const DEFAULT_REQUIRED_MARKER: &str = "※";

/// Color palette of a field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldColors {
    /// Border while idle
    pub normal: Rgba,
    /// Border and title while focused
    pub selected: Rgba,
    /// Border of an empty required field, and the required marker
    pub warning: Rgba,
    /// Title while unfocused
    pub placeholder: Rgba,
    /// Entered text
    pub text: Rgba,
}

impl Default for FieldColors {
    fn default() -> Self {
        Self {
            normal: color_from_hex_string("#d8dbdf"),
            selected: color_from_hex_string("#723562"),
            warning: color_from_hex_string("#ff6663"),
            placeholder: color_from_hex_string("#7c7f83"),
            text: color_from_hex_string("#101012"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldFonts {
    /// Title while raised
    pub active: FontDescriptor,
    /// Title while centered
    pub inactive: FontDescriptor,
    /// Entered text
    pub field: FontDescriptor,
}

impl Default for FieldFonts {
    fn default() -> Self {
        Self {
            active: FontDescriptor::system(12.0),
            inactive: FontDescriptor::system(14.0),
            field: FontDescriptor::system(16.0),
        }
    }
}

/// Everything a field needs to style itself.
///
/// Passed in at construction instead of living in globals; every value can be
/// overridden afterwards through the field's setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldStyle {
    pub colors: FieldColors,
    pub fonts: FieldFonts,
    pub corner_radius: f32,
    pub masked_corners: CornerMask,
    pub required_marker: String,
    /// Letter spacing of the placeholder part of the title
    pub title_kerning: f32,
    /// Letter spacing of the required marker
    pub marker_kerning: f32,
}

impl Default for FieldStyle {
    fn default() -> Self {
        Self {
            colors: FieldColors::default(),
            fonts: FieldFonts::default(),
            corner_radius: 5.0,
            masked_corners: CornerMask::all(),
            required_marker: DEFAULT_REQUIRED_MARKER.to_string(),
            title_kerning: -0.09,
            marker_kerning: -0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let colors = FieldColors::default();
        assert_eq!(colors.text, Rgba::rgb(0x10, 0x10, 0x12));
        assert_eq!(colors.warning, Rgba::rgb(0xff, 0x66, 0x63));
        assert_eq!(colors.selected, Rgba::rgb(0x72, 0x35, 0x62));
        assert_eq!(colors.normal, Rgba::rgb(0xd8, 0xdb, 0xdf));
        assert_eq!(colors.placeholder, Rgba::rgb(0x7c, 0x7f, 0x83));
    }

    #[test]
    fn test_style_from_partial_toml() {
        let style: FieldStyle = toml::from_str(
            r##"
            corner_radius = 0.0
            required_marker = "*"

            [colors]
            selected = "#00ff00"
            warning = "not a color"
            "##,
        )
        .unwrap();

        assert_eq!(style.colors.selected, Rgba::rgb(0, 0xff, 0));
        assert_eq!(style.colors.warning, Rgba::GRAY);
        assert_eq!(style.colors.normal, FieldColors::default().normal);
        assert_eq!(style.required_marker, "*");
        assert_eq!(style.fonts, FieldFonts::default());
        assert_eq!(style.masked_corners, CornerMask::all());
    }
}
