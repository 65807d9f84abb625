use ratatui::style::Modifier;
use serde::{Deserialize, Serialize};

/// Line height as a multiple of the point size
const LINE_HEIGHT_FACTOR: f32 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Font request handed to the host renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontDescriptor {
    pub size: f32,
    #[serde(default)]
    pub weight: FontWeight,
}

impl FontDescriptor {
    /// Regular-weight font of the given point size
    #[must_use]
    pub const fn system(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
        }
    }

    #[must_use]
    pub const fn bold(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Bold,
        }
    }

    /// Height of one line set in this font, in points
    #[must_use]
    pub fn line_height(&self) -> f32 {
        self.size * LINE_HEIGHT_FACTOR
    }

    /// Terminal cells have a fixed size, so only the weight survives
    #[must_use]
    pub fn modifier(&self) -> Modifier {
        match self.weight {
            FontWeight::Regular => Modifier::empty(),
            FontWeight::Bold => Modifier::BOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_height_scales_with_size() {
        assert!((FontDescriptor::system(10.0).line_height() - 12.0).abs() < 0.001);
    }

    #[test]
    fn test_modifier_follows_weight() {
        assert_eq!(FontDescriptor::system(14.0).modifier(), Modifier::empty());
        assert_eq!(FontDescriptor::bold(30.0).modifier(), Modifier::BOLD);
    }
}
