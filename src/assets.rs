use std::collections::HashMap;

/// Name of the bundled clear-button icon
pub const CLEAR_ICON: &str = "clear_ic";

/// A glyph standing in for an image in a terminal cell grid
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Icon {
    glyph: String,
}

impl Icon {
    pub fn new(glyph: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
        }
    }

    /// Placeholder returned when a lookup fails
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyph.is_empty()
    }
}

impl From<&str> for Icon {
    fn from(glyph: &str) -> Self {
        Self::new(glyph)
    }
}

/// Resolves named image resources
pub trait AssetLoader {
    fn load_icon(&self, name: &str) -> Option<Icon>;

    /// Like [`AssetLoader::load_icon`] but never fails; a miss yields [`Icon::empty`]
    fn icon_or_empty(&self, name: &str) -> Icon {
        self.load_icon(name).unwrap_or_else(|| {
            tracing::warn!(name, "bundled icon not found, using empty icon");
            Icon::empty()
        })
    }
}

/// Icons shipped with the crate, plus any registered at runtime
#[derive(Debug, Clone)]
pub struct BundledAssets {
    icons: HashMap<String, Icon>,
}

impl BundledAssets {
    pub fn new() -> Self {
        let icons = [(CLEAR_ICON, "✕"), ("eye_ic", "◉"), ("camera_ic", "◎")]
            .into_iter()
            .map(|(name, glyph)| (name.to_string(), Icon::new(glyph)))
            .collect();
        Self { icons }
    }

    /// Registers or replaces an icon
    pub fn insert(&mut self, name: impl Into<String>, icon: Icon) {
        self.icons.insert(name.into(), icon);
    }
}

impl Default for BundledAssets {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetLoader for BundledAssets {
    fn load_icon(&self, name: &str) -> Option<Icon> {
        self.icons.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_clear_icon() {
        let assets = BundledAssets::new();
        assert_eq!(assets.load_icon(CLEAR_ICON), Some(Icon::new("✕")));
    }

    #[test]
    fn test_missing_icon_falls_back_to_empty() {
        let assets = BundledAssets::new();
        assert_eq!(assets.load_icon("nope"), None);
        assert!(assets.icon_or_empty("nope").is_empty());
    }

    #[test]
    fn test_insert_overrides() {
        let mut assets = BundledAssets::new();
        assets.insert(CLEAR_ICON, Icon::new("x"));
        assert_eq!(assets.icon_or_empty(CLEAR_ICON).glyph(), "x");
    }
}
