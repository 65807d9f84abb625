use crate::style::{FieldColors, Rgba};

/// Visual state of a field, driving border and title color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Normal,
    Editing,
    Warning,
}

impl FieldState {
    /// State entered when the text entry gains focus
    #[must_use]
    pub fn on_focus_gained() -> Self {
        FieldState::Editing
    }

    /// State entered when the text entry loses focus
    #[must_use]
    pub fn on_focus_lost(is_required: bool, text: &str) -> Self {
        if is_required && !has_content(text) {
            FieldState::Warning
        } else {
            FieldState::Normal
        }
    }

    #[must_use]
    pub fn border_color(self, colors: &FieldColors) -> Rgba {
        match self {
            FieldState::Normal => colors.normal,
            FieldState::Editing => colors.selected,
            FieldState::Warning => colors.warning,
        }
    }
}

/// True when the text holds anything besides whitespace
#[must_use]
pub fn has_content(text: &str) -> bool {
    !text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_lost_optional_is_normal() {
        assert_eq!(FieldState::on_focus_lost(false, ""), FieldState::Normal);
        assert_eq!(FieldState::on_focus_lost(false, "x"), FieldState::Normal);
    }

    #[test]
    fn test_focus_lost_required_checks_trimmed_text() {
        assert_eq!(FieldState::on_focus_lost(true, ""), FieldState::Warning);
        assert_eq!(FieldState::on_focus_lost(true, " \t\n"), FieldState::Warning);
        assert_eq!(FieldState::on_focus_lost(true, " a "), FieldState::Normal);
    }

    #[test]
    fn test_border_color_mapping() {
        let colors = FieldColors::default();
        assert_eq!(FieldState::Normal.border_color(&colors), colors.normal);
        assert_eq!(FieldState::Editing.border_color(&colors), colors.selected);
        assert_eq!(FieldState::Warning.border_color(&colors), colors.warning);
    }
}
