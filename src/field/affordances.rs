use crate::assets::Icon;
use crate::layout::{Anchor, Element};

/// Width of the icon and clear buttons, in points
pub const BUTTON_WIDTH: f32 = 40.0;
/// Width of the separator line, in points
pub const SEPARATOR_WIDTH: f32 = 1.0;

/// Optional custom button at the left of the trailing stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconButton {
    pub icon: Icon,
    /// Toggled by taps on secure fields (reveals the text while set)
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearButton {
    pub icon: Icon,
    pub visible: bool,
}

/// Trailing stack: icon button, separator, clear button, left to right
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailingStack {
    pub icon_button: Option<IconButton>,
    pub clear_button: ClearButton,
}

impl TrailingStack {
    pub fn new(clear_icon: Icon) -> Self {
        Self {
            icon_button: None,
            clear_button: ClearButton {
                icon: clear_icon,
                visible: false,
            },
        }
    }

    pub fn set_icon(&mut self, icon: Option<Icon>) {
        self.icon_button = icon.map(|icon| IconButton {
            icon,
            selected: false,
        });
    }

    /// Flips the selected look of the icon button; returns the new value
    pub fn toggle_icon_selected(&mut self) -> bool {
        match self.icon_button.as_mut() {
            Some(button) => {
                button.selected = !button.selected;
                button.selected
            }
            None => false,
        }
    }

    /// Visible children in stack order
    #[must_use]
    pub fn arranged(&self) -> Vec<Element> {
        let mut children = Vec::with_capacity(3);
        if self.icon_button.is_some() {
            children.push(Element::IconButton);
        }
        children.push(Element::Separator);
        if self.clear_button.visible {
            children.push(Element::ClearButton);
        }
        children
    }

    /// Fixed-size anchors of every child, hidden ones included
    #[must_use]
    pub fn child_constraints() -> [(Element, [Anchor; 1]); 3] {
        [
            (Element::IconButton, [Anchor::Width(BUTTON_WIDTH)]),
            (Element::Separator, [Anchor::Width(SEPARATOR_WIDTH)]),
            (Element::ClearButton, [Anchor::Width(BUTTON_WIDTH)]),
        ]
    }
}

/// Clear button visibility: enabled, something to clear, and focused
#[must_use]
pub fn clear_button_visible(has_clear_button: bool, text: &str, is_focused: bool) -> bool {
    has_clear_button && !text.is_empty() && is_focused
}
