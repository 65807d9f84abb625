use crate::assets::Icon;
use crate::style::{CornerMask, FontDescriptor, Rgba};

/// A batch of property updates applied with a single render pass.
///
/// Unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldChanges {
    pub placeholder: Option<String>,
    pub height: Option<Option<f32>>,
    pub text: Option<Option<String>>,
    pub is_secure: Option<bool>,
    pub has_clear_button: Option<bool>,
    pub is_required: Option<bool>,
    pub limit_character: Option<i32>,
    pub right_icon: Option<Option<Icon>>,
    pub corner_radius: Option<f32>,
    pub masked_corners: Option<CornerMask>,
    pub font: Option<FontDescriptor>,
    pub placeholder_active_font: Option<FontDescriptor>,
    pub placeholder_inactive_font: Option<FontDescriptor>,
    pub text_color: Option<Rgba>,
    pub warning_color: Option<Rgba>,
    pub selected_color: Option<Rgba>,
    pub normal_color: Option<Rgba>,
    pub placeholder_color: Option<Rgba>,
    pub required_marker: Option<String>,
}

impl FieldChanges {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn height(mut self, height: Option<f32>) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn text(mut self, text: Option<String>) -> Self {
        self.text = Some(text);
        self
    }

    #[must_use]
    pub fn secure(mut self, is_secure: bool) -> Self {
        self.is_secure = Some(is_secure);
        self
    }

    #[must_use]
    pub fn clear_button(mut self, has_clear_button: bool) -> Self {
        self.has_clear_button = Some(has_clear_button);
        self
    }

    #[must_use]
    pub fn required(mut self, is_required: bool) -> Self {
        self.is_required = Some(is_required);
        self
    }

    #[must_use]
    pub fn limit_character(mut self, limit: i32) -> Self {
        self.limit_character = Some(limit);
        self
    }

    #[must_use]
    pub fn right_icon(mut self, icon: Option<Icon>) -> Self {
        self.right_icon = Some(icon);
        self
    }

    #[must_use]
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    #[must_use]
    pub fn masked_corners(mut self, corners: CornerMask) -> Self {
        self.masked_corners = Some(corners);
        self
    }

    #[must_use]
    pub fn font(mut self, font: FontDescriptor) -> Self {
        self.font = Some(font);
        self
    }

    #[must_use]
    pub fn placeholder_active_font(mut self, font: FontDescriptor) -> Self {
        self.placeholder_active_font = Some(font);
        self
    }

    #[must_use]
    pub fn placeholder_inactive_font(mut self, font: FontDescriptor) -> Self {
        self.placeholder_inactive_font = Some(font);
        self
    }

    #[must_use]
    pub fn text_color(mut self, color: Rgba) -> Self {
        self.text_color = Some(color);
        self
    }

    #[must_use]
    pub fn warning_color(mut self, color: Rgba) -> Self {
        self.warning_color = Some(color);
        self
    }

    #[must_use]
    pub fn selected_color(mut self, color: Rgba) -> Self {
        self.selected_color = Some(color);
        self
    }

    #[must_use]
    pub fn normal_color(mut self, color: Rgba) -> Self {
        self.normal_color = Some(color);
        self
    }

    #[must_use]
    pub fn placeholder_color(mut self, color: Rgba) -> Self {
        self.placeholder_color = Some(color);
        self
    }

    #[must_use]
    pub fn required_marker(mut self, marker: impl Into<String>) -> Self {
        self.required_marker = Some(marker.into());
        self
    }
}
