use crate::style::{FieldStyle, FontDescriptor, Rgba};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

/// One styled run of the title label
#[derive(Debug, Clone, PartialEq)]
pub struct TitleSpan {
    pub text: String,
    pub font: FontDescriptor,
    pub color: Rgba,
    /// Letter spacing in points
    pub kerning: f32,
}

impl TitleSpan {
    #[must_use]
    pub fn style(&self) -> Style {
        Style::default()
            .fg(self.color.into())
            .add_modifier(self.font.modifier())
    }
}

/// Inputs that decide how the title looks
#[derive(Debug, Clone, Copy)]
pub struct TitleContext<'a> {
    pub placeholder: &'a str,
    pub is_required: bool,
    pub is_active: bool,
    pub is_focused: bool,
}

/// Builds the title: the placeholder run, then the required marker when needed.
/// The marker is always in the warning color.
#[must_use]
pub fn compose_title(context: TitleContext<'_>, style: &FieldStyle) -> Vec<TitleSpan> {
    let font = if context.is_active {
        style.fonts.active
    } else {
        style.fonts.inactive
    };
    let color = if context.is_focused {
        style.colors.selected
    } else {
        style.colors.placeholder
    };

    let mut spans = vec![TitleSpan {
        text: context.placeholder.to_string(),
        font,
        color,
        kerning: style.title_kerning,
    }];

    if context.is_required {
        spans.push(TitleSpan {
            text: style.required_marker.clone(),
            font,
            color: style.colors.warning,
            kerning: style.marker_kerning,
        });
    }

    spans
}

/// Converts title runs to a terminal line
#[must_use]
pub fn title_line(spans: &[TitleSpan]) -> Line<'static> {
    Line::from(
        spans
            .iter()
            .map(|span| Span::styled(span.text.clone(), span.style()))
            .collect::<Vec<_>>(),
    )
}
