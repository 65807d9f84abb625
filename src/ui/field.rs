//! Terminal presentation of [`FloatingLabelTextField`].
//!
//! Geometry comes from the field's resolved constraints (in points) and is
//! mapped onto the cell grid inside the border. A raised title sits in the top
//! border row; a centered one takes the text row.

use super::utils::{POINTS_PER_COLUMN, rows_for_height, slice_by_chars, visible_window};
use crate::field::{DEFAULT_HEIGHT, FloatingLabelTextField, title_line};
use crate::layout::{Element, Frame};
use crate::style::{CornerMask, FieldStyle};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    symbols::{border, line},
    widgets::{Block, Widget},
};
use unicode_width::UnicodeWidthStr;

const SEPARATOR_GLYPH: &str = "│";

/// Cell rectangles of the field's parts for one draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldGeometry {
    pub inner: Rect,
    pub text: Rect,
    pub title: Rect,
    pub icon: Option<Rect>,
    pub separator: Option<Rect>,
    pub clear: Option<Rect>,
}

impl FloatingLabelTextField {
    /// Rows this field wants, borders included
    pub fn preferred_rows(&self) -> u16 {
        rows_for_height(self.height().unwrap_or(DEFAULT_HEIGHT))
    }

    /// Maps the resolved layout onto the cells of `area`
    pub fn geometry(&self, area: Rect) -> Option<FieldGeometry> {
        if area.width < 3 || area.height < 3 {
            return None;
        }
        let inner = Block::bordered().inner(area);
        let height = self.height().unwrap_or(DEFAULT_HEIGHT);
        let bounds = Frame::new(0.0, 0.0, f32::from(inner.width) * POINTS_PER_COLUMN, height);
        let resolved = self.resolve_layout(bounds);
        let container = resolved.frame(Element::Container).unwrap_or(bounds);

        let cells = |element: Element, full_height: bool| -> Option<Rect> {
            let frame = resolved.frame(element)?;
            let start = columns(frame.x).min(inner.width);
            let end = columns(frame.max_x()).min(inner.width);
            let (y, rows) = if full_height {
                (inner.y, inner.height)
            } else {
                (inner.y + row_of(frame.mid_y(), container.height, inner.height), 1)
            };
            Some(Rect::new(inner.x + start, y, end.saturating_sub(start), rows))
        };

        let arranged = self.trailing().arranged();
        let shown = |element: Element, full_height: bool| {
            arranged
                .contains(&element)
                .then(|| cells(element, full_height))
                .flatten()
        };

        Some(FieldGeometry {
            inner,
            text: cells(Element::TextEntry, false)?,
            title: cells(Element::TitleLabel, false)?,
            icon: shown(Element::IconButton, false),
            separator: shown(Element::Separator, true),
            clear: shown(Element::ClearButton, false),
        })
    }

    /// Where the host should place the terminal cursor, if focused
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        if !self.is_focused() {
            return None;
        }
        let geometry = self.geometry(area)?;
        let (before, _) = visible_text(self, geometry.text.width);
        let offset = u16::try_from(before.width()).unwrap_or(u16::MAX);
        Some(Position::new(
            geometry
                .text
                .x
                .saturating_add(offset)
                .min(geometry.text.right().saturating_sub(1).max(geometry.text.x)),
            geometry.text.y,
        ))
    }
}

impl Widget for &FloatingLabelTextField {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(geometry) = self.geometry(area) else {
            return;
        };
        let style = self.style();
        let raised = self.is_title_raised();

        let mut block = Block::bordered()
            .border_set(border_set(style))
            .border_style(Style::default().fg(self.border_color().into()));
        if raised {
            block = block.title(title_line(self.title_spans()));
        }
        block.render(area, buf);

        if let Some(separator) = geometry.separator {
            let separator_style = Style::default().fg(style.colors.normal.into());
            for y in separator.top()..separator.bottom() {
                buf.set_stringn(separator.x, y, SEPARATOR_GLYPH, 1, separator_style);
            }
        }
        if let Some((icon_area, icon)) = geometry.icon.zip(self.right_icon()) {
            let color = if self.is_icon_selected() {
                style.colors.selected
            } else {
                style.colors.placeholder
            };
            draw_centered(buf, icon_area, icon.glyph(), Style::default().fg(color.into()));
        }
        if let Some(clear_area) = geometry.clear {
            let glyph = self.trailing().clear_button.icon.glyph();
            draw_centered(buf, clear_area, glyph, Style::default().fg(style.colors.normal.into()));
        }

        if raised {
            let (before, after) = visible_text(self, geometry.text.width);
            let text_style = Style::default()
                .fg(style.colors.text.into())
                .add_modifier(style.fonts.field.modifier());
            let shown = format!("{before}{after}");
            buf.set_stringn(
                geometry.text.x,
                geometry.text.y,
                shown,
                usize::from(geometry.text.width),
                text_style,
            );
        } else {
            let title = title_line(self.title_spans());
            let width = geometry.text.right().saturating_sub(geometry.title.x);
            buf.set_line(geometry.title.x, geometry.title.y, &title, width);
        }
    }
}

/// Text split at the cursor, windowed to `width` columns
fn visible_text(field: &FloatingLabelTextField, width: u16) -> (String, String) {
    let display = field.entry().display_text();
    let cursor = field.entry().cursor_position();
    let (start, end) = visible_window(&display, cursor, usize::from(width.max(1)));
    let visible = slice_by_chars(&display, start, end);
    let relative_cursor = cursor.saturating_sub(start).min(visible.chars().count());
    let before = slice_by_chars(&visible, 0, relative_cursor);
    let after = slice_by_chars(&visible, relative_cursor, visible.chars().count());
    (before, after)
}

fn columns(points: f32) -> u16 {
    let cells = (points / POINTS_PER_COLUMN).floor();
    if cells.is_finite() && cells > 0.0 {
        cells.min(f32::from(u16::MAX)) as u16
    } else {
        0
    }
}

fn row_of(mid_y: f32, container_height: f32, rows: u16) -> u16 {
    if container_height <= 0.0 || rows == 0 {
        return 0;
    }
    let row = (mid_y / container_height * f32::from(rows)).floor();
    if row.is_finite() && row > 0.0 {
        (row as u16).min(rows - 1)
    } else {
        0
    }
}

fn draw_centered(buf: &mut Buffer, area: Rect, glyph: &str, style: Style) {
    let width = u16::try_from(glyph.width()).unwrap_or(u16::MAX);
    if width == 0 || area.width < width {
        return;
    }
    let x = area.x + (area.width - width) / 2;
    buf.set_stringn(x, area.y, glyph, usize::from(width), style);
}

/// Rounded glyphs at masked corners, square ones elsewhere
fn border_set(style: &FieldStyle) -> border::Set {
    let corner = |mask: CornerMask, rounded: &'static str, square: &'static str| {
        if style.masked_corners.is_rounded(mask, style.corner_radius) {
            rounded
        } else {
            square
        }
    };
    border::Set {
        top_left: corner(CornerMask::TOP_LEFT, line::ROUNDED_TOP_LEFT, line::TOP_LEFT),
        top_right: corner(CornerMask::TOP_RIGHT, line::ROUNDED_TOP_RIGHT, line::TOP_RIGHT),
        bottom_left: corner(
            CornerMask::BOTTOM_LEFT,
            line::ROUNDED_BOTTOM_LEFT,
            line::BOTTOM_LEFT,
        ),
        bottom_right: corner(
            CornerMask::BOTTOM_RIGHT,
            line::ROUNDED_BOTTOM_RIGHT,
            line::BOTTOM_RIGHT,
        ),
        ..border::PLAIN
    }
}
