//! The floating-label text field.
//!
//! Focus and edit events from the wrapped [`TextEntry`] are funneled through
//! [`TextEntryDelegate`]; every event ends in one render pass that re-declares
//! the layout inside an animator transaction and restyles the title, border
//! and trailing buttons.

mod affordances;
mod changes;
mod keys;
mod state;
mod text_entry;
mod title;

pub use affordances::{
    BUTTON_WIDTH, ClearButton, IconButton, SEPARATOR_WIDTH, TrailingStack, clear_button_visible,
};
pub use changes::FieldChanges;
pub use state::{FieldState, has_content};
pub use text_entry::{MASK_GLYPH, TextEntry};
pub use title::{TitleContext, TitleSpan, compose_title, title_line};

use crate::animation::{Animator, TRANSITION_DURATION, TickAnimator, lerp};
use crate::assets::{AssetLoader, BundledAssets, CLEAR_ICON, Icon};
use crate::layout::{Anchor, ConstraintLayout, Element, Frame, LayoutEngine, ResolvedLayout};
use crate::style::{CornerMask, FieldStyle, FontDescriptor, Rgba};
use std::fmt;
use std::ops::Range;
use std::time::Duration;
use tracing::{debug, trace};

/// Height used when none is given
pub const DEFAULT_HEIGHT: f32 = 56.0;
/// Inset of the text entry and title from the container edges
pub const BASE_INSET: f32 = 8.0;
/// How far the title rises (and the text entry drops) while active
pub const RAISE_OFFSET: f32 = 12.0;
/// `limit_character` value meaning "no limit"
pub const UNLIMITED: i32 = -1;

/// Callbacks the text-entry control raises on its owner
pub trait TextEntryDelegate {
    fn on_focus_gained(&mut self);
    fn on_focus_lost(&mut self);
    /// Asked before a replacement of `range` (in characters) by `replacement` is committed
    fn should_accept_replacement(&mut self, range: Range<usize>, replacement: &str) -> bool;
}

/// Top inset of the text entry for the given activity
#[must_use]
pub fn text_entry_top_inset(is_active: bool) -> f32 {
    if is_active {
        BASE_INSET + RAISE_OFFSET
    } else {
        BASE_INSET
    }
}

/// Vertical offset of the title center from the container center
#[must_use]
pub fn title_center_offset_for(is_active: bool) -> f32 {
    if is_active { -RAISE_OFFSET } else { 0.0 }
}

pub struct FloatingLabelTextField {
    placeholder: String,
    height: Option<f32>,
    style: FieldStyle,
    is_secure: bool,
    has_clear_button: bool,
    is_required: bool,
    limit_character: i32,
    field_state: FieldState,
    entry: TextEntry,
    trailing: TrailingStack,
    title: Vec<TitleSpan>,
    right_button_action: Option<Box<dyn FnMut()>>,
    on_text_changed: Option<Box<dyn FnMut(&str)>>,
    layout: Box<dyn LayoutEngine>,
    animator: Box<dyn Animator>,
    title_offset_from: f32,
    title_offset_to: f32,
}

impl fmt::Debug for FloatingLabelTextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FloatingLabelTextField")
            .field("placeholder", &self.placeholder)
            .field("text", &self.entry.content())
            .field("field_state", &self.field_state)
            .field("is_active", &self.is_active())
            .field("is_focused", &self.entry.is_focused())
            .field("is_required", &self.is_required)
            .field("is_secure", &self.is_secure)
            .field("limit_character", &self.limit_character)
            .finish_non_exhaustive()
    }
}

impl Default for FloatingLabelTextField {
    fn default() -> Self {
        Self::with_collaborators(
            "Placeholder",
            None,
            FieldStyle::default(),
            Box::new(ConstraintLayout::new()),
            Box::new(TickAnimator::new()),
            &BundledAssets::new(),
        )
    }
}

impl FloatingLabelTextField {
    /// Creates a field with the default style and the terminal collaborators
    pub fn new(placeholder: impl Into<String>, height: f32) -> Self {
        Self::with_style(placeholder, height, FieldStyle::default())
    }

    /// Creates a field of [`DEFAULT_HEIGHT`]
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self::new(placeholder, DEFAULT_HEIGHT)
    }

    pub fn with_style(placeholder: impl Into<String>, height: f32, style: FieldStyle) -> Self {
        Self::with_collaborators(
            placeholder,
            Some(height),
            style,
            Box::new(ConstraintLayout::new()),
            Box::new(TickAnimator::new()),
            &BundledAssets::new(),
        )
    }

    /// Creates a field wired to the given host collaborators
    pub fn with_collaborators(
        placeholder: impl Into<String>,
        height: Option<f32>,
        style: FieldStyle,
        mut layout: Box<dyn LayoutEngine>,
        animator: Box<dyn Animator>,
        assets: &dyn AssetLoader,
    ) -> Self {
        for (element, anchors) in TrailingStack::child_constraints() {
            layout.remake_constraints(element, &anchors);
        }
        layout.remake_constraints(
            Element::TrailingStack,
            &[Anchor::Right(0.0), Anchor::FillHeight, Anchor::CenterY(0.0)],
        );

        let mut field = Self {
            placeholder: placeholder.into(),
            height,
            style,
            is_secure: false,
            has_clear_button: true,
            is_required: false,
            limit_character: UNLIMITED,
            field_state: FieldState::Normal,
            entry: TextEntry::new(),
            trailing: TrailingStack::new(assets.icon_or_empty(CLEAR_ICON)),
            title: Vec::new(),
            right_button_action: None,
            on_text_changed: None,
            layout,
            animator,
            title_offset_from: 0.0,
            title_offset_to: 0.0,
        };
        field.declare_container();
        field.refresh(Duration::ZERO);
        field
    }

    // ----- configuration -----

    /// Applies a batch of property changes followed by one render pass
    pub fn apply(&mut self, changes: FieldChanges) {
        if let Some(placeholder) = changes.placeholder {
            self.placeholder = placeholder;
        }
        if let Some(height) = changes.height {
            self.height = height;
            self.declare_container();
        }
        if let Some(is_secure) = changes.is_secure {
            self.is_secure = is_secure;
            self.entry.set_secure(is_secure);
            if let Some(button) = self.trailing.icon_button.as_mut() {
                button.selected = false;
            }
        }
        if let Some(has_clear_button) = changes.has_clear_button {
            self.has_clear_button = has_clear_button;
        }
        if let Some(is_required) = changes.is_required {
            self.is_required = is_required;
        }
        if let Some(limit) = changes.limit_character {
            self.limit_character = limit;
        }
        if let Some(icon) = changes.right_icon {
            self.trailing.set_icon(icon);
        }
        if let Some(radius) = changes.corner_radius {
            self.style.corner_radius = radius;
        }
        if let Some(corners) = changes.masked_corners {
            self.style.masked_corners = corners;
        }
        if let Some(font) = changes.font {
            self.style.fonts.field = font;
        }
        if let Some(font) = changes.placeholder_active_font {
            self.style.fonts.active = font;
        }
        if let Some(font) = changes.placeholder_inactive_font {
            self.style.fonts.inactive = font;
        }
        if let Some(color) = changes.text_color {
            self.style.colors.text = color;
        }
        if let Some(color) = changes.warning_color {
            self.style.colors.warning = color;
        }
        if let Some(color) = changes.selected_color {
            self.style.colors.selected = color;
        }
        if let Some(color) = changes.normal_color {
            self.style.colors.normal = color;
        }
        if let Some(color) = changes.placeholder_color {
            self.style.colors.placeholder = color;
        }
        if let Some(marker) = changes.required_marker {
            self.style.required_marker = marker;
        }
        if let Some(text) = changes.text {
            // programmatic assignment skips the character limit
            self.entry.set_content(text.unwrap_or_default());
        }
        self.refresh(Duration::ZERO);
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.apply(FieldChanges::new().placeholder(placeholder));
    }

    /// Replaces the text without an animated transition or text-changed notification
    pub fn set_text(&mut self, text: Option<String>) {
        self.apply(FieldChanges::new().text(text));
    }

    pub fn set_height(&mut self, height: Option<f32>) {
        self.apply(FieldChanges::new().height(height));
    }

    pub fn set_secure(&mut self, is_secure: bool) {
        self.apply(FieldChanges::new().secure(is_secure));
    }

    pub fn set_has_clear_button(&mut self, has_clear_button: bool) {
        self.apply(FieldChanges::new().clear_button(has_clear_button));
    }

    pub fn set_required(&mut self, is_required: bool) {
        self.apply(FieldChanges::new().required(is_required));
    }

    /// Maximum accepted character count; [`UNLIMITED`] (or anything below 1) disables the check
    pub fn set_limit_character(&mut self, limit: i32) {
        self.apply(FieldChanges::new().limit_character(limit));
    }

    pub fn set_right_icon(&mut self, icon: Option<Icon>) {
        self.apply(FieldChanges::new().right_icon(icon));
    }

    pub fn set_corner_radius(&mut self, radius: f32) {
        self.apply(FieldChanges::new().corner_radius(radius));
    }

    pub fn set_border_corner_radius(&mut self, corners: CornerMask) {
        self.apply(FieldChanges::new().masked_corners(corners));
    }

    pub fn set_font(&mut self, font: FontDescriptor) {
        self.apply(FieldChanges::new().font(font));
    }

    pub fn set_placeholder_active_font(&mut self, font: FontDescriptor) {
        self.apply(FieldChanges::new().placeholder_active_font(font));
    }

    pub fn set_placeholder_inactive_font(&mut self, font: FontDescriptor) {
        self.apply(FieldChanges::new().placeholder_inactive_font(font));
    }

    pub fn set_text_color(&mut self, color: Rgba) {
        self.apply(FieldChanges::new().text_color(color));
    }

    pub fn set_warning_color(&mut self, color: Rgba) {
        self.apply(FieldChanges::new().warning_color(color));
    }

    pub fn set_selected_color(&mut self, color: Rgba) {
        self.apply(FieldChanges::new().selected_color(color));
    }

    pub fn set_normal_color(&mut self, color: Rgba) {
        self.apply(FieldChanges::new().normal_color(color));
    }

    pub fn set_placeholder_color(&mut self, color: Rgba) {
        self.apply(FieldChanges::new().placeholder_color(color));
    }

    /// Invoked when the icon button is tapped on a non-secure field
    pub fn set_right_button_action(&mut self, action: impl FnMut() + 'static) {
        self.right_button_action = Some(Box::new(action));
    }

    /// Invoked with the current text after every committed edit
    pub fn set_on_text_changed(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_text_changed = Some(Box::new(callback));
    }

    // ----- state -----

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn text(&self) -> &str {
        self.entry.content()
    }

    pub fn height(&self) -> Option<f32> {
        self.height
    }

    pub fn style(&self) -> &FieldStyle {
        &self.style
    }

    pub fn is_secure(&self) -> bool {
        self.is_secure
    }

    pub fn has_clear_button(&self) -> bool {
        self.has_clear_button
    }

    pub fn is_required(&self) -> bool {
        self.is_required
    }

    pub fn limit_character(&self) -> i32 {
        self.limit_character
    }

    pub fn right_icon(&self) -> Option<&Icon> {
        self.trailing.icon_button.as_ref().map(|button| &button.icon)
    }

    pub fn field_state(&self) -> FieldState {
        self.field_state
    }

    /// Raised-label state: focused, or holding non-whitespace text
    pub fn is_active(&self) -> bool {
        self.entry.is_focused() || has_content(self.entry.content())
    }

    pub fn is_focused(&self) -> bool {
        self.entry.is_focused()
    }

    /// Whether the text entry currently masks its characters
    pub fn is_masking(&self) -> bool {
        self.entry.is_secure()
    }

    pub fn entry(&self) -> &TextEntry {
        &self.entry
    }

    pub fn trailing(&self) -> &TrailingStack {
        &self.trailing
    }

    pub fn is_clear_button_visible(&self) -> bool {
        self.trailing.clear_button.visible
    }

    pub fn is_icon_selected(&self) -> bool {
        self.trailing
            .icon_button
            .as_ref()
            .is_some_and(|button| button.selected)
    }

    pub fn border_color(&self) -> Rgba {
        self.field_state.border_color(&self.style.colors)
    }

    pub fn title_spans(&self) -> &[TitleSpan] {
        &self.title
    }

    /// Current title font, following the active state
    pub fn title_font(&self) -> FontDescriptor {
        if self.is_active() {
            self.style.fonts.active
        } else {
            self.style.fonts.inactive
        }
    }

    pub fn text_entry_top_inset(&self) -> f32 {
        text_entry_top_inset(self.is_active())
    }

    /// Title offset from center as currently presented (mid-transition values included)
    pub fn title_center_offset(&self) -> f32 {
        lerp(
            self.title_offset_from,
            self.title_offset_to,
            self.animator.progress(),
        )
    }

    /// Past the halfway point towards the raised position
    pub fn is_title_raised(&self) -> bool {
        self.title_center_offset() < -RAISE_OFFSET / 2.0
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Resolves the declared constraints for the given bounds
    pub fn resolve_layout(&self, bounds: Frame) -> ResolvedLayout {
        self.layout.resolve(bounds)
    }

    // ----- events -----

    /// Gives focus to the text entry
    pub fn focus(&mut self) {
        if self.entry.is_focused() {
            return;
        }
        self.entry.set_focused(true);
        self.on_focus_gained();
    }

    /// Takes focus away from the text entry
    pub fn blur(&mut self) {
        if !self.entry.is_focused() {
            return;
        }
        self.entry.set_focused(false);
        self.on_focus_lost();
    }

    /// Proposes replacing `range` (in characters) with `replacement`.
    ///
    /// Returns false, leaving the text untouched, when the delegate check rejects it.
    pub fn replace_text(&mut self, range: Range<usize>, replacement: &str) -> bool {
        if !self.should_accept_replacement(range.clone(), replacement) {
            trace!(
                ?range,
                replacement,
                limit = self.limit_character,
                "replacement rejected"
            );
            return false;
        }
        self.entry.replace(range, replacement);
        self.editing_changed();
        true
    }

    /// Types text at the cursor
    pub fn insert_str(&mut self, text: &str) -> bool {
        let range = self.entry.insertion_range();
        self.replace_text(range, text)
    }

    pub fn insert_char(&mut self, character: char) -> bool {
        let mut buffer = [0u8; 4];
        self.insert_str(character.encode_utf8(&mut buffer))
    }

    /// Removes the character before the cursor
    pub fn backspace(&mut self) -> bool {
        match self.entry.backspace_range() {
            Some(range) => self.replace_text(range, ""),
            None => false,
        }
    }

    /// Removes the character at the cursor
    pub fn delete_forward(&mut self) -> bool {
        match self.entry.delete_range() {
            Some(range) => self.replace_text(range, ""),
            None => false,
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.entry.move_left();
    }

    pub fn move_cursor_right(&mut self) {
        self.entry.move_right();
    }

    pub fn move_cursor_to_start(&mut self) {
        self.entry.move_to_start();
    }

    pub fn move_cursor_to_end(&mut self) {
        self.entry.move_to_end();
    }

    /// Re-runs the animated render pass and raises the text-changed notification
    pub fn editing_changed(&mut self) {
        self.refresh(TRANSITION_DURATION);
        if let Some(callback) = self.on_text_changed.as_mut() {
            callback(self.entry.content());
        }
    }

    /// Tap on the custom icon button
    pub fn tap_right_icon(&mut self) {
        if self.is_secure {
            let selected = self.trailing.toggle_icon_selected();
            let masking = !self.entry.is_secure();
            self.entry.set_secure(masking);
            debug!(placeholder = %self.placeholder, masking, selected, "secure entry toggled");
        } else if let Some(action) = self.right_button_action.as_mut() {
            debug!(placeholder = %self.placeholder, "right button action");
            action();
        } else {
            self.editing_changed();
        }
    }

    /// Tap on the clear button
    pub fn tap_clear(&mut self) {
        debug!(placeholder = %self.placeholder, "text cleared");
        self.entry.clear();
        self.trailing.clear_button.visible = false;
        self.refresh(TRANSITION_DURATION);
        self.focus();
        self.editing_changed();
    }

    // ----- render pass -----

    fn declare_container(&mut self) {
        let anchors: Vec<Anchor> = self.height.map(Anchor::Height).into_iter().collect();
        self.layout.remake_constraints(Element::Container, &anchors);
    }

    /// Recomputes derived state and re-declares the layout inside one transaction
    fn refresh(&mut self, duration: Duration) {
        let is_active = self.is_active();
        let is_focused = self.entry.is_focused();

        self.title = compose_title(
            TitleContext {
                placeholder: &self.placeholder,
                is_required: self.is_required,
                is_active,
                is_focused,
            },
            &self.style,
        );
        self.trailing.clear_button.visible =
            clear_button_visible(self.has_clear_button, self.entry.content(), is_focused);

        let arranged = self.trailing.arranged();
        let top_inset = text_entry_top_inset(is_active);
        let title_offset = title_center_offset_for(is_active);
        let title_height = self.title_font().line_height();

        self.title_offset_from = self.title_center_offset();
        self.animator
            .animate(duration, self.layout.as_mut(), &mut |layout: &mut dyn LayoutEngine| {
                layout.remake_constraints(
                    Element::TextEntry,
                    &[
                        Anchor::Left(BASE_INSET),
                        Anchor::RightToLeftOf(Element::TrailingStack),
                        Anchor::Bottom(BASE_INSET),
                        Anchor::Top(top_inset),
                    ],
                );
                layout.remake_constraints(
                    Element::TitleLabel,
                    &[
                        Anchor::CenterY(title_offset),
                        Anchor::Left(BASE_INSET),
                        Anchor::Height(title_height),
                    ],
                );
                layout.arrange(Element::TrailingStack, &arranged);
            });
        self.title_offset_to = title_offset;

        trace!(
            placeholder = %self.placeholder,
            is_active,
            state = ?self.field_state,
            clear_visible = self.trailing.clear_button.visible,
            duration_ms = duration.as_millis() as u64,
            "layout pass"
        );
    }
}

impl TextEntryDelegate for FloatingLabelTextField {
    fn on_focus_gained(&mut self) {
        self.field_state = FieldState::on_focus_gained();
        debug!(placeholder = %self.placeholder, state = ?self.field_state, "focus gained");
        self.refresh(TRANSITION_DURATION);
    }

    fn on_focus_lost(&mut self) {
        self.field_state = FieldState::on_focus_lost(self.is_required, self.entry.content());
        debug!(placeholder = %self.placeholder, state = ?self.field_state, "focus lost");
        self.refresh(TRANSITION_DURATION);
    }

    fn should_accept_replacement(&mut self, range: Range<usize>, replacement: &str) -> bool {
        let Ok(limit) = usize::try_from(self.limit_character) else {
            return true;
        };
        if limit == 0 {
            return true;
        }
        let range = self.entry.clamp_range(range);
        let resulting = self.entry.char_count() - range.len() + replacement.chars().count();
        resulting <= limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::ImmediateAnimator;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn field(placeholder: &str) -> FloatingLabelTextField {
        FloatingLabelTextField::with_collaborators(
            placeholder,
            Some(DEFAULT_HEIGHT),
            FieldStyle::default(),
            Box::new(ConstraintLayout::new()),
            Box::new(ImmediateAnimator),
            &BundledAssets::new(),
        )
    }

    fn type_text(field: &mut FloatingLabelTextField, text: &str) {
        for character in text.chars() {
            field.insert_char(character);
        }
    }

    #[test]
    fn test_new_field_is_inactive_and_normal() {
        let field = field("Name");
        assert!(!field.is_active());
        assert_eq!(field.field_state(), FieldState::Normal);
        assert_eq!(field.limit_character(), UNLIMITED);
        assert!(field.has_clear_button());
        assert!(!field.is_clear_button_visible());
        assert_eq!(field.text(), "");
        assert_eq!(field.border_color(), field.style().colors.normal);
    }

    #[test]
    fn test_limit_rejects_insert_past_limit() {
        let mut field = field("Code");
        field.set_limit_character(5);
        field.set_text(Some("hello".to_string()));
        field.focus();

        assert!(!field.insert_char('!'));
        assert_eq!(field.text(), "hello");
    }

    #[test]
    fn test_limit_allows_replacement_within_limit() {
        let mut field = field("Code");
        field.set_limit_character(5);
        field.set_text(Some("hello".to_string()));

        assert!(field.replace_text(0..1, "j"));
        assert_eq!(field.text(), "jello");
        assert!(field.replace_text(4..5, ""));
        assert!(field.insert_str("y"));
        assert_eq!(field.text(), "jelly");
        assert!(!field.replace_text(0..1, "sm"));
        assert_eq!(field.text(), "jelly");
    }

    #[test]
    fn test_limit_counts_characters_not_bytes() {
        let mut field = field("Code");
        field.set_limit_character(3);
        assert!(field.insert_str("žžž"));
        assert!(!field.insert_char('ž'));
    }

    #[test]
    fn test_non_positive_limit_is_unlimited() {
        for limit in [UNLIMITED, 0] {
            let mut field = field("Free");
            field.set_limit_character(limit);
            assert!(field.insert_str(&"x".repeat(200)));
        }
    }

    #[test]
    fn test_programmatic_text_skips_limit() {
        let mut field = field("Code");
        field.set_limit_character(2);
        field.set_text(Some("abcdef".to_string()));
        assert_eq!(field.text(), "abcdef");
    }

    #[test]
    fn test_focus_drives_editing_state() {
        let mut field = field("Name");
        field.focus();
        assert_eq!(field.field_state(), FieldState::Editing);
        assert!(field.is_active());
        assert_eq!(field.border_color(), field.style().colors.selected);

        field.blur();
        assert_eq!(field.field_state(), FieldState::Normal);
        assert!(!field.is_active());
    }

    #[test]
    fn test_required_empty_blur_warns() {
        let mut field = field("Required");
        field.set_required(true);
        field.focus();
        field.blur();

        assert_eq!(field.field_state(), FieldState::Warning);
        assert_eq!(field.border_color(), field.style().colors.warning);
        let spans = field.title_spans();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1].text, field.style().required_marker);
        assert_eq!(spans[1].color, field.style().colors.warning);
    }

    #[test]
    fn test_required_whitespace_blur_warns() {
        let mut field = field("Required");
        field.set_required(true);
        field.focus();
        type_text(&mut field, "   ");
        field.blur();
        assert_eq!(field.field_state(), FieldState::Warning);
        assert!(!field.is_active());
    }

    #[test]
    fn test_required_filled_blur_is_normal() {
        let mut field = field("Required");
        field.set_required(true);
        field.focus();
        type_text(&mut field, "ok");
        field.blur();
        assert_eq!(field.field_state(), FieldState::Normal);
        assert!(field.is_active());
    }

    #[test]
    fn test_warning_clears_on_refocus() {
        let mut field = field("Required");
        field.set_required(true);
        field.focus();
        field.blur();
        field.focus();
        assert_eq!(field.field_state(), FieldState::Editing);
    }

    #[test]
    fn test_secure_icon_toggles_masking() {
        let mut field = field("Secure");
        field.set_secure(true);
        field.set_right_icon(Some(Icon::new("◉")));
        assert!(field.is_masking());

        field.tap_right_icon();
        assert!(!field.is_masking());
        assert!(field.is_icon_selected());
        field.tap_right_icon();
        assert!(field.is_masking());
        assert!(!field.is_icon_selected());
        field.tap_right_icon();
        assert!(!field.is_masking());
    }

    #[test]
    fn test_icon_action_invoked_when_not_secure() {
        let taps = Rc::new(RefCell::new(0));
        let mut field = field("Has icon");
        field.set_right_icon(Some(Icon::new("◎")));
        let counter = Rc::clone(&taps);
        field.set_right_button_action(move || *counter.borrow_mut() += 1);

        field.tap_right_icon();
        field.tap_right_icon();
        assert_eq!(*taps.borrow(), 2);
        assert!(!field.is_masking());
    }

    #[test]
    fn test_icon_without_action_notifies_text_changed() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut field = field("Plain");
        field.set_text(Some("abc".to_string()));
        let sink = Rc::clone(&seen);
        field.set_on_text_changed(move |text| sink.borrow_mut().push(text.to_string()));

        field.tap_right_icon();
        assert_eq!(*seen.borrow(), vec!["abc".to_string()]);
    }

    #[test]
    fn test_clear_button_visibility_rule() {
        let mut field = field("Name");
        field.set_text(Some("abc".to_string()));
        assert!(!field.is_clear_button_visible());

        field.focus();
        assert!(field.is_clear_button_visible());

        field.set_has_clear_button(false);
        assert!(!field.is_clear_button_visible());

        field.set_has_clear_button(true);
        field.backspace();
        field.backspace();
        field.backspace();
        assert!(!field.is_clear_button_visible());
    }

    #[test]
    fn test_tap_clear_empties_refocuses_and_notifies() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut field = field("Name");
        field.set_text(Some("abc".to_string()));
        let sink = Rc::clone(&seen);
        field.set_on_text_changed(move |text| sink.borrow_mut().push(text.to_string()));

        field.tap_clear();
        assert_eq!(field.text(), "");
        assert!(field.is_focused());
        assert!(!field.is_clear_button_visible());
        assert_eq!(field.field_state(), FieldState::Editing);
        assert_eq!(*seen.borrow(), vec![String::new()]);
    }

    #[test]
    fn test_active_tracks_text_while_unfocused() {
        let mut field = field("Name");
        for text in ["a", "", "  ", "b ", "\n"] {
            field.set_text(Some(text.to_string()));
            assert_eq!(field.is_active(), has_content(text), "text {text:?}");
        }
        field.set_text(None);
        assert!(!field.is_active());
    }

    #[test]
    fn test_layout_follows_active_state() {
        let mut field = field("Name");
        let bounds = Frame::new(0.0, 0.0, 300.0, 200.0);

        let resolved = field.resolve_layout(bounds);
        let entry = resolved.frame(Element::TextEntry).unwrap();
        let title = resolved.frame(Element::TitleLabel).unwrap();
        assert!((entry.y - BASE_INSET).abs() < 0.001);
        assert!((title.mid_y() - DEFAULT_HEIGHT / 2.0).abs() < 0.001);
        assert!(!field.is_title_raised());

        field.set_text(Some("x".to_string()));
        let resolved = field.resolve_layout(bounds);
        let entry = resolved.frame(Element::TextEntry).unwrap();
        let title = resolved.frame(Element::TitleLabel).unwrap();
        assert!((entry.y - (BASE_INSET + RAISE_OFFSET)).abs() < 0.001);
        assert!((title.mid_y() - (DEFAULT_HEIGHT / 2.0 - RAISE_OFFSET)).abs() < 0.001);
        assert!(field.is_title_raised());
        assert_eq!(field.title_font(), field.style().fonts.active);
    }

    #[test]
    fn test_text_entry_ends_at_trailing_stack() {
        let mut field = field("Name");
        let bounds = Frame::new(0.0, 0.0, 300.0, DEFAULT_HEIGHT);
        let entry = field
            .resolve_layout(bounds)
            .frame(Element::TextEntry)
            .unwrap();
        assert!((entry.max_x() - (300.0 - SEPARATOR_WIDTH)).abs() < 0.001);

        field.set_right_icon(Some(Icon::new("◎")));
        field.set_text(Some("abc".to_string()));
        field.focus();
        let entry = field
            .resolve_layout(bounds)
            .frame(Element::TextEntry)
            .unwrap();
        let width = BUTTON_WIDTH * 2.0 + SEPARATOR_WIDTH;
        assert!((entry.max_x() - (300.0 - width)).abs() < 0.001);
    }

    #[test]
    fn test_height_constrains_container() {
        let mut field = field("Height");
        field.set_height(Some(80.0));
        let container = field
            .resolve_layout(Frame::new(0.0, 0.0, 300.0, 500.0))
            .frame(Element::Container)
            .unwrap();
        assert!((container.height - 80.0).abs() < 0.001);
    }

    #[test]
    fn test_apply_batches_changes() {
        let mut field = field("Before");
        field.apply(
            FieldChanges::new()
                .placeholder("After")
                .required(true)
                .required_marker("*")
                .limit_character(3)
                .text(Some("abc".to_string())),
        );
        assert_eq!(field.placeholder(), "After");
        assert_eq!(title_line(field.title_spans()).to_string(), "After*");
        assert!(field.is_active());
        assert!(!field.insert_char('d'));
    }
}
