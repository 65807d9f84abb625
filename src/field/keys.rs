use super::FloatingLabelTextField;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

impl FloatingLabelTextField {
    /// Routes a terminal key event to the focused field.
    ///
    /// Returns true when the event was consumed. `Ctrl+U` taps the clear button
    /// (when shown) and `Ctrl+E` taps the icon button.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.is_focused() || key.kind == KeyEventKind::Release {
            return false;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('u') if self.is_clear_button_visible() => {
                    self.tap_clear();
                    true
                }
                KeyCode::Char('e') if self.right_icon().is_some() => {
                    self.tap_right_icon();
                    true
                }
                _ => false,
            };
        }

        match key.code {
            KeyCode::Char(character) => {
                self.insert_char(character);
                true
            }
            KeyCode::Backspace => {
                self.backspace();
                true
            }
            KeyCode::Delete => {
                self.delete_forward();
                true
            }
            KeyCode::Left => {
                self.move_cursor_left();
                true
            }
            KeyCode::Right => {
                self.move_cursor_right();
                true
            }
            KeyCode::Home => {
                self.move_cursor_to_start();
                true
            }
            KeyCode::End => {
                self.move_cursor_to_end();
                true
            }
            KeyCode::Enter
            | KeyCode::Esc
            | KeyCode::Up
            | KeyCode::Down
            | KeyCode::PageUp
            | KeyCode::PageDown
            | KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Insert
            | KeyCode::F(_)
            | KeyCode::Null
            | KeyCode::CapsLock
            | KeyCode::ScrollLock
            | KeyCode::NumLock
            | KeyCode::PrintScreen
            | KeyCode::Pause
            | KeyCode::Menu
            | KeyCode::KeypadBegin
            | KeyCode::Media(_)
            | KeyCode::Modifier(_) => false,
        }
    }

    /// Inserts pasted text at the cursor as a single replacement; line breaks are dropped
    pub fn handle_paste(&mut self, pasted: &str) -> bool {
        if !self.is_focused() {
            return false;
        }
        let single_line: String = pasted.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
        self.insert_str(&single_line)
    }
}

#[cfg(test)]
mod tests {
    use crate::animation::ImmediateAnimator;
    use crate::assets::{BundledAssets, Icon};
    use crate::field::{DEFAULT_HEIGHT, FloatingLabelTextField};
    use crate::layout::ConstraintLayout;
    use crate::style::FieldStyle;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn focused_field() -> FloatingLabelTextField {
        let mut field = FloatingLabelTextField::with_collaborators(
            "Keys",
            Some(DEFAULT_HEIGHT),
            FieldStyle::default(),
            Box::new(ConstraintLayout::new()),
            Box::new(ImmediateAnimator),
            &BundledAssets::new(),
        );
        field.focus();
        field
    }

    fn press(field: &mut FloatingLabelTextField, code: KeyCode) -> bool {
        field.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_typing_and_cursor_keys() {
        let mut field = focused_field();
        press(&mut field, KeyCode::Char('a'));
        press(&mut field, KeyCode::Char('c'));
        press(&mut field, KeyCode::Left);
        press(&mut field, KeyCode::Char('b'));
        assert_eq!(field.text(), "abc");

        press(&mut field, KeyCode::Home);
        press(&mut field, KeyCode::Delete);
        assert_eq!(field.text(), "bc");
        press(&mut field, KeyCode::End);
        press(&mut field, KeyCode::Backspace);
        assert_eq!(field.text(), "b");
    }

    #[test]
    fn test_unfocused_field_ignores_keys() {
        let mut field = focused_field();
        field.blur();
        assert!(!press(&mut field, KeyCode::Char('a')));
        assert_eq!(field.text(), "");
    }

    #[test]
    fn test_navigation_keys_not_consumed() {
        let mut field = focused_field();
        assert!(!press(&mut field, KeyCode::Tab));
        assert!(!press(&mut field, KeyCode::Esc));
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut field = focused_field();
        field.insert_str("abc");
        let consumed = field.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert!(consumed);
        assert_eq!(field.text(), "");
    }

    #[test]
    fn test_ctrl_e_taps_icon() {
        let mut field = focused_field();
        field.set_secure(true);
        let key = KeyEvent::new(KeyCode::Char('e'), KeyModifiers::CONTROL);
        assert!(!field.handle_key(key));

        field.set_right_icon(Some(Icon::new("◉")));
        assert!(field.handle_key(key));
        assert!(!field.is_masking());
    }

    #[test]
    fn test_paste_drops_line_breaks_and_respects_limit() {
        let mut field = focused_field();
        field.set_limit_character(4);
        assert!(field.handle_paste("ab\ncd"));
        assert_eq!(field.text(), "abcd");
        assert!(!field.handle_paste("e"));
    }
}
