use std::ops::Range;

/// Glyph shown for every character while masking is on
pub const MASK_GLYPH: char = '•';

/// The wrapped text-entry control: content, cursor, focus and masking.
///
/// Edits are expressed as replacements over a character range so the owning
/// field can vet them before they are committed.
#[derive(Debug, Clone, Default)]
pub struct TextEntry {
    content: String,
    cursor_index: usize,
    focused: bool,
    secure: bool,
}

impl TextEntry {
    /// Creates a new empty text entry
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a text entry with initial content, cursor at the end
    pub fn with_content(content: String) -> Self {
        let cursor_index = content.chars().count();
        Self {
            content,
            cursor_index,
            ..Self::default()
        }
    }

    /// Gets the current content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of characters in the content
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Checks if the entry is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns cursor position in characters
    pub fn cursor_position(&self) -> usize {
        self.cursor_index
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Whether characters are masked on screen
    pub fn is_secure(&self) -> bool {
        self.secure
    }

    pub fn set_secure(&mut self, secure: bool) {
        self.secure = secure;
    }

    /// Sets the content directly, cursor at the end
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.cursor_index = self.content.chars().count();
    }

    /// Clears the entry
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor_index = 0;
    }

    /// Text as it should be drawn
    pub fn display_text(&self) -> String {
        if self.secure {
            std::iter::repeat_n(MASK_GLYPH, self.char_count()).collect()
        } else {
            self.content.clone()
        }
    }

    /// Clamps a character range to the current content
    pub fn clamp_range(&self, range: Range<usize>) -> Range<usize> {
        let length = self.char_count();
        let end = range.end.min(length);
        range.start.min(end)..end
    }

    /// Range replaced by typing at the cursor
    pub fn insertion_range(&self) -> Range<usize> {
        self.cursor_index..self.cursor_index
    }

    /// Range removed by backspace, if any
    pub fn backspace_range(&self) -> Option<Range<usize>> {
        (self.cursor_index > 0).then(|| self.cursor_index - 1..self.cursor_index)
    }

    /// Range removed by delete, if any
    pub fn delete_range(&self) -> Option<Range<usize>> {
        (self.cursor_index < self.char_count()).then(|| self.cursor_index..self.cursor_index + 1)
    }

    /// Replaces a character range and leaves the cursor after the inserted text
    pub fn replace(&mut self, range: Range<usize>, replacement: &str) {
        let range = self.clamp_range(range);
        let start_index = char_to_byte_index(&self.content, range.start);
        let end_index = char_to_byte_index(&self.content, range.end);
        self.content.replace_range(start_index..end_index, replacement);
        self.cursor_index = range.start + replacement.chars().count();
    }

    /// Moves cursor left by one character
    pub fn move_left(&mut self) {
        self.cursor_index = self.cursor_index.saturating_sub(1);
    }

    /// Moves cursor right by one character
    pub fn move_right(&mut self) {
        if self.cursor_index < self.char_count() {
            self.cursor_index += 1;
        }
    }

    /// Moves cursor to the start of the entry
    pub fn move_to_start(&mut self) {
        self.cursor_index = 0;
    }

    /// Moves cursor to the end of the entry
    pub fn move_to_end(&mut self) {
        self.cursor_index = self.char_count();
    }
}

impl From<&str> for TextEntry {
    fn from(content: &str) -> Self {
        Self::with_content(content.to_string())
    }
}

fn char_to_byte_index(value: &str, char_index: usize) -> usize {
    value
        .char_indices()
        .nth(char_index)
        .map_or_else(|| value.len(), |(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_inserts_at_range() {
        let mut entry = TextEntry::from("hllo");
        entry.replace(1..1, "e");
        assert_eq!(entry.content(), "hello");
        assert_eq!(entry.cursor_position(), 2);
    }

    #[test]
    fn test_replace_multibyte() {
        let mut entry = TextEntry::from("žluť");
        entry.replace(1..3, "ab");
        assert_eq!(entry.content(), "žabť");
    }

    #[test]
    fn test_out_of_bounds_range_is_clamped() {
        let mut entry = TextEntry::from("abc");
        entry.replace(10..20, "d");
        assert_eq!(entry.content(), "abcd");
        assert_eq!(entry.clamp_range(5..2), 2..2);
    }

    #[test]
    fn test_edit_ranges_follow_cursor() {
        let mut entry = TextEntry::from("ab");
        assert_eq!(entry.backspace_range(), Some(1..2));
        assert_eq!(entry.delete_range(), None);
        entry.move_to_start();
        assert_eq!(entry.backspace_range(), None);
        assert_eq!(entry.delete_range(), Some(0..1));
        entry.move_right();
        assert_eq!(entry.insertion_range(), 1..1);
    }

    #[test]
    fn test_display_text_masks_when_secure() {
        let mut entry = TextEntry::from("pw1");
        assert_eq!(entry.display_text(), "pw1");
        entry.set_secure(true);
        assert_eq!(entry.display_text(), "•••");
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut entry = TextEntry::from("abc");
        entry.clear();
        assert!(entry.is_empty());
        assert_eq!(entry.cursor_position(), 0);
    }
}
