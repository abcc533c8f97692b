//! Multi-line text input for the source pane
//!
//! The cursor is a byte offset into `text` that always sits on a char
//! boundary. Rendering needs a (column, row) position, which is computed with
//! display widths so wide glyphs line up.

use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Default)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters (not bytes)
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert a pasted block, normalizing CRLF
    pub fn insert_str(&mut self, s: &str) {
        let normalized = s.replace("\r\n", "\n").replace('\r', "\n");
        self.text.insert_str(self.cursor, &normalized);
        self.cursor += normalized.len();
    }

    pub fn newline(&mut self) {
        self.insert_char('\n');
    }

    /// Delete the char before the cursor. Returns false if nothing changed.
    pub fn backspace(&mut self) -> bool {
        let Some(prev) = self.prev_boundary() else {
            return false;
        };
        self.text.drain(prev..self.cursor);
        self.cursor = prev;
        true
    }

    /// Delete the char under the cursor. Returns false if nothing changed.
    pub fn delete(&mut self) -> bool {
        let Some(next) = self.next_boundary() else {
            return false;
        };
        self.text.drain(self.cursor..next);
        true
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    /// Start of the current line
    pub fn move_home(&mut self) {
        self.cursor = self.line_start();
    }

    /// End of the current line
    pub fn move_end(&mut self) {
        self.cursor = self.text[self.cursor..]
            .find('\n')
            .map(|offset| self.cursor + offset)
            .unwrap_or(self.text.len());
    }

    /// Cursor as (display column, row) relative to the top-left of the text
    pub fn cursor_position(&self) -> (u16, u16) {
        let before = &self.text[..self.cursor];
        let row = before.matches('\n').count();
        let column = before[self.line_start()..].width();
        (column as u16, row as u16)
    }

    fn line_start(&self) -> usize {
        self.text[..self.cursor]
            .rfind('\n')
            .map(|pos| pos + 1)
            .unwrap_or(0)
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(idx, _)| idx)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> TextInput {
        let mut input = TextInput::new();
        for c in s.chars() {
            input.insert_char(c);
        }
        input
    }

    #[test]
    fn editing_in_the_middle() {
        let mut input = typed("Act");
        input.move_left();
        input.move_left();
        input.insert_char('x');
        assert_eq!(input.text(), "Axct");

        assert!(input.backspace());
        assert!(input.delete());
        assert_eq!(input.text(), "At");
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut input = typed("a");
        input.move_home();
        assert!(!input.backspace());
        assert_eq!(input.text(), "a");
    }

    #[test]
    fn multibyte_and_multiline_cursor() {
        let mut input = typed("धारा 438");
        input.newline();
        input.insert_char('§');
        assert_eq!(input.char_count(), 10);
        assert_eq!(input.cursor_position(), (1, 1));

        input.move_left();
        input.move_left();
        input.move_home();
        assert_eq!(input.cursor_position(), (0, 0));
        input.move_end();
        assert_eq!(input.cursor_position().1, 0);

        assert!(input.backspace());
        assert_eq!(input.text(), "धारा 43\n§");
    }

    #[test]
    fn paste_normalizes_line_endings() {
        let mut input = TextInput::new();
        input.insert_str("first\r\nsecond");
        assert_eq!(input.text(), "first\nsecond");
        assert_eq!(input.cursor_position(), (6, 1));
    }
}
