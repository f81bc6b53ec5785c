//! Editable text buffer for form fields
//!
//! Cursor is a byte offset that always sits on a char boundary. Display
//! columns are computed with `unicode-width` so the terminal cursor lines up
//! with wide characters.

use crate::a11y::{Handled, Interactive};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: String,
    cursor: usize,
    multiline: bool,
}

impl TextInput {
    pub fn single_line() -> Self {
        Self::default()
    }

    pub fn multi_line() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    /// Replace the content; cursor moves to the end
    #[cfg(test)]
    pub fn set_value(&mut self, value: &str) {
        self.value = if self.multiline {
            value.to_string()
        } else {
            value.replace('\n', " ")
        };
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        if c == '\n' && !self.multiline {
            return;
        }
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.value.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.value.replace_range(self.cursor..next, "");
        }
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
        self.cursor = self.line_end();
    }

    /// Previous line, keeping the char column where possible
    pub fn move_up(&mut self) {
        let start = self.line_start();
        if start == 0 {
            return;
        }
        let column = self.value[start..self.cursor].chars().count();
        let prev_end = start - 1;
        let prev_start = self.value[..prev_end].rfind('\n').map_or(0, |i| i + 1);
        self.cursor = Self::offset_for_column(&self.value, prev_start, prev_end, column);
    }

    /// Next line, keeping the char column where possible
    pub fn move_down(&mut self) {
        let end = self.line_end();
        if end == self.value.len() {
            return;
        }
        let column = self.value[self.line_start()..self.cursor].chars().count();
        let next_start = end + 1;
        let next_end = self.value[next_start..]
            .find('\n')
            .map_or(self.value.len(), |i| next_start + i);
        self.cursor = Self::offset_for_column(&self.value, next_start, next_end, column);
    }

    /// Cursor as (line, display column)
    pub fn cursor_position(&self) -> (usize, usize) {
        let before = &self.value[..self.cursor];
        let row = before.matches('\n').count();
        let line = &before[self.line_start()..];
        (row, line.width())
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.value.split('\n')
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.value[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }

    fn line_start(&self) -> usize {
        self.value[..self.cursor].rfind('\n').map_or(0, |i| i + 1)
    }

    fn line_end(&self) -> usize {
        self.value[self.cursor..]
            .find('\n')
            .map_or(self.value.len(), |i| self.cursor + i)
    }

    fn offset_for_column(value: &str, start: usize, end: usize, column: usize) -> usize {
        value[start..end]
            .char_indices()
            .nth(column)
            .map_or(end, |(i, _)| start + i)
    }
}

impl Interactive for TextInput {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return Handled::No;
        }

        match key.code {
            KeyCode::Char(c) => self.insert_char(c),
            // Single-line Enter bubbles up to the form (implicit submit)
            KeyCode::Enter if self.multiline => self.insert_char('\n'),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            KeyCode::Up if self.multiline => self.move_up(),
            KeyCode::Down if self.multiline => self.move_down(),
            _ => return Handled::No,
        }
        Handled::Yes
    }

    fn focus_hint(&self) -> Option<&'static str> {
        if self.multiline {
            Some("type to edit  Enter:new line  Tab:next field")
        } else {
            Some("type to edit  Enter:send request  Tab:next field")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(input: &mut TextInput, s: &str) {
        for c in s.chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_and_backspace() {
        let mut input = TextInput::single_line();
        type_str(&mut input, "Adda");
        input.handle_key(key(KeyCode::Backspace));
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.value(), "Ad");

        input.handle_key(key(KeyCode::End));
        type_str(&mut input, "a");
        assert_eq!(input.value(), "Ada");
    }

    #[test]
    fn multibyte_cursor_moves_by_char() {
        let mut input = TextInput::single_line();
        type_str(&mut input, "日本");
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Delete));
        assert_eq!(input.value(), "日");
        // Wide character occupies two columns
        assert_eq!(input.cursor_position(), (0, 2));
    }

    #[test]
    fn enter_bubbles_on_single_line() {
        let mut input = TextInput::single_line();
        assert_eq!(input.handle_key(key(KeyCode::Enter)), Handled::No);
        assert_eq!(input.value(), "");
    }

    #[test]
    fn enter_inserts_newline_on_multi_line() {
        let mut input = TextInput::multi_line();
        type_str(&mut input, "hi");
        assert_eq!(input.handle_key(key(KeyCode::Enter)), Handled::Yes);
        type_str(&mut input, "there");
        assert_eq!(input.lines().collect::<Vec<_>>(), vec!["hi", "there"]);
        assert_eq!(input.cursor_position(), (1, 5));
    }

    #[test]
    fn vertical_movement_keeps_column() {
        let mut input = TextInput::multi_line();
        input.set_value("abcdef\nxy\nlonger line");
        input.move_up();
        assert_eq!(input.cursor_position(), (1, 2));
        input.move_up();
        assert_eq!(input.cursor_position(), (0, 2));
        input.move_down();
        input.move_down();
        assert_eq!(input.cursor_position(), (2, 2));
    }

    #[test]
    fn control_chords_are_not_text() {
        let mut input = TextInput::single_line();
        let chord = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(input.handle_key(chord), Handled::No);
        assert_eq!(input.value(), "");
    }

    #[test]
    fn single_line_rejects_newlines() {
        let mut input = TextInput::single_line();
        input.set_value("a\nb");
        input.insert_char('\n');
        assert_eq!(input.value(), "a b");
    }
}
