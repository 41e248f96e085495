//! Single-line text input.
//!
//! Used as the editor of text cells and as the buffer behind the date
//! editor. The cursor is a character index, so multi-byte input is safe.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::theme;

/// A single-line text input.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// The current value.
    value: String,
    /// Cursor position, in characters.
    cursor: usize,
    /// Placeholder text shown when empty.
    placeholder: String,
    /// Maximum number of characters, if limited.
    max_len: Option<usize>,
}

impl TextInput {
    /// Create a new empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input with an initial value, cursor at the end.
    pub fn with_value(value: impl Into<String>) -> Self {
        let mut input = Self::new();
        input.set_value(value);
        input
    }

    /// Limit the number of characters.
    pub fn set_max_len(&mut self, max_len: usize) {
        self.max_len = Some(max_len);
    }

    /// Set the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    /// Get the current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the value and move the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.char_count();
    }

    /// Clear the input.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Check if the input is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Get the cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Handle keyboard input.
    ///
    /// Returns true if the value was modified.
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                if self.value.is_empty() {
                    return false;
                }
                self.clear();
                true
            }
            (KeyCode::Char('w'), KeyModifiers::CONTROL) => self.delete_word(),
            (KeyCode::Char('a'), KeyModifiers::CONTROL) | (KeyCode::Home, _) => {
                self.cursor = 0;
                false
            }
            (KeyCode::Char('e'), KeyModifiers::CONTROL) | (KeyCode::End, _) => {
                self.cursor = self.char_count();
                false
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => self.insert_char(c),
            (KeyCode::Backspace, _) => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor -= 1;
                let at = self.byte_index(self.cursor);
                self.value.remove(at);
                true
            }
            (KeyCode::Delete, _) => {
                if self.cursor >= self.char_count() {
                    return false;
                }
                let at = self.byte_index(self.cursor);
                self.value.remove(at);
                true
            }
            (KeyCode::Left, KeyModifiers::NONE) => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            (KeyCode::Right, KeyModifiers::NONE) => {
                self.cursor = (self.cursor + 1).min(self.char_count());
                false
            }
            _ => false,
        }
    }

    /// Render the input inline (no border), e.g. inside a table cell.
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let t = theme();
        let line = if self.value.is_empty() && !self.placeholder.is_empty() {
            Line::from(Span::styled(
                self.placeholder.clone(),
                Style::default().fg(t.input_placeholder),
            ))
        } else {
            let mut style = Style::default().fg(t.input_fg);
            if focused {
                style = style.fg(t.accent).add_modifier(Modifier::UNDERLINED);
            }
            Line::from(Span::styled(self.value.clone(), style))
        };
        frame.render_widget(Paragraph::new(line), area);

        if focused && area.width > 0 {
            let cursor_x = area.x + self.cursor as u16;
            if cursor_x < area.x + area.width {
                frame.set_cursor_position(Position::new(cursor_x, area.y));
            }
        }
    }

    fn insert_char(&mut self, c: char) -> bool {
        if self.max_len.is_some_and(|max| self.char_count() >= max) {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
        true
    }

    fn delete_word(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let chars: Vec<char> = self.value.chars().collect();
        let mut start = self.cursor;
        while start > 0 && !chars[start - 1].is_alphanumeric() {
            start -= 1;
        }
        while start > 0 && chars[start - 1].is_alphanumeric() {
            start -= 1;
        }
        let from = self.byte_index(start);
        let to = self.byte_index(self.cursor);
        self.value.replace_range(from..to, "");
        self.cursor = start;
        true
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_with_value() {
        let input = TextInput::with_value("hello");
        assert_eq!(input.value(), "hello");
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn test_character_input() {
        let mut input = TextInput::new();
        assert!(input.handle_input(key(KeyCode::Char('a'))));
        assert!(input.handle_input(KeyEvent::new(KeyCode::Char('B'), KeyModifiers::SHIFT)));
        assert_eq!(input.value(), "aB");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = TextInput::with_value("abc");
        assert!(input.handle_input(key(KeyCode::Backspace)));
        assert_eq!(input.value(), "ab");

        input.handle_input(key(KeyCode::Home));
        assert!(input.handle_input(key(KeyCode::Delete)));
        assert_eq!(input.value(), "b");

        input.handle_input(key(KeyCode::End));
        assert!(!input.handle_input(key(KeyCode::Delete)));
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = TextInput::with_value("abc");
        input.handle_input(key(KeyCode::Home));
        assert!(!input.handle_input(key(KeyCode::Backspace)));
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::with_value("José");
        assert!(input.handle_input(key(KeyCode::Backspace)));
        assert_eq!(input.value(), "Jos");
        input.handle_input(key(KeyCode::Left));
        input.handle_input(key(KeyCode::Char('ø')));
        assert_eq!(input.value(), "Joøs");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::with_value("ab");
        input.handle_input(key(KeyCode::Right));
        assert_eq!(input.cursor(), 2);
        input.handle_input(key(KeyCode::Left));
        input.handle_input(key(KeyCode::Left));
        input.handle_input(key(KeyCode::Left));
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut input = TextInput::with_value("hello");
        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert!(input.handle_input(ctrl_u));
        assert!(input.is_empty());
        assert!(!input.handle_input(ctrl_u));
    }

    #[test]
    fn test_ctrl_w_deletes_word() {
        let mut input = TextInput::with_value("hello world");
        let ctrl_w = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL);
        assert!(input.handle_input(ctrl_w));
        assert_eq!(input.value(), "hello ");
        assert!(input.handle_input(ctrl_w));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_max_len() {
        let mut input = TextInput::with_value("ab");
        input.set_max_len(3);
        assert!(input.handle_input(key(KeyCode::Char('c'))));
        assert!(!input.handle_input(key(KeyCode::Char('d'))));
        assert_eq!(input.value(), "abc");
    }
}
