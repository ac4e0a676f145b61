//! Single-line text buffer with a character cursor, shared by the search bar and the go-to dialog.

use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Default)]
pub struct TextInput {
    buffer: String,
    cursor_position: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor_position = 0;
    }

    pub fn set(&mut self, value: &str) {
        self.buffer = value.to_string();
        self.cursor_position = value.chars().count();
    }

    fn byte_position(&self) -> usize {
        self.buffer
            .chars()
            .take(self.cursor_position)
            .map(|ch| ch.len_utf8())
            .sum()
    }

    pub fn insert(&mut self, c: char) {
        let byte_pos = self.byte_position();
        self.buffer.insert(byte_pos, c);
        self.cursor_position += 1;
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor_position == 0 {
            return false;
        }
        self.cursor_position -= 1;
        let byte_pos = self.byte_position();
        self.buffer.remove(byte_pos);
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor_position >= self.buffer.chars().count() {
            return false;
        }
        let byte_pos = self.byte_position();
        self.buffer.remove(byte_pos);
        true
    }

    /// Apply an editing key. Returns `true` when the key was an editing key.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                self.insert(c);
                true
            }
            KeyCode::Backspace => {
                self.backspace();
                true
            }
            KeyCode::Delete => {
                self.delete();
                true
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                if self.cursor_position < self.buffer.chars().count() {
                    self.cursor_position += 1;
                }
                true
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                true
            }
            KeyCode::End => {
                self.cursor_position = self.buffer.chars().count();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_editing_multibyte_text() {
        let mut input = TextInput::new();
        for c in "café".chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(input.value(), "café");

        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.value(), "caé");
        assert_eq!(input.cursor_position(), 2);

        input.handle_key(key(KeyCode::Delete));
        assert_eq!(input.value(), "ca");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = TextInput::new();
        assert!(!input.backspace());
        input.set("ab");
        input.handle_key(key(KeyCode::Home));
        assert!(!input.backspace());
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn test_non_editing_keys_are_not_consumed() {
        let mut input = TextInput::new();
        assert!(!input.handle_key(key(KeyCode::Enter)));
        assert!(!input.handle_key(key(KeyCode::Esc)));
    }
}
