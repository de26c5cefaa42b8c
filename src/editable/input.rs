//! Single-line input buffer backing text, number and date widgets.

use super::constraints::EditConstraints;
use super::messages::InputMsg;

/// Editable single-line input with a character cursor.
///
/// The cursor is a character index (not a byte offset) in `0..=len_chars`.
/// `all_selected` models a select-all: the next insertion or deletion
/// replaces the whole value.
#[derive(Debug, Clone)]
pub struct InputState {
    text: String,
    cursor: usize,
    all_selected: bool,
    constraints: EditConstraints,
}

impl InputState {
    /// Create an input seeded with `value`, cursor at the end
    pub fn new(value: &str, constraints: EditConstraints) -> Self {
        Self {
            text: value.to_string(),
            cursor: value.chars().count(),
            all_selected: false,
            constraints,
        }
    }

    /// Current input content
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position as a character index
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn has_selection(&self) -> bool {
        self.all_selected && !self.text.is_empty()
    }

    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    /// Apply an editing message. Returns true if the input changed.
    pub fn apply(&mut self, msg: &InputMsg) -> bool {
        match msg {
            InputMsg::CursorLeft => self.move_left(),
            InputMsg::CursorRight => self.move_right(),
            InputMsg::CursorHome => self.move_home(),
            InputMsg::CursorEnd => self.move_end(),
            InputMsg::InsertChar(ch) => self.insert_char(*ch),
            InputMsg::InsertText(text) => self.insert_text(text),
            InputMsg::DeleteBackward => self.delete_backward(),
            InputMsg::DeleteForward => self.delete_forward(),
            InputMsg::SelectAll => self.select_all(),
        }
    }

    /// Replace the whole value, bypassing per-key constraints
    pub fn set_text(&mut self, value: &str) {
        self.text = value.to_string();
        self.cursor = self.len_chars();
        self.all_selected = false;
    }

    pub fn move_left(&mut self) -> bool {
        self.all_selected = false;
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn move_right(&mut self) -> bool {
        self.all_selected = false;
        if self.cursor >= self.len_chars() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn move_home(&mut self) -> bool {
        self.all_selected = false;
        let moved = self.cursor != 0;
        self.cursor = 0;
        moved
    }

    pub fn move_end(&mut self) -> bool {
        self.all_selected = false;
        let end = self.len_chars();
        let moved = self.cursor != end;
        self.cursor = end;
        moved
    }

    pub fn select_all(&mut self) -> bool {
        self.all_selected = true;
        self.cursor = self.len_chars();
        false
    }

    /// Insert a character at the cursor
    /// Returns true if the character was inserted, false if rejected by constraints
    pub fn insert_char(&mut self, ch: char) -> bool {
        if !self.constraints.is_char_allowed(ch) {
            return false;
        }
        let current_len = if self.has_selection() {
            0
        } else {
            self.len_chars()
        };
        if self.constraints.would_exceed_max_length(current_len, 1) {
            return false;
        }

        self.take_selection();
        let offset = self.byte_offset(self.cursor);
        self.text.insert(offset, ch);
        self.cursor += 1;
        true
    }

    /// Insert text at the cursor
    /// Returns true if the text was inserted; rejected as a whole if any
    /// character fails the filter or the result would be too long
    pub fn insert_text(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        if !text.chars().all(|c| self.constraints.is_char_allowed(c)) {
            return false;
        }
        let current_len = if self.has_selection() {
            0
        } else {
            self.len_chars()
        };
        if self
            .constraints
            .would_exceed_max_length(current_len, text.chars().count())
        {
            return false;
        }

        self.take_selection();
        let offset = self.byte_offset(self.cursor);
        self.text.insert_str(offset, text);
        self.cursor += text.chars().count();
        true
    }

    /// Delete character before cursor (Backspace)
    pub fn delete_backward(&mut self) -> bool {
        if self.take_selection() {
            return true;
        }
        if self.cursor == 0 {
            return false;
        }
        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
        true
    }

    /// Delete character after cursor (Delete key)
    pub fn delete_forward(&mut self) -> bool {
        if self.take_selection() {
            return true;
        }
        if self.cursor >= self.len_chars() {
            return false;
        }
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.text.replace_range(start..end, "");
        true
    }

    /// Clear the text if everything is selected. Returns true if it did.
    fn take_selection(&mut self) -> bool {
        let had = self.has_selection();
        if had {
            self.text.clear();
            self.cursor = 0;
        }
        self.all_selected = false;
        had
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_puts_cursor_at_end() {
        let input = InputState::new("héllo", EditConstraints::free_text());
        assert_eq!(input.cursor(), 5);
        assert_eq!(input.text(), "héllo");
    }

    #[test]
    fn test_insert_and_delete_multibyte() {
        let mut input = InputState::new("ab", EditConstraints::free_text());
        input.move_left();
        assert!(input.insert_char('é'));
        assert_eq!(input.text(), "aéb");
        assert!(input.delete_backward());
        assert_eq!(input.text(), "ab");
        assert!(input.delete_forward());
        assert_eq!(input.text(), "a");
        assert!(!input.delete_forward());
    }

    #[test]
    fn test_select_all_replaces_on_type() {
        let mut input = InputState::new("42", EditConstraints::free_text());
        input.apply(&InputMsg::SelectAll);
        assert!(input.has_selection());
        input.apply(&InputMsg::InsertChar('7'));
        assert_eq!(input.text(), "7");
        assert!(!input.has_selection());
    }

    #[test]
    fn test_date_constraints_reject_keys() {
        let mut input = InputState::new("2025-11-1", EditConstraints::iso_date());
        assert!(!input.insert_char('/'));
        assert!(input.insert_char('2'));
        assert!(!input.insert_char('3'));
        assert_eq!(input.text(), "2025-11-12");
    }

    #[test]
    fn test_insert_text_is_all_or_nothing() {
        let mut input = InputState::new("", EditConstraints::iso_date());
        assert!(!input.insert_text("12/11/2025"));
        assert_eq!(input.text(), "");
        assert!(input.insert_text("2025-11-12"));
        assert_eq!(input.cursor(), 10);
    }

    #[test]
    fn test_set_text_bypasses_constraints() {
        let mut input = InputState::new("", EditConstraints::iso_date());
        input.set_text("not a date");
        assert_eq!(input.text(), "not a date");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = InputState::new("x", EditConstraints::free_text());
        assert!(!input.move_right());
        assert!(input.move_home());
        assert!(!input.move_left());
        assert!(input.move_end());
    }
}
