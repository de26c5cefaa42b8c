//! Message types for single-line field inputs.

/// Editing operations on the active input of a field.
#[derive(Debug, Clone, PartialEq)]
pub enum InputMsg {
    // === Movement ===
    /// Move one character left
    CursorLeft,
    /// Move one character right
    CursorRight,
    /// Move to start of input
    CursorHome,
    /// Move to end of input
    CursorEnd,

    // === Insertion ===
    /// Insert a single character
    InsertChar(char),
    /// Insert a string (e.g., from paste)
    InsertText(String),

    // === Deletion ===
    /// Delete character before cursor (Backspace)
    DeleteBackward,
    /// Delete character after cursor (Delete)
    DeleteForward,

    // === Selection ===
    /// Select all text; the next insertion replaces it
    SelectAll,
}

impl InputMsg {
    /// Check if this message modifies the buffer
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            InputMsg::InsertChar(_)
                | InputMsg::InsertText(_)
                | InputMsg::DeleteBackward
                | InputMsg::DeleteForward
        )
    }
}
