//! Input constraints for field edit widgets.
//!
//! Constraints define what keystrokes a widget accepts. They only gate
//! per-key input; wholesale value replacement (paste, picker) is judged by
//! the validator at commit time instead.

/// Character filter function type
pub type CharFilter = fn(char) -> bool;

/// Constraints that limit what a single-line input accepts.
#[derive(Debug, Clone)]
pub struct EditConstraints {
    /// Maximum length in characters (None = unlimited)
    pub max_length: Option<usize>,

    /// Character filter (None = all characters allowed)
    /// Returns true if character is allowed
    pub char_filter: Option<CharFilter>,
}

impl Default for EditConstraints {
    fn default() -> Self {
        Self::free_text()
    }
}

impl EditConstraints {
    /// Free text entry (text and number widgets)
    ///
    /// Number entry takes any character; malformed numbers are reported at
    /// commit.
    pub fn free_text() -> Self {
        Self {
            max_length: None,
            char_filter: None,
        }
    }

    /// ISO date entry (`YYYY-MM-DD`)
    pub fn iso_date() -> Self {
        Self {
            max_length: Some(10),
            char_filter: Some(|c| c.is_ascii_digit() || c == '-'),
        }
    }

    /// Check if a character passes the filter (if any)
    ///
    /// Line breaks are never allowed: every widget is single-line.
    pub fn is_char_allowed(&self, ch: char) -> bool {
        if ch == '\n' || ch == '\r' {
            return false;
        }
        match self.char_filter {
            Some(filter) => filter(ch),
            None => true,
        }
    }

    /// Check if inserting text would exceed max length
    pub fn would_exceed_max_length(&self, current_len: usize, insert_len: usize) -> bool {
        if let Some(max) = self.max_length {
            current_len + insert_len > max
        } else {
            false
        }
    }
}
