//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::date_format::DateFormatPreference;
use crate::editable::InputMsg;
use crate::model::FieldId;
use crate::persistence::PersistError;

/// Events for a single field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldMsg {
    /// Click/focus on the displayed value
    Activate,
    /// Keystroke in a text, number or date input
    Input(InputMsg),
    /// Replace the pending value wholesale (paste, picker, scripted change)
    SetValue(String),
    /// Choose option `n` of a choice widget (its change event)
    Select(usize),
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// The input lost focus
    Blur,
    /// The save started by the last commit finished
    SaveCompleted(Result<(), PersistError>),
}

/// Page-wide events
#[derive(Debug, Clone, PartialEq)]
pub enum PageMsg {
    /// The user changed the date display preference
    SetDateFormat(DateFormatPreference),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Field { id: FieldId, msg: FieldMsg },
    Page(PageMsg),
}

impl Msg {
    pub fn field(id: FieldId, msg: FieldMsg) -> Self {
        Msg::Field { id, msg }
    }
}
