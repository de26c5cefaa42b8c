//! State of a single inline editable field
//!
//! A field is either showing its value (`Display`) or being edited
//! (`Editing`), never both. Every transition goes through a method here so
//! the pre-edit value is captured exactly once per activation.

use crate::date_format::{parse_iso_date, DateFormatPreference};
use crate::editable::{EditConstraints, InputMsg, InputState};
use crate::field::{validate, FieldKey, FieldKind, Verdict, BOOLEAN_OPTIONS};

/// A value as the renderer shows it.
///
/// `raw` is the stored form (ISO for dates), `text` the formatted display.
/// They differ only for dates committed in this session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayValue {
    pub raw: String,
    pub text: String,
}

impl DisplayValue {
    /// A value displayed exactly as stored
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            raw: value.clone(),
            text: value,
        }
    }

    /// A freshly committed value, formatted for display
    pub fn committed(kind: FieldKind, value: &str, date_format: DateFormatPreference) -> Self {
        match kind {
            FieldKind::Date => Self {
                raw: value.to_string(),
                text: date_format
                    .format_iso(value)
                    .unwrap_or_else(|| value.to_string()),
            },
            _ => Self::plain(value),
        }
    }
}

/// HTML-style input type of a text-backed widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Number,
    Date,
}

impl InputType {
    pub fn name(self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Number => "number",
            InputType::Date => "date",
        }
    }
}

/// The control shown while a field is being edited
#[derive(Debug, Clone)]
pub enum Widget {
    /// Free entry backed by an input buffer
    Input {
        input_type: InputType,
        input: InputState,
    },
    /// Exclusive choice. `value` is normally one of `options`, but may be
    /// anything when set programmatically.
    Choice {
        options: Vec<String>,
        value: Option<String>,
    },
}

impl Widget {
    /// Build the widget for `kind`, seeded from the pre-edit text
    pub fn for_kind(kind: FieldKind, options: &[String], seed: &str) -> Self {
        match kind {
            FieldKind::Boolean => Widget::Choice {
                options: BOOLEAN_OPTIONS.iter().map(|o| o.to_string()).collect(),
                value: BOOLEAN_OPTIONS
                    .iter()
                    .find(|o| **o == seed)
                    .map(|o| o.to_string()),
            },
            FieldKind::Enumerated => Widget::Choice {
                options: options.to_vec(),
                value: options
                    .iter()
                    .find(|o| o.as_str() == seed)
                    .or_else(|| options.first())
                    .cloned(),
            },
            FieldKind::Number => Widget::Input {
                input_type: InputType::Number,
                input: InputState::new(seed, EditConstraints::free_text()),
            },
            FieldKind::Date => Widget::Input {
                input_type: InputType::Date,
                input: InputState::new(seed, EditConstraints::iso_date()),
            },
            FieldKind::Text => Widget::Input {
                input_type: InputType::Text,
                input: InputState::new(seed, EditConstraints::free_text()),
            },
        }
    }

    /// The value a commit would submit
    pub fn pending_value(&self) -> &str {
        match self {
            Widget::Input { input, .. } => input.text(),
            Widget::Choice { value, .. } => value.as_deref().unwrap_or(""),
        }
    }

    /// Index of the chosen option, if the value is one of them
    pub fn selected_index(&self) -> Option<usize> {
        match self {
            Widget::Choice { options, value } => {
                let value = value.as_deref()?;
                options.iter().position(|o| o == value)
            }
            Widget::Input { .. } => None,
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self, Widget::Choice { .. })
    }

    /// Replace the pending value wholesale
    pub fn set_value(&mut self, new_value: &str) {
        match self {
            Widget::Input { input, .. } => input.set_text(new_value),
            Widget::Choice { value, .. } => *value = Some(new_value.to_string()),
        }
    }
}

/// An active edit
#[derive(Debug, Clone)]
pub struct EditSession {
    /// What the renderer showed when the session began
    pub original: DisplayValue,
    pub widget: Widget,
    /// Message of the last rejected commit, cleared by the next edit
    pub error: Option<String>,
}

/// Presentation state of a field
#[derive(Debug, Clone)]
pub enum FieldState {
    Display {
        value: DisplayValue,
        /// Value to restore if the in-flight save fails; None when idle
        rollback: Option<DisplayValue>,
    },
    Editing(EditSession),
}

/// Result of a commit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Value accepted and shown optimistically; it must now be saved
    Submitted(String),
    /// Edit discarded, pre-edit value restored
    Aborted,
    /// Edit kept open with an error
    Rejected(String),
    /// Not editing; nothing happened
    Ignored,
}

/// One editable value on a page
#[derive(Debug, Clone)]
pub struct EditableField {
    pub key: FieldKey,
    pub kind: FieldKind,
    /// Permitted values, only meaningful for [`FieldKind::Enumerated`]
    pub options: Vec<String>,
    pub state: FieldState,
}

impl EditableField {
    pub fn new(key: impl Into<FieldKey>, kind: FieldKind, initial: &str) -> Self {
        Self {
            key: key.into(),
            kind,
            options: Vec::new(),
            state: FieldState::Display {
                value: DisplayValue::plain(initial),
                rollback: None,
            },
        }
    }

    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }

    /// Text currently rendered in display state
    pub fn display_text(&self) -> Option<&str> {
        match &self.state {
            FieldState::Display { value, .. } => Some(&value.text),
            FieldState::Editing(_) => None,
        }
    }

    pub fn session(&self) -> Option<&EditSession> {
        match &self.state {
            FieldState::Editing(session) => Some(session),
            FieldState::Display { .. } => None,
        }
    }

    fn session_mut(&mut self) -> Option<&mut EditSession> {
        match &mut self.state {
            FieldState::Editing(session) => Some(session),
            FieldState::Display { .. } => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, FieldState::Editing(_))
    }

    /// True while a save is in flight
    pub fn is_saving(&self) -> bool {
        matches!(
            self.state,
            FieldState::Display {
                rollback: Some(_),
                ..
            }
        )
    }

    /// Short state name for logs
    pub fn phase(&self) -> &'static str {
        match &self.state {
            FieldState::Display { rollback: None, .. } => "idle",
            FieldState::Display { rollback: Some(_), .. } => "saving",
            FieldState::Editing(EditSession { error: Some(_), .. }) => "editing(error)",
            FieldState::Editing(_) => "editing",
        }
    }

    /// Enter an edit session. Returns false if already editing or saving.
    pub fn activate(&mut self) -> bool {
        let FieldState::Display {
            value,
            rollback: None,
        } = &self.state
        else {
            return false;
        };

        let original = value.clone();
        let widget = Widget::for_kind(self.kind, &self.options, self.seed_for(&original));
        self.state = FieldState::Editing(EditSession {
            original,
            widget,
            error: None,
        });
        true
    }

    /// Pre-edit seed: the trimmed display text.
    ///
    /// Date display text may be locale-formatted after a commit; the date
    /// widget only holds ISO, so the stored value seeds it instead.
    fn seed_for<'a>(&self, value: &'a DisplayValue) -> &'a str {
        let text = value.text.trim();
        if self.kind == FieldKind::Date && !is_iso_date(text) && is_iso_date(value.raw.trim()) {
            return value.raw.trim();
        }
        text
    }

    /// Leave the edit session, restoring the pre-edit value
    pub fn abort(&mut self) -> bool {
        let FieldState::Editing(session) = &self.state else {
            return false;
        };
        let original = session.original.clone();
        self.state = FieldState::Display {
            value: original,
            rollback: None,
        };
        true
    }

    /// Apply a keystroke to a text-backed widget
    pub fn apply_input(&mut self, msg: &InputMsg) -> bool {
        let Some(session) = self.session_mut() else {
            return false;
        };
        let Widget::Input { input, .. } = &mut session.widget else {
            return false;
        };
        let changed = input.apply(msg);
        if changed && msg.is_editing() {
            session.error = None;
        }
        changed
    }

    /// Replace the pending value (paste, picker, programmatic change)
    pub fn set_value(&mut self, value: &str) -> bool {
        let Some(session) = self.session_mut() else {
            return false;
        };
        session.widget.set_value(value);
        session.error = None;
        true
    }

    /// Choose an option of a choice widget. Returns false if out of range.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(session) = self.session_mut() else {
            return false;
        };
        let Widget::Choice { options, value } = &mut session.widget else {
            return false;
        };
        let Some(option) = options.get(index) else {
            return false;
        };
        *value = Some(option.clone());
        true
    }

    /// Validate the pending value and, if accepted, show it optimistically.
    pub fn commit(&mut self, date_format: DateFormatPreference) -> CommitOutcome {
        let FieldState::Editing(session) = &mut self.state else {
            return CommitOutcome::Ignored;
        };

        match validate(self.kind, &self.options, session.widget.pending_value()) {
            Verdict::Accept(value) => {
                let original = session.original.clone();
                self.state = FieldState::Display {
                    value: DisplayValue::committed(self.kind, &value, date_format),
                    rollback: Some(original),
                };
                CommitOutcome::Submitted(value)
            }
            Verdict::Abort => {
                self.abort();
                CommitOutcome::Aborted
            }
            Verdict::Reject(message) => {
                session.error = Some(message.clone());
                CommitOutcome::Rejected(message)
            }
        }
    }

    /// The in-flight save succeeded: the optimistic value stays
    pub fn confirm_save(&mut self) -> bool {
        match &mut self.state {
            FieldState::Display { rollback, .. } if rollback.is_some() => {
                *rollback = None;
                true
            }
            _ => false,
        }
    }

    /// The in-flight save failed: restore the pre-edit value
    pub fn roll_back(&mut self) -> bool {
        match &mut self.state {
            FieldState::Display { value, rollback } => match rollback.take() {
                Some(original) => {
                    *value = original;
                    true
                }
                None => false,
            },
            FieldState::Editing(_) => false,
        }
    }
}

fn is_iso_date(text: &str) -> bool {
    parse_iso_date(text).is_some()
}
