//! Field renderer
//!
//! Turns field state into a `FieldView`: a plain description of what the
//! page shows for a field (static text, an input, or a choice list) plus the
//! class name distinguishing display, editing, saving and error states.
//! `Display` renders a view as a single terminal line.

use std::fmt;

use crate::model::{EditableField, FieldState, PageModel, Widget};

pub const CLASS_IDLE: &str = "editable";
pub const CLASS_SAVING: &str = "editable saving";
pub const CLASS_EDITING: &str = "editing";
pub const CLASS_ERROR: &str = "editing error";

/// What a field currently presents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewContent {
    /// Inert, activatable display text
    Text(String),
    /// Text-backed input with its cursor (character index)
    Input {
        input_type: &'static str,
        value: String,
        cursor: usize,
    },
    /// Exclusive choice; `selected` is None when the value matches no option
    Select {
        options: Vec<String>,
        selected: Option<usize>,
    },
}

/// Rendered field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub key: String,
    pub class: &'static str,
    pub content: ViewContent,
    pub error: Option<String>,
}

impl FieldView {
    /// True when the field shows static text (and can be activated)
    pub fn is_display(&self) -> bool {
        matches!(self.content, ViewContent::Text(_))
    }
}

/// Render one field
pub fn render_field(field: &EditableField) -> FieldView {
    let key = field.key.to_string();
    match &field.state {
        FieldState::Display { value, rollback } => FieldView {
            key,
            class: if rollback.is_some() {
                CLASS_SAVING
            } else {
                CLASS_IDLE
            },
            content: ViewContent::Text(value.text.clone()),
            error: None,
        },
        FieldState::Editing(session) => {
            let content = match &session.widget {
                Widget::Input { input_type, input } => ViewContent::Input {
                    input_type: input_type.name(),
                    value: input.text().to_string(),
                    cursor: input.cursor(),
                },
                Widget::Choice { options, .. } => ViewContent::Select {
                    options: options.clone(),
                    selected: session.widget.selected_index(),
                },
            };
            FieldView {
                key,
                class: if session.error.is_some() {
                    CLASS_ERROR
                } else {
                    CLASS_EDITING
                },
                content,
                error: session.error.clone(),
            }
        }
    }
}

/// Render every field of a page, in page order
pub fn render_page(page: &PageModel) -> Vec<FieldView> {
    page.fields().map(|(_, field)| render_field(field)).collect()
}

impl fmt::Display for FieldView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<24} ", self.key)?;
        match &self.content {
            ViewContent::Text(text) => write!(f, "{}", text)?,
            ViewContent::Input {
                input_type,
                value,
                cursor,
            } => {
                let (before, after): (String, String) = (
                    value.chars().take(*cursor).collect(),
                    value.chars().skip(*cursor).collect(),
                );
                write!(f, "[{}|{}] ({})", before, after, input_type)?
            }
            ViewContent::Select { options, selected } => {
                let items: Vec<String> = options
                    .iter()
                    .enumerate()
                    .map(|(i, o)| {
                        if Some(i) == *selected {
                            format!("({})", o)
                        } else {
                            o.clone()
                        }
                    })
                    .collect();
                write!(f, "<{}>", items.join(" | "))?
            }
        }
        if self.class == CLASS_SAVING {
            write!(f, "  (saving)")?;
        }
        if let Some(error) = &self.error {
            write!(f, "  ! {}", error)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_format::DateFormatPreference;
    use crate::field::FieldKind;

    #[test]
    fn test_idle_field_renders_text() {
        let field = EditableField::new("field-name", FieldKind::Text, "Jane");
        let view = render_field(&field);
        assert_eq!(view.class, CLASS_IDLE);
        assert_eq!(view.content, ViewContent::Text("Jane".into()));
        assert!(view.is_display());
    }

    #[test]
    fn test_editing_number_renders_input() {
        let mut field = EditableField::new("field-age", FieldKind::Number, "41");
        field.activate();
        let view = render_field(&field);
        assert_eq!(view.class, CLASS_EDITING);
        assert_eq!(
            view.content,
            ViewContent::Input {
                input_type: "number",
                value: "41".into(),
                cursor: 2
            }
        );
        assert_eq!(view.to_string().trim_end(), format!("{:<24} [41|] (number)", "field-age"));
    }

    #[test]
    fn test_unselected_boolean_renders_without_choice() {
        let mut field = EditableField::new("field-active", FieldKind::Boolean, "yes");
        field.activate();
        let view = render_field(&field);
        assert_eq!(
            view.content,
            ViewContent::Select {
                options: vec!["True".into(), "False".into()],
                selected: None
            }
        );
    }

    #[test]
    fn test_saving_and_error_classes() {
        let mut field = EditableField::new("field-age", FieldKind::Number, "41");
        field.activate();
        field.set_value("x");
        field.commit(DateFormatPreference::YearFirst);
        let view = render_field(&field);
        assert_eq!(view.class, CLASS_ERROR);
        assert!(view.to_string().contains("! "));

        field.set_value("42");
        field.commit(DateFormatPreference::YearFirst);
        let view = render_field(&field);
        assert_eq!(view.class, CLASS_SAVING);
        assert!(view.to_string().ends_with("(saving)"));
    }
}
