//! Field kinds

use serde::{Deserialize, Serialize};

/// The two values a boolean field can hold, in display order
pub const BOOLEAN_OPTIONS: [&str; 2] = ["True", "False"];

/// Value type of a field; decides widget, validation and display formatting.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Boolean,
    Number,
    Date,
    Enumerated,
}

impl FieldKind {
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Boolean => "boolean",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            FieldKind::Enumerated => "enumerated",
        }
    }

    /// Kinds whose value space the widget itself closes off.
    ///
    /// An invalid value in a closed kind can only come from outside normal
    /// interaction, so it is discarded silently. Open kinds keep the user
    /// editing instead.
    pub fn is_closed(self) -> bool {
        matches!(
            self,
            FieldKind::Boolean | FieldKind::Date | FieldKind::Enumerated
        )
    }

    /// Kinds edited through a choice widget, committed by its change event
    pub fn uses_choice_widget(self) -> bool {
        matches!(self, FieldKind::Boolean | FieldKind::Enumerated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_kinds() {
        assert!(FieldKind::Boolean.is_closed());
        assert!(FieldKind::Date.is_closed());
        assert!(FieldKind::Enumerated.is_closed());
        assert!(!FieldKind::Text.is_closed());
        assert!(!FieldKind::Number.is_closed());
    }

    #[test]
    fn test_kind_deserializes_lowercase() {
        let kind: FieldKind = serde_json::from_str("\"enumerated\"").unwrap();
        assert_eq!(kind, FieldKind::Enumerated);
        assert_eq!(kind.name(), "enumerated");
    }
}
