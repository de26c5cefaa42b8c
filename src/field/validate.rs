//! Commit-time validation

use crate::date_format::parse_iso_date;

use super::kind::{FieldKind, BOOLEAN_OPTIONS};

pub const INVALID_NUMBER_MESSAGE: &str = "Please enter a valid number";
pub const EMPTY_VALUE_MESSAGE: &str = "Value cannot be empty";

/// Outcome of validating a pending value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Value may be sent, in its normalized (trimmed) form
    Accept(String),
    /// Discard the edit silently and restore the pre-edit value
    Abort,
    /// Keep editing; show the message
    Reject(String),
}

/// Judge a pending value against the rules of `kind`.
///
/// `options` is only consulted for [`FieldKind::Enumerated`]. Choice values
/// must match exactly; typed values are trimmed first.
pub fn validate(kind: FieldKind, options: &[String], pending: &str) -> Verdict {
    let value = match kind {
        FieldKind::Boolean | FieldKind::Enumerated => pending,
        FieldKind::Text | FieldKind::Number | FieldKind::Date => pending.trim(),
    };

    let problem = match kind {
        FieldKind::Boolean => (!BOOLEAN_OPTIONS.contains(&value)).then_some(""),
        FieldKind::Enumerated => (!options.iter().any(|o| o == value)).then_some(""),
        FieldKind::Date => parse_iso_date(value).is_none().then_some(""),
        FieldKind::Number => match value.parse::<f64>() {
            Ok(n) if n.is_finite() => None,
            _ => Some(INVALID_NUMBER_MESSAGE),
        },
        FieldKind::Text => value.is_empty().then_some(EMPTY_VALUE_MESSAGE),
    };

    match problem {
        None => Verdict::Accept(value.to_string()),
        Some(_) if kind.is_closed() => Verdict::Abort,
        Some(message) => Verdict::Reject(message.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> Vec<String> {
        vec!["red".into(), "green".into(), "blue".into()]
    }

    #[test]
    fn test_boolean_exact_match_only() {
        assert_eq!(
            validate(FieldKind::Boolean, &[], "True"),
            Verdict::Accept("True".into())
        );
        assert_eq!(validate(FieldKind::Boolean, &[], "true"), Verdict::Abort);
        assert_eq!(validate(FieldKind::Boolean, &[], "maybe"), Verdict::Abort);
        assert_eq!(validate(FieldKind::Boolean, &[], ""), Verdict::Abort);
    }

    #[test]
    fn test_number_rejects_garbage_without_abort() {
        assert_eq!(
            validate(FieldKind::Number, &[], "abc"),
            Verdict::Reject(INVALID_NUMBER_MESSAGE.into())
        );
        assert_eq!(
            validate(FieldKind::Number, &[], "NaN"),
            Verdict::Reject(INVALID_NUMBER_MESSAGE.into())
        );
        assert_eq!(
            validate(FieldKind::Number, &[], ""),
            Verdict::Reject(INVALID_NUMBER_MESSAGE.into())
        );
    }

    #[test]
    fn test_number_accepts_and_trims() {
        assert_eq!(
            validate(FieldKind::Number, &[], " -12.5 "),
            Verdict::Accept("-12.5".into())
        );
        assert_eq!(
            validate(FieldKind::Number, &[], "1e3"),
            Verdict::Accept("1e3".into())
        );
    }

    #[test]
    fn test_date_requires_calendar_date() {
        assert_eq!(
            validate(FieldKind::Date, &[], "2025-11-12"),
            Verdict::Accept("2025-11-12".into())
        );
        assert_eq!(validate(FieldKind::Date, &[], ""), Verdict::Abort);
        assert_eq!(validate(FieldKind::Date, &[], "2025-02-30"), Verdict::Abort);
        assert_eq!(validate(FieldKind::Date, &[], "2025-1-5"), Verdict::Abort);
    }

    #[test]
    fn test_enumerated_membership() {
        assert_eq!(
            validate(FieldKind::Enumerated, &colors(), "green"),
            Verdict::Accept("green".into())
        );
        assert_eq!(
            validate(FieldKind::Enumerated, &colors(), "purple"),
            Verdict::Abort
        );
    }

    #[test]
    fn test_empty_text_is_retryable() {
        assert_eq!(
            validate(FieldKind::Text, &[], "   "),
            Verdict::Reject(EMPTY_VALUE_MESSAGE.into())
        );
        assert_eq!(
            validate(FieldKind::Text, &[], " Jane "),
            Verdict::Accept("Jane".into())
        );
    }
}
