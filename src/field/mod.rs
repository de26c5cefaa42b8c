//! Field identity and type rules: keys, entity ids, kinds, validation.

mod key;
mod kind;
mod validate;

pub use key::{EntityId, FieldKey, DEFAULT_FIELD_PREFIX};
pub use kind::{FieldKind, BOOLEAN_OPTIONS};
pub use validate::{validate, Verdict, EMPTY_VALUE_MESSAGE, INVALID_NUMBER_MESSAGE};
