//! Page model - every editable field on one page plus page-wide settings
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod field;

pub use field::{
    CommitOutcome, DisplayValue, EditSession, EditableField, FieldState, InputType, Widget,
};

use std::collections::BTreeMap;
use std::fmt;

use crate::config::FieldEditConfig;
use crate::date_format::DateFormatPreference;
use crate::field::{EntityId, FieldKey, DEFAULT_FIELD_PREFIX};

/// Handle of a field within its page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub u32);

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Settings shared by all fields of a page
#[derive(Debug, Clone)]
pub struct PageSettings {
    /// Record every field on the page belongs to
    pub entity_id: EntityId,
    /// UI-only prefix stripped from field keys before they reach the server
    pub field_prefix: String,
    /// Server field names whose successful save reloads the whole page
    pub reload_fields: Vec<String>,
    /// Display order for dates committed on this page
    pub date_format: DateFormatPreference,
}

impl PageSettings {
    pub fn new(entity_id: EntityId) -> Self {
        Self {
            entity_id,
            field_prefix: DEFAULT_FIELD_PREFIX.to_string(),
            reload_fields: vec![crate::config::DEFAULT_RELOAD_FIELD.to_string()],
            date_format: DateFormatPreference::default(),
        }
    }

    /// Settings from configuration; resolves the date format once, here
    pub fn from_config(config: &FieldEditConfig, entity_id: EntityId) -> Self {
        Self {
            entity_id,
            field_prefix: config.field_prefix.clone(),
            reload_fields: config.reload_fields.clone(),
            date_format: config.date_format.resolve(),
        }
    }

    /// Does saving `key` require a page reload?
    pub fn triggers_reload(&self, key: &FieldKey) -> bool {
        let name = key.server_name(&self.field_prefix);
        self.reload_fields.iter().any(|f| f == name)
    }
}

/// The complete page model
#[derive(Debug, Clone)]
pub struct PageModel {
    pub settings: PageSettings,
    fields: BTreeMap<FieldId, EditableField>,
    next_id: u32,
}

impl PageModel {
    pub fn new(settings: PageSettings) -> Self {
        Self {
            settings,
            fields: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Add a field, returning its handle
    pub fn add_field(&mut self, field: EditableField) -> FieldId {
        let id = FieldId(self.next_id);
        self.next_id += 1;
        self.fields.insert(id, field);
        id
    }

    pub fn field(&self, id: FieldId) -> Option<&EditableField> {
        self.fields.get(&id)
    }

    pub fn field_mut(&mut self, id: FieldId) -> Option<&mut EditableField> {
        self.fields.get_mut(&id)
    }

    /// Look a field up by its on-page key
    pub fn find(&self, key: &str) -> Option<FieldId> {
        self.fields
            .iter()
            .find(|(_, f)| f.key.as_str() == key)
            .map(|(id, _)| *id)
    }

    /// Fields in insertion order
    pub fn fields(&self) -> impl Iterator<Item = (FieldId, &EditableField)> {
        self.fields.iter().map(|(id, f)| (*id, f))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields with a save in flight
    pub fn saving_count(&self) -> usize {
        self.fields.values().filter(|f| f.is_saving()).count()
    }
}
