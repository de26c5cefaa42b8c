//! Field keys and entity ids as they travel between page and server.

use std::fmt;

use serde::{Deserialize, Serialize};

/// UI-only prefix carried by on-page field keys (`field-first_name`)
pub const DEFAULT_FIELD_PREFIX: &str = "field-";

/// Stable identifier of an on-page field.
///
/// The server knows the attribute without the UI prefix; see [`FieldKey::server_name`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldKey(String);

impl FieldKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The record attribute name the server expects.
    ///
    /// Keys that do not carry `prefix` are passed through unchanged.
    pub fn server_name<'a>(&'a self, prefix: &str) -> &'a str {
        self.0.strip_prefix(prefix).unwrap_or(&self.0)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for FieldKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Opaque id of the backend record a page's fields belong to.
///
/// Kept as raw JSON so it is echoed back exactly as the page received it:
/// numeric ids stay numbers, string ids stay strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(serde_json::Value);

impl EntityId {
    pub fn as_json(&self) -> &serde_json::Value {
        &self.0
    }

    /// Interpret a command-line id: input that prints back identically as
    /// an unsigned integer becomes a number, anything else stays a string
    pub fn parse_cli(raw: &str) -> Self {
        match raw.parse::<u64>() {
            Ok(n) if n.to_string() == raw => Self::from(n),
            _ => Self::from(raw),
        }
    }
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        Self(serde_json::Value::from(id))
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self(serde_json::Value::from(id))
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(serde_json::Value::from(id))
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            serde_json::Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}
