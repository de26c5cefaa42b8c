//! Persistence client for the field-modification endpoint
//!
//! One request per accepted commit: `POST` a JSON body
//! `{ "entityId": .., "field": .., "value": .. }`. Any 2xx keeps the
//! optimistic update; the body of a success is never read.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::field::EntityId;

/// Body of a field-modification request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldUpdate {
    pub entity_id: EntityId,
    /// Server-side attribute name (UI prefix already stripped)
    pub field: String,
    pub value: String,
}

/// Why a save failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistError {
    /// No HTTP response at all (connection refused, DNS, ...)
    Network(String),
    /// Non-2xx without a usable message; carries the status line
    Status(String),
    /// Non-2xx whose body named the problem
    Server { status: u16, message: String },
}

impl PersistError {
    /// Interpret a failed response.
    ///
    /// A JSON body with a non-empty `message` (preferred) or `error` string
    /// becomes [`PersistError::Server`]; anything else falls back to the
    /// status line.
    pub fn from_response(status: u16, status_line: &str, body: &str) -> Self {
        let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
        let message = parsed.as_ref().and_then(|json| {
            ["message", "error"]
                .iter()
                .filter_map(|k| json.get(k).and_then(|v| v.as_str()))
                .find(|s| !s.trim().is_empty())
                .map(str::to_string)
        });

        match message {
            Some(message) => PersistError::Server { status, message },
            None => PersistError::Status(status_line.to_string()),
        }
    }

    /// Transport-level failure (as opposed to a server-side rejection)
    pub fn is_transport(&self) -> bool {
        !matches!(self, PersistError::Server { .. })
    }
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistError::Network(detail) => write!(f, "Failed to update field: {}", detail),
            PersistError::Status(line) => write!(f, "Failed to update field (HTTP {})", line),
            PersistError::Server { message, .. } => f.write_str(message),
        }
    }
}

impl std::error::Error for PersistError {}

/// Something that can store a field value.
///
/// Implementations are called from worker threads, one call per save.
pub trait Persistence: Send + Sync {
    fn save(&self, update: &FieldUpdate) -> Result<(), PersistError>;
}

/// Persistence over HTTP using a blocking `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpPersistence {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpPersistence {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, PersistError> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| PersistError::Network(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Persistence for HttpPersistence {
    fn save(&self, update: &FieldUpdate) -> Result<(), PersistError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            field = %update.field,
            "sending field update"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(update)
            .send()
            .map_err(|e| PersistError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let status_line = match status.canonical_reason() {
            Some(reason) => format!("{} {}", status.as_u16(), reason),
            None => status.as_u16().to_string(),
        };
        let body = response.text().unwrap_or_default();
        Err(PersistError::from_response(
            status.as_u16(),
            &status_line,
            &body,
        ))
    }
}
