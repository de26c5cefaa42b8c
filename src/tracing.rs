//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging field
//! state transitions and save round-trips.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=field=debug,message=debug` - scoped filtering
//! - `RUST_LOG=fieldedit::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/fieldedit/logs/fieldedit.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{FieldId, PageModel};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var for filtering (default `warn`).
/// File logging writes to `~/.config/fieldedit/logs/fieldedit.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG; stderr keeps stdout for rendered output
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "fieldedit.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of every field's phase for diffing
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    pub fields: Vec<FieldPhase>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPhase {
    pub id: FieldId,
    pub phase: &'static str,
    pub shown: Option<String>,
}

impl PageSnapshot {
    pub fn from_page(page: &PageModel) -> Self {
        Self {
            fields: page
                .fields()
                .map(|(id, field)| FieldPhase {
                    id,
                    phase: field.phase(),
                    shown: field.display_text().map(str::to_string),
                })
                .collect(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &PageSnapshot) -> Option<String> {
        if self.fields.len() != other.fields.len() {
            return Some(format!(
                "field count: {} → {}",
                self.fields.len(),
                other.fields.len()
            ));
        }

        let mut changes = Vec::new();
        for (before, after) in self.fields.iter().zip(&other.fields) {
            if before.phase != after.phase {
                changes.push(format!("{}: {} → {}", after.id, before.phase, after.phase));
            }
            if before.shown != after.shown {
                if let (Some(old), Some(new)) = (&before.shown, &after.shown) {
                    changes.push(format!("{}: {:?} → {:?}", after.id, old, new));
                }
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
