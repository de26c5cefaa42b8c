//! Command-line argument parsing for the field editor
//!
//! Supports:
//! - Editing a single field (`set`)
//! - Editing several fields of a page manifest at once (`apply`)
//! - Showing the resolved date-format preference (`date-format`)

use clap::{Parser, Subcommand};
use std::collections::HashSet;
use std::path::PathBuf;

use crate::field::FieldKind;

/// Inline field editing against a field-modification endpoint
#[derive(Parser, Debug)]
#[command(
    name = "fieldedit",
    version,
    about = "Edit entity fields in place with optimistic saves"
)]
pub struct CliArgs {
    /// Config file (defaults to ~/.config/fieldedit/config.yaml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Field-modification endpoint URL (overrides the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Edit one field and wait for the save to finish
    Set {
        /// Entity the field belongs to
        #[arg(long)]
        entity: String,

        /// Field key as shown on the page (e.g. field-first_name)
        #[arg(long)]
        key: String,

        /// Field kind
        #[arg(long, value_enum, default_value_t = FieldKind::Text)]
        kind: FieldKind,

        /// Allowed option (enumerated fields; repeat for each option)
        #[arg(long = "option", value_name = "OPTION")]
        options: Vec<String>,

        /// Value currently displayed
        #[arg(long, default_value = "")]
        current: String,

        /// New value to commit
        #[arg(long)]
        value: String,
    },

    /// Edit fields of a page manifest (YAML or JSON)
    Apply {
        /// Page manifest file
        #[arg(long, value_name = "FILE")]
        page: PathBuf,

        /// Edits to make
        #[arg(value_name = "KEY=VALUE", value_parser = parse_assignment, required = true)]
        assignments: Vec<Assignment>,
    },

    /// Print the date-format preference that would be used
    DateFormat,

    /// Write the effective configuration (including --endpoint) to the config file
    InitConfig,
}

/// One `KEY=VALUE` edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub key: String,
    pub value: String,
}

/// Parse `KEY=VALUE`; the value may contain further `=` and may be empty
pub fn parse_assignment(raw: &str) -> Result<Assignment, String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing field key in '{}'", raw));
    }
    Ok(Assignment {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Refuse a field named more than once
pub fn ensure_unique_keys(assignments: &[Assignment]) -> Result<(), String> {
    let mut seen = HashSet::new();
    match assignments.iter().find(|a| !seen.insert(a.key.as_str())) {
        Some(dup) => Err(format!("field {} is assigned more than once", dup.key)),
        None => Ok(()),
    }
}
