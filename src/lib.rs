//! Inline field editing - Elm-style state machine for editable record fields
//!
//! Each field on a page switches between showing its value and an edit
//! widget; accepted edits are shown immediately, saved in the background and
//! rolled back if the server refuses them.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod date_format;
pub mod editable;
pub mod field;
pub mod manifest;
pub mod messages;
pub mod model;
pub mod persistence;
pub mod runtime;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::FieldEditConfig;
pub use messages::Msg;
pub use model::PageModel;
