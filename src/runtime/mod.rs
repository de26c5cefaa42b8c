//! Runtime module - executes commands and feeds results back as messages
//!
//! - `app` - the message loop and worker threads for saves
//! - `host` - the page surface the runtime reports to (alerts, reloads, redraws)

pub mod app;
pub mod host;

pub use app::{EditStart, Runtime};
pub use host::{Host, TerminalHost};
