//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod field;
mod page;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::PageModel;

#[cfg(debug_assertions)]
use crate::tracing::PageSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use field::update_field;
pub use page::update_page;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut PageModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut PageModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Field { id, msg } => field::update_field(model, id, msg),
        Msg::Page(m) => page::update_page(model, m),
    }
}

/// Update with tracing instrumentation (debug builds only)
#[cfg(debug_assertions)]
fn update_traced(model: &mut PageModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = PageSnapshot::from_page(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = PageSnapshot::from_page(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "field", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Field#0::Activate`
/// - `Field#2::Input(InsertChar('x'))`
/// - `Page::SetDateFormat(DayFirst)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Field { id, msg } => format!("Field{}::{:?}", id, msg),
        Msg::Page(m) => format!("Page::{:?}", m),
    }
}
