//! Single-line text editing for field widgets.
//!
//! Text, number and date widgets share one input buffer; they differ only in
//! the [`EditConstraints`] applied to keystrokes.
//!
//! # Example
//!
//! ```ignore
//! use fieldedit::editable::{EditConstraints, InputMsg, InputState};
//!
//! let mut input = InputState::new("2025-11-1", EditConstraints::iso_date());
//! input.apply(&InputMsg::InsertChar('2'));
//! assert_eq!(input.text(), "2025-11-12");
//! ```

mod constraints;
mod input;
mod messages;

pub use constraints::{CharFilter, EditConstraints};
pub use input::InputState;
pub use messages::InputMsg;
