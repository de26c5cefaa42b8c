//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::model::FieldId;
use crate::persistence::FieldUpdate;

/// Side effects requested by `update`
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Re-render one field
    RedrawField(FieldId),
    /// Persist a committed value; the result comes back as
    /// `FieldMsg::SaveCompleted` for `id`
    SaveField { id: FieldId, update: FieldUpdate },
    /// Show a message to the user
    ShowAlert(String),
    /// Reload the whole page
    ReloadPage,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::RedrawField(_) => true,
            // The optimistic value is already in the model
            Cmd::SaveField { .. } => true,
            Cmd::ShowAlert(_) => false,
            // The page is about to be replaced
            Cmd::ReloadPage => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Iterate over this command and, for batches, everything nested in it
    pub fn flatten(&self) -> Vec<&Cmd> {
        match self {
            Cmd::Batch(cmds) => cmds.iter().flat_map(|c| c.flatten()).collect(),
            other => vec![other],
        }
    }

    /// Field updates this command would send
    pub fn saves(&self) -> Vec<&FieldUpdate> {
        self.flatten()
            .into_iter()
            .filter_map(|c| match c {
                Cmd::SaveField { update, .. } => Some(update),
                _ => None,
            })
            .collect()
    }

    /// Alert texts this command would show
    pub fn alerts(&self) -> Vec<&str> {
        self.flatten()
            .into_iter()
            .filter_map(|c| match c {
                Cmd::ShowAlert(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }
}
