//! Field update functions
//!
//! Handles FieldMsg messages: activation, editing, commit/abort and the
//! reconciliation of finished saves.

use crate::commands::Cmd;
use crate::messages::FieldMsg;
use crate::model::{CommitOutcome, FieldId, PageModel};
use crate::persistence::{FieldUpdate, PersistError};

/// Handle a message for field `id`
pub fn update_field(model: &mut PageModel, id: FieldId, msg: FieldMsg) -> Option<Cmd> {
    match msg {
        FieldMsg::Activate => activate(model, id),
        FieldMsg::Input(input) => {
            let field = model.field_mut(id)?;
            field.apply_input(&input).then_some(Cmd::RedrawField(id))
        }
        FieldMsg::SetValue(value) => {
            let field = model.field_mut(id)?;
            field.set_value(&value).then_some(Cmd::RedrawField(id))
        }
        FieldMsg::Select(index) => select(model, id, index),
        FieldMsg::Enter => {
            // Choice widgets commit through their change event, not Enter
            if model.field(id)?.kind.uses_choice_widget() {
                return None;
            }
            commit(model, id)
        }
        FieldMsg::Blur => commit(model, id),
        FieldMsg::Escape => abort(model, id),
        FieldMsg::SaveCompleted(result) => save_completed(model, id, result),
    }
}

/// Swap the display for an input seeded with the current value
fn activate(model: &mut PageModel, id: FieldId) -> Option<Cmd> {
    let field = model.field_mut(id)?;
    if field.is_saving() {
        tracing::debug!(field = %field.key, "activation ignored while saving");
        return None;
    }
    if !field.activate() {
        return None;
    }
    tracing::debug!(field = %field.key, kind = field.kind.name(), "edit session started");
    Some(Cmd::RedrawField(id))
}

/// Discard the edit without validation or network traffic
fn abort(model: &mut PageModel, id: FieldId) -> Option<Cmd> {
    let field = model.field_mut(id)?;
    if !field.abort() {
        return None;
    }
    tracing::debug!(field = %field.key, "edit aborted");
    Some(Cmd::RedrawField(id))
}

/// Choose an option, then commit as the widget's change event does
fn select(model: &mut PageModel, id: FieldId, index: usize) -> Option<Cmd> {
    let field = model.field_mut(id)?;
    if !field.select(index) {
        tracing::debug!(field = %field.key, index, "selection out of range");
        return None;
    }
    commit(model, id)
}

/// Validate the pending value and, if accepted, show it and save it
fn commit(model: &mut PageModel, id: FieldId) -> Option<Cmd> {
    let date_format = model.settings.date_format;
    let field = model.field_mut(id)?;
    let outcome = field.commit(date_format);
    let key = field.key.clone();

    match outcome {
        CommitOutcome::Submitted(value) => {
            let update = FieldUpdate {
                entity_id: model.settings.entity_id.clone(),
                field: key.server_name(&model.settings.field_prefix).to_string(),
                value,
            };
            tracing::debug!(field = %key, value = %update.value, "commit accepted");
            Some(Cmd::batch(vec![
                Cmd::SaveField { id, update },
                Cmd::RedrawField(id),
            ]))
        }
        CommitOutcome::Aborted => {
            tracing::debug!(field = %key, "invalid value discarded");
            Some(Cmd::RedrawField(id))
        }
        CommitOutcome::Rejected(message) => {
            tracing::debug!(field = %key, %message, "commit rejected");
            Some(Cmd::batch(vec![
                Cmd::ShowAlert(message),
                Cmd::RedrawField(id),
            ]))
        }
        CommitOutcome::Ignored => None,
    }
}

/// Keep the optimistic value, or roll back and tell the user
fn save_completed(
    model: &mut PageModel,
    id: FieldId,
    result: Result<(), PersistError>,
) -> Option<Cmd> {
    let reload = model
        .field(id)
        .is_some_and(|f| model.settings.triggers_reload(&f.key));
    let field = model.field_mut(id)?;

    match result {
        Ok(()) => {
            if !field.confirm_save() {
                tracing::warn!(field = %field.key, "save completed with no save in flight");
                return None;
            }
            tracing::info!(field = %field.key, "field saved");
            if reload {
                Some(Cmd::ReloadPage)
            } else {
                Some(Cmd::RedrawField(id))
            }
        }
        Err(err) => {
            if !field.roll_back() {
                tracing::warn!(
                    field = %field.key,
                    error = %err,
                    "save failed with no save in flight"
                );
                return None;
            }
            tracing::warn!(field = %field.key, error = %err, "save failed, value rolled back");
            Some(Cmd::batch(vec![
                Cmd::ShowAlert(err.to_string()),
                Cmd::RedrawField(id),
            ]))
        }
    }
}
