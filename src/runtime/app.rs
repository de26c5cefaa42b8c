//! Message loop: runs `update`, executes the resulting commands and
//! collects save results from worker threads

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::commands::Cmd;
use crate::messages::{FieldMsg, Msg};
use crate::model::{FieldId, PageModel};
use crate::persistence::Persistence;
use crate::update::update;

use super::host::Host;

/// Where a scripted edit stands once its commit has been attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditStart {
    /// Accepted; a save is in flight
    Saving,
    /// Kept open with a validation error
    Rejected,
    /// Discarded by validation; the previous value is shown again
    Aborted,
    /// The field was missing, or busy editing or saving
    Ignored,
}

/// Drives one page: owns the model, the persistence client and the host.
///
/// Each save runs on its own worker thread, so saves of different fields
/// overlap freely; results come back through a channel and are applied by
/// [`Runtime::pump`] or [`Runtime::wait_idle`] on the caller's thread.
pub struct Runtime<H: Host> {
    model: PageModel,
    persistence: Arc<dyn Persistence>,
    host: H,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    in_flight: usize,
}

impl<H: Host> Runtime<H> {
    pub fn new(model: PageModel, persistence: Arc<dyn Persistence>, host: H) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            persistence,
            host,
            msg_tx,
            msg_rx,
            in_flight: 0,
        }
    }

    pub fn model(&self) -> &PageModel {
        &self.model
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Saves started but not yet applied
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Activate field `id`, replace its value and commit by blurring it,
    /// the way a user leaving the field would
    pub fn edit(&mut self, id: FieldId, value: impl Into<String>) -> EditStart {
        match self.model.field(id) {
            Some(field) if !field.is_editing() && !field.is_saving() => {}
            _ => return EditStart::Ignored,
        }

        self.dispatch(Msg::field(id, FieldMsg::Activate));
        self.dispatch(Msg::field(id, FieldMsg::SetValue(value.into())));
        self.dispatch(Msg::field(id, FieldMsg::Blur));

        match self.model.field(id) {
            Some(field) if field.is_saving() => EditStart::Saving,
            Some(field) if field.is_editing() => EditStart::Rejected,
            Some(_) => EditStart::Aborted,
            None => EditStart::Ignored,
        }
    }

    /// Run one message through `update` and execute what it asks for
    pub fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            let redraw = cmd.needs_redraw();
            self.process_cmd(cmd);
            if redraw {
                self.host.redraw(&self.model);
            }
        }
    }

    /// Apply every save result that has already arrived. Never blocks.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.receive(msg);
            handled += 1;
        }
        handled
    }

    /// Block until every started save has been applied, or `timeout` passes.
    /// Returns true if the runtime is idle.
    pub fn wait_idle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.in_flight > 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.msg_rx.recv_timeout(remaining) {
                Ok(msg) => self.receive(msg),
                Err(RecvTimeoutError::Timeout) => {
                    tracing::warn!(in_flight = self.in_flight, "timed out waiting for saves");
                    return false;
                }
                // Unreachable while `self` holds a sender
                Err(RecvTimeoutError::Disconnected) => return false,
            }
        }
        true
    }

    fn receive(&mut self, msg: Msg) {
        if matches!(
            msg,
            Msg::Field {
                msg: FieldMsg::SaveCompleted(_),
                ..
            }
        ) {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
        self.dispatch(msg);
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::RedrawField(_) => {}
            Cmd::SaveField { id, update } => {
                let tx = self.msg_tx.clone();
                let persistence = Arc::clone(&self.persistence);
                self.in_flight += 1;
                std::thread::spawn(move || {
                    let result = persistence.save(&update);
                    let _ = tx.send(Msg::field(id, FieldMsg::SaveCompleted(result)));
                });
            }
            Cmd::ShowAlert(message) => {
                self.host.alert(&message);
            }
            Cmd::ReloadPage => {
                tracing::info!("page reload requested");
                self.host.reload();
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }
}
