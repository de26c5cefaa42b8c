//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use fieldedit::commands::Cmd;
use fieldedit::date_format::DateFormatPreference;
use fieldedit::field::{EntityId, FieldKind};
use fieldedit::messages::{FieldMsg, Msg};
use fieldedit::model::{EditableField, FieldId, PageModel, PageSettings};
use fieldedit::persistence::{FieldUpdate, PersistError, Persistence};
use fieldedit::runtime::{Host, Runtime};
use fieldedit::update::update;

pub const ENTITY: u64 = 42;

/// Page for entity 42 holding a single field
pub fn test_page(key: &str, kind: FieldKind, value: &str) -> (PageModel, FieldId) {
    test_page_with_options(key, kind, &[], value)
}

pub fn test_page_with_options(
    key: &str,
    kind: FieldKind,
    options: &[&str],
    value: &str,
) -> (PageModel, FieldId) {
    let mut page = PageModel::new(PageSettings::new(EntityId::from(ENTITY)));
    let id = page.add_field(
        EditableField::new(key, kind, value)
            .with_options(options.iter().map(|o| o.to_string()).collect()),
    );
    (page, id)
}

pub fn with_date_format(mut page: PageModel, date_format: DateFormatPreference) -> PageModel {
    page.settings.date_format = date_format;
    page
}

/// Send one field message through `update`
pub fn send(page: &mut PageModel, id: FieldId, msg: FieldMsg) -> Option<Cmd> {
    update(page, Msg::field(id, msg))
}

/// Activate, replace the value, and press Enter; returns the commit's command
pub fn type_and_enter(page: &mut PageModel, id: FieldId, value: &str) -> Option<Cmd> {
    send(page, id, FieldMsg::Activate);
    send(page, id, FieldMsg::SetValue(value.to_string()));
    send(page, id, FieldMsg::Enter)
}

/// Activate, replace the value, and blur (works for every widget)
pub fn set_and_blur(page: &mut PageModel, id: FieldId, value: &str) -> Option<Cmd> {
    send(page, id, FieldMsg::Activate);
    send(page, id, FieldMsg::SetValue(value.to_string()));
    send(page, id, FieldMsg::Blur)
}

/// Every save request a command would issue
pub fn saves_of(cmd: &Option<Cmd>) -> Vec<FieldUpdate> {
    cmd.as_ref()
        .map(|c| c.saves().into_iter().cloned().collect())
        .unwrap_or_default()
}

pub fn alerts_of(cmd: &Option<Cmd>) -> Vec<String> {
    cmd.as_ref()
        .map(|c| c.alerts().into_iter().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Persistence that records every request and answers from a script
/// (success once the script runs out)
#[derive(Default)]
pub struct RecordingPersistence {
    requests: Mutex<Vec<FieldUpdate>>,
    responses: Mutex<VecDeque<Result<(), PersistError>>>,
}

impl RecordingPersistence {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn answering(responses: Vec<Result<(), PersistError>>) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(responses.into()),
        })
    }

    pub fn requests(&self) -> Vec<FieldUpdate> {
        self.requests.lock().unwrap().clone()
    }
}

impl Persistence for RecordingPersistence {
    fn save(&self, update: &FieldUpdate) -> Result<(), PersistError> {
        self.requests.lock().unwrap().push(update.clone());
        self.responses.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }
}

/// Host that remembers alerts, reloads and redraw count
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub alerts: Vec<String>,
    pub reloads: usize,
    pub redraws: usize,
}

impl Host for RecordingHost {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn reload(&mut self) {
        self.reloads += 1;
    }

    fn redraw(&mut self, _page: &PageModel) {
        self.redraws += 1;
    }
}

pub fn test_runtime(
    page: PageModel,
    persistence: Arc<RecordingPersistence>,
) -> Runtime<RecordingHost> {
    Runtime::new(page, persistence, RecordingHost::default())
}
