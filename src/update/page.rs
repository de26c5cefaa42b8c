//! Page update functions

use crate::commands::Cmd;
use crate::messages::PageMsg;
use crate::model::PageModel;

/// Handle page-wide messages
pub fn update_page(model: &mut PageModel, msg: PageMsg) -> Option<Cmd> {
    match msg {
        PageMsg::SetDateFormat(date_format) => {
            if model.settings.date_format == date_format {
                return None;
            }
            tracing::info!(?date_format, "date display format changed");
            // Only affects dates committed from now on; shown values are
            // what the server or an earlier commit produced
            model.settings.date_format = date_format;
            None
        }
    }
}
