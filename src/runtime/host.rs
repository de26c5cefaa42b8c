//! The page surface a runtime drives

use std::io::Write;

use crate::model::PageModel;
use crate::view::render_page;

/// Receiver of user-visible side effects
pub trait Host {
    /// Show a message to the user
    fn alert(&mut self, message: &str);

    /// Reload the whole page
    fn reload(&mut self);

    /// The model changed in a way the user can see
    fn redraw(&mut self, _page: &PageModel) {}
}

/// Host that writes to the terminal: alerts to stderr, reload notices and
/// (optionally) every redraw to stdout
#[derive(Debug, Default)]
pub struct TerminalHost {
    /// Print the page on every redraw
    pub echo_redraws: bool,
    /// Set once a reload was requested
    pub reload_requested: bool,
    /// Every alert shown so far
    pub alerts: Vec<String>,
}

impl Host for TerminalHost {
    fn alert(&mut self, message: &str) {
        eprintln!("! {}", message);
        self.alerts.push(message.to_string());
    }

    fn reload(&mut self) {
        self.reload_requested = true;
        println!("(page reload requested)");
    }

    fn redraw(&mut self, page: &PageModel) {
        if !self.echo_redraws {
            return;
        }
        let mut out = std::io::stdout().lock();
        for view in render_page(page) {
            let _ = writeln!(out, "{}", view);
        }
        let _ = writeln!(out);
    }
}
