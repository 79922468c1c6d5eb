use crate::content::SiteContent;
use crate::site::{Route, Site};
use crate::terminal::{Mode, Terminal};

use super::input::Input;

pub(super) struct App {
    pub(super) site: Site,
    pub(super) term: Terminal,
    pub(super) input: Input,
    pub(super) quit: bool,
}

impl App {
    pub(super) fn load(content: SiteContent) -> Self {
        let term = Terminal::new(content.clone(), "/");
        let site = Site::new(content, "/");
        Self {
            site,
            term,
            input: Input::default(),
            quit: false,
        }
    }

    /// Whether keystrokes currently belong to the terminal. Collapsed mode
    /// leaves the keyboard to page navigation.
    pub(super) fn terminal_focused(&self) -> bool {
        self.term.mode() != Mode::Collapsed
    }

    pub(super) fn submit_input(&mut self) {
        let raw = std::mem::take(&mut self.input.buf);
        self.input.clear();
        if let Some(path) = self.term.submit(&raw) {
            self.navigate_to(&path);
        }
    }

    pub(super) fn navigate(&mut self, route: Route) {
        self.navigate_to(route.path());
    }

    /// Executes a navigation and feeds the new location back to the mode
    /// machine, exactly as the host router would.
    pub(super) fn navigate_to(&mut self, path: &str) {
        self.site.navigate(path);
        self.term.path_changed(path);
    }

    pub(super) fn toggle_overlay(&mut self) {
        self.term.toggle_overlay();
    }
}
