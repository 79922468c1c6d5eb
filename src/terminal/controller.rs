use super::mode::{Mode, ModeState};
use super::registry::Registry;
use super::session::Session;
use super::{LineKind, OutputLine, parser};
use crate::content::SiteContent;

/// The long-lived controller behind one page-view's terminal. Owns the
/// session, the lifecycle machine, and the registry; the presentation
/// surface owns nothing but the in-progress input buffer.
pub struct Terminal {
    content: SiteContent,
    registry: Registry,
    session: Session,
    mode: ModeState,
}

impl Terminal {
    pub fn new(content: SiteContent, path: &str) -> Self {
        Self {
            content,
            registry: Registry::with_defaults(),
            session: Session::default(),
            mode: ModeState::at_path(path),
        }
    }

    /// Runs the full submission pipeline and returns the navigation request,
    /// if any, for the host router to execute. At most one per submission.
    ///
    /// Blank input is a silent no-op: no echo, no output, no history entry.
    pub fn submit(&mut self, raw: &str) -> Option<String> {
        let parsed = parser::parse(raw);
        if parsed.name.is_empty() {
            return None;
        }

        self.session.push_input(raw);
        let echo = OutputLine::new(LineKind::Input, format!("$ {}", parsed.raw));

        let Some(handler) = self.registry.get(&parsed.name) else {
            self.session.append([
                echo,
                OutputLine::error(format!("command not found: {}", parsed.name)),
            ]);
            return None;
        };

        let result = handler(&self.content, &parsed.args);

        if result.clear_screen {
            // Hard reset: the echo line is discarded with everything else.
            self.session.clear_output();
            return None;
        }

        self.session
            .append(std::iter::once(echo).chain(result.lines));
        result.navigate_to
    }

    pub fn recall_previous(&mut self) -> Option<&str> {
        self.session.recall_previous()
    }

    pub fn recall_next(&mut self) -> Option<&str> {
        self.session.recall_next()
    }

    pub fn toggle_overlay(&mut self) {
        self.mode.toggle_overlay();
    }

    /// The host calls this after every navigation, including ones the
    /// terminal itself requested.
    pub fn path_changed(&mut self, path: &str) {
        self.mode.path_changed(path);
    }

    pub fn mode(&self) -> Mode {
        self.mode.mode()
    }

    pub fn output(&self) -> &[OutputLine] {
        self.session.output()
    }

    pub fn input_history(&self) -> &[String] {
        self.session.input_history()
    }

    pub fn history_cursor(&self) -> Option<usize> {
        self.session.cursor()
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub fn register(&mut self, name: &'static str, handler: super::registry::Handler) {
        self.registry.register(name, handler);
    }
}

#[cfg(test)]
#[path = "../tests/terminal/controller_tests.rs"]
mod tests;
