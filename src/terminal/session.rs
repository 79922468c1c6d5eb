use super::OutputLine;

/// Per-page-view terminal state: what has been printed and what has been
/// typed. Output is append-only except for `clear`; input history is
/// append-only and survives `clear`.
#[derive(Debug, Default)]
pub struct Session {
    output: Vec<OutputLine>,
    input_history: Vec<String>,
    cursor: Option<usize>,
}

impl Session {
    pub fn output(&self) -> &[OutputLine] {
        &self.output
    }

    pub fn input_history(&self) -> &[String] {
        &self.input_history
    }

    /// `None` means "composing fresh input", i.e. not browsing history.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub(super) fn push_input(&mut self, raw: &str) {
        self.input_history.push(raw.to_string());
        self.cursor = None;
    }

    pub(super) fn append(&mut self, lines: impl IntoIterator<Item = OutputLine>) {
        self.output.extend(lines);
    }

    pub(super) fn clear_output(&mut self) {
        self.output.clear();
    }

    /// Moves the cursor toward older entries and returns the recalled line.
    /// At the oldest entry the cursor stays put.
    pub fn recall_previous(&mut self) -> Option<&str> {
        if self.input_history.is_empty() {
            return None;
        }
        let next = match self.cursor {
            None => self.input_history.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(next);
        Some(&self.input_history[next])
    }

    /// Moves the cursor toward newer entries. Stepping past the newest entry
    /// returns `None` and resets the cursor: the input buffer should clear.
    pub fn recall_next(&mut self) -> Option<&str> {
        let i = self.cursor?;
        if i + 1 >= self.input_history.len() {
            self.cursor = None;
            return None;
        }
        self.cursor = Some(i + 1);
        Some(&self.input_history[i + 1])
    }
}

#[cfg(test)]
#[path = "../tests/terminal/session_tests.rs"]
mod tests;
