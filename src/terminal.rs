//! The terminal core: command parsing, the command registry, session state,
//! and the hero/collapsed/overlay lifecycle. Everything here is synchronous
//! and total; the only effects on the outside world are "render these lines"
//! and "please navigate to this path".

use serde::Serialize;

pub mod controller;
pub mod mode;
pub mod parser;
pub mod registry;
pub mod session;

pub use controller::Terminal;
pub use mode::Mode;
pub use parser::ParsedCommand;
pub use registry::{CommandDef, Registry};
pub use session::Session;

/// Styling class for a line or segment. `Input` marks echoed user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Input,
    Output,
    Error,
    Info,
    Success,
    Accent,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutputSegment {
    pub kind: LineKind,
    pub text: String,
}

pub fn seg(kind: LineKind, text: impl Into<String>) -> OutputSegment {
    OutputSegment {
        kind,
        text: text.into(),
    }
}

/// One rendered line. When `segments` is non-empty it wins for display;
/// `text` is always the full plain fallback. An empty line never collapses
/// to zero height (the renderer substitutes a space).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutputLine {
    pub kind: LineKind,
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<OutputSegment>,
}

impl OutputLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            segments: Vec::new(),
        }
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self::new(LineKind::Output, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(LineKind::Error, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(LineKind::Info, text)
    }

    pub fn blank() -> Self {
        Self::new(LineKind::Output, "")
    }

    /// Builds a segmented line; `text` is derived from the segments so the
    /// plain fallback can never drift from what is displayed.
    pub fn from_segments(kind: LineKind, segments: Vec<OutputSegment>) -> Self {
        let text = segments.iter().map(|s| s.text.as_str()).collect();
        Self {
            kind,
            text,
            segments,
        }
    }
}

/// What a command handler hands back: lines to append, an optional
/// navigation request, and the clear-screen flag (which suppresses
/// line-appending entirely, echo included).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    pub lines: Vec<OutputLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigate_to: Option<String>,
    pub clear_screen: bool,
}

impl CommandResult {
    pub fn lines(lines: Vec<OutputLine>) -> Self {
        Self {
            lines,
            ..Self::default()
        }
    }
}
