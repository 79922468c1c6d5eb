use serde::Serialize;

/// How the terminal is presented: embedded in the homepage hero, minimized
/// to a floating button, or expanded as a dismissible overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Hero,
    Collapsed,
    Overlay,
}

/// The lifecycle machine. The mode is a pure function of "are we on the
/// site root" and "has the user asked for the overlay"; the root path
/// always wins and cancels any pending overlay request.
#[derive(Debug)]
pub struct ModeState {
    on_root: bool,
    overlay_requested: bool,
}

impl ModeState {
    pub fn at_path(path: &str) -> Self {
        Self {
            on_root: is_root(path),
            overlay_requested: false,
        }
    }

    pub fn mode(&self) -> Mode {
        if self.on_root {
            Mode::Hero
        } else if self.overlay_requested {
            Mode::Overlay
        } else {
            Mode::Collapsed
        }
    }

    /// Re-evaluated on every navigation, client-side or full. Landing on the
    /// root clears the overlay request, so leaving again starts collapsed.
    pub fn path_changed(&mut self, path: &str) {
        self.on_root = is_root(path);
        if self.on_root {
            self.overlay_requested = false;
        }
    }

    /// Ignored on the root path, where hero always wins.
    pub fn toggle_overlay(&mut self) {
        if !self.on_root {
            self.overlay_requested = !self.overlay_requested;
        }
    }
}

fn is_root(path: &str) -> bool {
    path == "/"
}

#[cfg(test)]
#[path = "../tests/terminal/mode_tests.rs"]
mod tests;
